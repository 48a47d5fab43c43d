// src/cli.rs
use std::{ env, io, path::{ Path, PathBuf } };

use crate::config::consts::STORE_DIR;
use crate::config::options::{ AppOptions, ExportFormat, OrderScope };
use crate::model::CaseQuery;
use crate::session::{ self, FileSource, ManualSession, PageSource };
use crate::specs::case_types;
use crate::{ file, store, summary };

type BoxErr = Box<dyn std::error::Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File,
    Wait,
    Replay(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    pub source: Source,
    /// Orders file is written only when `-o` was given.
    pub write_orders: bool,
    pub summary_path: Option<PathBuf>,
    pub list_types: bool,
    pub list_queries: bool,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        let mut options = AppOptions::default();
        // The CLI writes headers only on request.
        options.export.include_headers = false;
        Self {
            options,
            source: Source::File,
            write_orders: false,
            summary_path: None,
            list_types: false,
            list_queries: false,
            help: false,
        }
    }
}

pub fn run() -> Result<(), BoxErr> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params, Path::new(STORE_DIR))
}

pub fn run_with(params: &Params, store_root: &Path) -> Result<(), BoxErr> {
    if params.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    if params.list_types {
        for (code, desc) in case_types::all() {
            println!("{code},{desc}");
        }
        return Ok(());
    }
    if params.list_queries {
        for e in store::list_queries(store_root)? {
            let when = e.logged_at_local()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!("{},{},{}", e.id, e.query.label(), when);
        }
        return Ok(());
    }

    let session_opts = &params.options.session;
    let log_root = session_opts.log_queries.then_some(store_root);
    let record = match params.source {
        Source::Replay(id) => session::replay(store_root, id)?,
        Source::File => {
            let mut src = FileSource::new(&session_opts.page_path);
            session::lookup(&mut src, &session_opts.query, log_root)?.record
        }
        Source::Wait => {
            let stdin = io::stdin();
            let mut src: ManualSession<_, _> = ManualSession::new(
                stdin.lock(),
                io::stderr(),
                session_opts.query.clone(),
                &session_opts.page_path,
            );
            logf!("CLI: waiting on {}", src.describe());
            session::lookup(&mut src, &session_opts.query, log_root)?.record
        }
    };

    let mut export = params.options.export.clone();
    export.set_stem_for_case(&record.query());
    if params.write_orders {
        let path = file::write_orders(&export, &record)?;
        eprintln!("Wrote {} orders to {}", file::order_rows(&record, export.scope).len(), path.display());
    }

    let text = summary::render_summary(&record, &summary::generated_now());
    if let Some(path) = &params.summary_path {
        let path = file::write_summary(path, &text)?;
        eprintln!("Wrote summary to {}", path.display());
    }
    print!("{text}");
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, BoxErr>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut query = CaseQuery::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--html" => {
                params.options.session.page_path = PathBuf::from(args.next().ok_or("Missing value for --html")?);
            }
            "--wait" => params.source = Source::Wait,
            "--replay" => {
                let id: u64 = args.next().ok_or("Missing query id")?.parse()?;
                params.source = Source::Replay(id);
            }
            "--type" => query.case_type = args.next().ok_or("Missing value for --type")?,
            "--number" => query.case_number = args.next().ok_or("Missing value for --number")?,
            "--year" => query.filing_year = args.next().ok_or("Missing value for --year")?,
            "--no-log" => params.options.session.log_queries = false,
            "-o" | "--out" => {
                params.options.export.set_path(&args.next().ok_or("Missing output path")?);
                params.write_orders = true;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.options.export.include_headers = true,
            "--scope" => {
                let v = args.next().ok_or("Missing value for --scope")?;
                params.options.export.scope = OrderScope::parse(&v)
                    .ok_or_else(|| format!("Unknown scope: {}", v))?;
            }
            "--summary" => params.summary_path = Some(PathBuf::from(args.next().ok_or("Missing summary path")?)),
            "--list-types" => params.list_types = true,
            "--list-queries" => params.list_queries = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !query.case_type.is_empty() && case_types::describe(&query.case_type).is_none() {
        logd!("CLI: case type {:?} is not in the catalogue", query.case_type);
    }
    params.options.session.query = query;
    Ok(params)
}
