// src/session.rs
//
// Where case-detail HTML comes from. The portal sits behind a captcha, so a
// person always drives the browser; this side only reads what they saved.

use std::{
    fs,
    io::{ BufRead, Write },
    path::{ Path, PathBuf },
};

use crate::config::consts::PORTAL_URL;
use crate::model::{ CaseQuery, CaseRecord };
use crate::specs::case_detail::parse_doc;
use crate::store;

type BoxErr = Box<dyn std::error::Error>;

/// Yields the fully rendered case-detail page.
pub trait PageSource {
    fn page_html(&mut self) -> Result<String, BoxErr>;

    /// Short description for logs and status lines.
    fn describe(&self) -> String;
}

/// A page the operator saved from the browser.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for FileSource {
    fn page_html(&mut self) -> Result<String, BoxErr> {
        let html = fs::read_to_string(&self.path)
            .map_err(|e| format!("Cannot read {}: {e}", self.path.display()))?;
        non_empty(html, &self.describe())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Prints the portal URL and what to do there, blocks until the operator
/// presses Enter, then reads the saved page. There is no timeout.
pub struct ManualSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    query: CaseQuery,
    saved: FileSource,
}

impl<R: BufRead, W: Write> ManualSession<R, W> {
    pub fn new(input: R, output: W, query: CaseQuery, saved_page: impl Into<PathBuf>) -> Self {
        Self { input, output, query, saved: FileSource::new(saved_page) }
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "Open {PORTAL_URL} in your browser.")?;
        writeln!(out, "Select state, district and court complex, then search")?;
        writeln!(
            out,
            "case type {}, number {}, year {}; solve the captcha and click View.",
            self.query.case_type, self.query.case_number, self.query.filing_year
        )?;
        writeln!(out, "Save the case-detail page as {}", self.saved.path().display())?;
        writeln!(out, "Press ENTER once the full case detail page has been saved...")?;
        out.flush()
    }
}

impl<R: BufRead, W: Write> PageSource for ManualSession<R, W> {
    fn page_html(&mut self) -> Result<String, BoxErr> {
        self.prompt()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err("Input closed before the page was confirmed".into());
        }
        logf!("Session: operator confirmed page for {}", self.query.label());
        self.saved.page_html()
    }

    fn describe(&self) -> String {
        format!("manual session → {}", self.saved.describe())
    }
}

/// A snapshot replayed from the query log.
pub struct StoredSource {
    root: PathBuf,
    id: u64,
}

impl StoredSource {
    pub fn new(root: impl Into<PathBuf>, id: u64) -> Self {
        Self { root: root.into(), id }
    }
}

impl PageSource for StoredSource {
    fn page_html(&mut self) -> Result<String, BoxErr> {
        let html = store::load_query(&self.root, self.id)
            .ok_or_else(|| format!("No logged query #{}", self.id))?;
        non_empty(html, &self.describe())
    }

    fn describe(&self) -> String {
        format!("logged query #{}", self.id)
    }
}

fn non_empty(html: String, what: &str) -> Result<String, BoxErr> {
    if html.trim().is_empty() {
        return Err(format!("Empty page from {what}").into());
    }
    Ok(html)
}

/// Outcome of one lookup.
pub struct Lookup {
    pub record: CaseRecord,
    /// Query-log id when the snapshot was logged.
    pub logged_id: Option<u64>,
}

/// Get the page, optionally log it under `log_root`, extract.
/// Logging failures are reported in the debug log and do not fail the lookup.
pub fn lookup(
    source: &mut dyn PageSource,
    query: &CaseQuery,
    log_root: Option<&Path>,
) -> Result<Lookup, BoxErr> {
    let html = source.page_html()?;
    logf!("Session: {} bytes from {}", html.len(), source.describe());

    let logged_id = match log_root {
        Some(root) => match store::log_query(root, query, &html) {
            Ok(id) => Some(id),
            Err(e) => {
                loge!("Session: could not log query: {e}");
                None
            }
        },
        None => None,
    };

    Ok(Lookup { record: parse_doc(&html, query), logged_id })
}

/// Re-extract a logged snapshot with the query it was logged under.
pub fn replay(root: &Path, id: u64) -> Result<CaseRecord, BoxErr> {
    let entry = store::list_queries(root)?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| format!("No logged query #{id}"))?;
    let html = StoredSource::new(root, id).page_html()?;
    Ok(parse_doc(&html, &entry.query))
}
