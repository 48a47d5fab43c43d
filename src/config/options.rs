// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use crate::model::{ CaseQuery, OrderKind };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub session: SessionOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Overview,
    Orders,
    History,
    Sections,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub query: CaseQuery,
    /// Saved case-detail page the operator exported from the browser.
    pub page_path: PathBuf,
    /// Keep a snapshot of every lookup in the query log.
    pub log_queries: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            query: CaseQuery::default(),
            page_path: PathBuf::from(DEFAULT_PAGE_FILE),
            log_queries: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Which order lists an export covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderScope {
    Interim,
    Final,
    All,
}

impl OrderScope {
    pub fn includes(&self, kind: OrderKind) -> bool {
        match self {
            OrderScope::All => true,
            OrderScope::Interim => kind == OrderKind::Interim,
            OrderScope::Final => kind == OrderKind::Final,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "interim" => Some(OrderScope::Interim),
            "final" => Some(OrderScope::Final),
            "all" | "both" => Some(OrderScope::All),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub scope: OrderScope,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            scope: OrderScope::All,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let ext = self.out_path.ext.as_deref().unwrap_or(self.format.ext());
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        name.push(ext);
        self.out_path.dir.join(name)
    }

    /// Printable summary goes next to the orders export.
    pub fn summary_path(&self) -> PathBuf {
        self.out_path.dir.join(SUMMARY_FILE)
    }

    /// Parse GUI/CLI text into dir + stem (+ optional explicit extension).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if crate::file::looks_like_dir_hint(p) {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
            self.out_path.user_named = true;
        }
        self.out_path.ext = p.extension().map(|e| e.to_string_lossy().into_owned());
    }

    /// Follow the loaded case unless the operator picked a name.
    pub fn set_stem_for_case(&mut self, query: &CaseQuery) {
        if !self.out_path.user_named {
            self.out_path.file_stem = OsString::from(crate::file::case_file_stem(query));
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
    /// Stem came from the operator, not from the loaded case.
    user_named: bool,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
            user_named: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_format_by_default() {
        let mut opts = ExportOptions::default();
        assert!(opts.out_path().to_string_lossy().ends_with("orders.csv"));
        opts.format = ExportFormat::Tsv;
        assert!(opts.out_path().to_string_lossy().ends_with("orders.tsv"));
    }

    #[test]
    fn scope_parse_and_includes() {
        assert_eq!(OrderScope::parse("FINAL"), Some(OrderScope::Final));
        assert_eq!(OrderScope::parse("both"), Some(OrderScope::All));
        assert_eq!(OrderScope::parse("x"), None);
        assert!(OrderScope::Interim.includes(OrderKind::Interim));
        assert!(!OrderScope::Interim.includes(OrderKind::Final));
        assert!(OrderScope::All.includes(OrderKind::Final));
    }

    #[test]
    fn stem_follows_case_until_user_names_it() {
        let mut opts = ExportOptions::default();
        opts.set_stem_for_case(&CaseQuery::new("CS", "12", "2023"));
        assert!(opts.out_path().to_string_lossy().ends_with("CS_12_2023.csv"));
        opts.set_stem_for_case(&CaseQuery::new("CR", "7", "2021"));
        assert!(opts.out_path().to_string_lossy().ends_with("CR_7_2021.csv"));

        opts.set_path("out/mine.csv");
        opts.set_stem_for_case(&CaseQuery::new("CS", "1", "2020"));
        assert!(opts.out_path().to_string_lossy().ends_with("mine.csv"));
    }
}
