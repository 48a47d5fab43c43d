// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use crate::config::consts::DEFAULT_FILE;
use crate::config::options::{ ExportOptions, OrderScope };
use crate::core::sanitize::sanitize_filename;
use crate::csv::to_export_string;
use crate::model::{ CaseQuery, CaseRecord };

pub const ORDER_HEADERS: [&str; 4] = ["Kind", "No.", "Date", "Link"];

pub fn order_headers() -> Vec<String> {
    ORDER_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// One row per order in scope: interim first, then final.
pub fn order_rows(record: &CaseRecord, scope: OrderScope) -> Vec<Vec<String>> {
    record
        .all_orders()
        .filter(|(kind, _)| scope.includes(*kind))
        .map(|(kind, o)| vec![
            s!(kind.label()),
            o.order_number.clone(),
            o.order_date.clone(),
            o.order_link.clone(),
        ])
        .collect()
}

/// Orders table rendered per the export options (Copy uses this directly).
pub fn orders_export_string(export: &ExportOptions, record: &CaseRecord) -> String {
    to_export_string(
        &order_headers(),
        &order_rows(record, export.scope),
        export.include_headers,
        export.format.delim(),
    )
}

/// Write the orders table to `export.out_path()`. Returns the path written.
pub fn write_orders(
    export: &ExportOptions,
    record: &CaseRecord,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_text(&path, &orders_export_string(export, record))?;
    logf!("Export: {} orders → {}", order_rows(record, export.scope).len(), path.display());
    Ok(path)
}

/// Write a rendered summary. Returns the path written.
pub fn write_summary(path: &Path, text: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    write_text(path, text)?;
    logf!("Export: summary → {}", path.display());
    Ok(path.to_path_buf())
}

/// Create the parent directory if needed, then write (truncating).
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// `CS 12/2023` → `CS_12_2023`; the default stem when the query is blank.
pub fn case_file_stem(query: &CaseQuery) -> String {
    let raw = format!("{}_{}_{}", query.case_type, query.case_number, query.filing_year);
    sanitize_filename(&raw, DEFAULT_FILE)
}
