// src/store.rs
//
// Query log: one raw snapshot per lookup, so a case can be re-extracted later
// without going back to the portal.
//
//   <root>/queries/index.csv   id,case_type,case_number,filing_year,unix_ts
//   <root>/queries/<id>.html   raw page
//
// The root is a parameter; front ends pass `STORE_DIR`.

use std::{
    fs::{ self, OpenOptions },
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};

use chrono::{ DateTime, Local, TimeZone, Utc };

use crate::config::consts::{ QUERIES_SUBDIR, QUERY_INDEX_FILE };
use crate::csv::{ parse_rows, write_row };
use crate::file::ensure_directory;
use crate::model::CaseQuery;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryLogEntry {
    pub id: u64,
    pub query: CaseQuery,
    /// Seconds since the Unix epoch.
    pub logged_at: i64,
}

impl QueryLogEntry {
    /// Local time, for lists.
    pub fn logged_at_local(&self) -> Option<DateTime<Local>> {
        Utc.timestamp_opt(self.logged_at, 0).single().map(|t| t.with_timezone(&Local))
    }
}

fn queries_dir(root: &Path) -> PathBuf {
    root.join(QUERIES_SUBDIR)
}

fn index_path(root: &Path) -> PathBuf {
    queries_dir(root).join(QUERY_INDEX_FILE)
}

fn snapshot_path(root: &Path, id: u64) -> PathBuf {
    queries_dir(root).join(format!("{id}.html"))
}

/// Highest id seen in the index or among snapshot files. A snapshot whose
/// index row was lost still holds its id.
fn last_used_id(root: &Path) -> Result<u64, Box<dyn std::error::Error>> {
    let indexed = list_queries(root)?.iter().map(|e| e.id).max().unwrap_or(0);
    let on_disk = fs::read_dir(queries_dir(root))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|e| e == "html"))
        .filter_map(|p| p.file_stem()?.to_str()?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    Ok(indexed.max(on_disk))
}

/// Store `html` for `query`; returns the new id (1, 2, …).
pub fn log_query(
    root: &Path,
    query: &CaseQuery,
    html: &str,
) -> Result<u64, Box<dyn std::error::Error>> {
    ensure_directory(&queries_dir(root))?;

    let id = last_used_id(root)? + 1;
    fs::write(snapshot_path(root, id), html)?;

    let index = index_path(root);
    let torn = fs::read(&index).is_ok_and(|b| b.last().is_some_and(|&c| c != b'\n'));
    let file = OpenOptions::new().create(true).append(true).open(&index)?;
    let mut out = BufWriter::new(file);
    if torn {
        writeln!(out)?;
    }
    write_row(
        &mut out,
        &[
            id.to_string(),
            query.case_type.clone(),
            query.case_number.clone(),
            query.filing_year.clone(),
            Utc::now().timestamp().to_string(),
        ],
        ',',
    )?;
    out.flush()?;

    logf!("Store: logged {} as #{id} ({} bytes)", query.label(), html.len());
    Ok(id)
}

/// Raw snapshot for `id`, or `None` when it was never logged.
pub fn load_query(root: &Path, id: u64) -> Option<String> {
    match fs::read_to_string(snapshot_path(root, id)) {
        Ok(html) => Some(html),
        Err(e) => {
            logd!("Store: no snapshot #{id}: {e}");
            None
        }
    }
}

/// Every indexed lookup in id order. A missing index is an empty log.
pub fn list_queries(root: &Path) -> Result<Vec<QueryLogEntry>, Box<dyn std::error::Error>> {
    let path = index_path(root);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path)?;

    let mut out = Vec::new();
    for row in parse_rows(&text, ',') {
        let [id, case_type, case_number, filing_year, ts] = row.as_slice() else {
            loge!("Store: malformed index row {row:?}");
            continue;
        };
        let (Ok(id), Ok(logged_at)) = (id.parse::<u64>(), ts.parse::<i64>()) else {
            loge!("Store: malformed index row {row:?}");
            continue;
        };
        out.push(QueryLogEntry {
            id,
            query: CaseQuery::new(case_type, case_number, filing_year),
            logged_at,
        });
    }
    out.sort_by_key(|e| e.id);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ecourts_store_{tag}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn empty_root_lists_nothing() {
        let root = temp_root("empty");
        assert!(list_queries(&root).unwrap().is_empty());
        assert_eq!(load_query(&root, 1), None);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let root = temp_root("malformed");
        fs::create_dir_all(queries_dir(&root)).unwrap();
        fs::write(index_path(&root), "x,CS,1,2020,0\n2,CS,1\n3,CR,9,2021,1700000000\n").unwrap();
        let list = list_queries(&root).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 3);
        assert!(list[0].logged_at_local().is_some());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn truncated_index_row_does_not_reuse_snapshot_id() {
        let root = temp_root("truncated");
        fs::create_dir_all(queries_dir(&root)).unwrap();
        fs::write(snapshot_path(&root, 5), "old").unwrap();
        fs::write(index_path(&root), "5,CS,1").unwrap();

        let id = log_query(&root, &CaseQuery::new("CR", "2", "2022"), "new").unwrap();
        assert_eq!(id, 6);
        assert_eq!(load_query(&root, 5).as_deref(), Some("old"));
        assert_eq!(load_query(&root, 6).as_deref(), Some("new"));
        let ids: Vec<u64> = list_queries(&root).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![6]);
        let _ = fs::remove_dir_all(&root);
    }
}
