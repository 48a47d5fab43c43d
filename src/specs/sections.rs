// src/specs/sections.rs
//
// Marker-anchored sections: a cell whose text contains a fixed marker tells us
// which table (or neighbouring cell) holds the data. Markers are case-sensitive.

use scraper::Html;

use crate::core::dom::{ self, body_rows, cells, enclosing_table, raw_text, text_of };
use crate::core::sanitize::clean_text;

pub const ACTS_MARKER: &str = "Act";
pub const IA_MARKER: &str = "Interlocutory";
pub const HISTORY_MARKER: &str = "Business on Date";
pub const TRANSFER_MARKER: &str = "Transfer Details";

pub const ROW_SEP: &str = " | ";
pub const HISTORY_SEP: &str = " → ";

/// Act names from the cell beside every "Act" label, split on commas and
/// newlines. First-seen order, no repeats.
pub fn extract_acts(doc: &Html) -> Vec<String> {
    let mut acts: Vec<String> = Vec::new();
    for label in dom::find_cells(doc, |t| t.contains(ACTS_MARKER)) {
        let Some(value) = dom::next_cell(label) else { continue };
        for part in raw_text(value).split([',', '\n']) {
            let act = clean_text(part);
            if !act.is_empty() && !acts.contains(&act) {
                acts.push(act);
            }
        }
    }
    acts
}

pub fn extract_ia_applications(doc: &Html) -> Vec<String> {
    marker_table_rows(doc, IA_MARKER, ROW_SEP)
}

pub fn extract_history(doc: &Html) -> Vec<String> {
    marker_table_rows(doc, HISTORY_MARKER, HISTORY_SEP)
}

pub fn extract_transfers(doc: &Html) -> Vec<String> {
    marker_table_rows(doc, TRANSFER_MARKER, ROW_SEP)
}

/// Rows (header skipped) of the table enclosing the first `marker` cell,
/// each row's cells cleaned and joined with `sep`. Rows with no `td` are skipped.
fn marker_table_rows(doc: &Html, marker: &str, sep: &str) -> Vec<String> {
    let Some(table) = dom::find_cell(doc, |t| t.contains(marker)).and_then(enclosing_table) else {
        logd!("Sections: no {marker:?} marker");
        return Vec::new();
    };
    body_rows(table)
        .into_iter()
        .filter_map(|row| {
            let cols: Vec<String> = cells(row).into_iter().map(text_of).collect();
            (!cols.is_empty()).then(|| cols.join(sep))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acts_are_split_and_deduplicated() {
        let doc = Html::parse_document(r#"
            <table>
              <tr><td>Act</td><td>Indian Penal Code, Arms Act
                  Indian Penal Code</td></tr>
              <tr><td>Acts</td><td>Arms Act,Motor Vehicles Act ,, </td></tr>
            </table>"#);
        assert_eq!(extract_acts(&doc), vec!["Indian Penal Code", "Arms Act", "Motor Vehicles Act"]);
    }

    #[test]
    fn acts_never_repeat() {
        let doc = Html::parse_document(r#"
            <table>
              <tr><td>Act</td><td>A, B, A
              B, C</td></tr>
              <tr><td>Act</td><td>C,A</td></tr>
            </table>"#);
        assert_eq!(extract_acts(&doc), vec!["A", "B", "C"]);
    }

    #[test]
    fn ia_rows_join_with_pipe() {
        let doc = Html::parse_document(r#"
            <table class="IAheading">
              <tr><td>Interlocutory Application No</td><td>Filing Date</td><td>Status</td></tr>
              <tr><td>IA/12/2023</td><td>01-02-2023</td><td>Pending:
                  hearing</td></tr>
              <tr><th>only header cells</th></tr>
            </table>"#);
        assert_eq!(extract_ia_applications(&doc), vec!["IA/12/2023 | 01-02-2023 | Pending hearing"]);
    }

    #[test]
    fn history_rows_join_with_arrow() {
        let doc = Html::parse_document(r#"
            <table class="history_table">
              <tr><td>Judge</td><td>Business on Date</td><td>Hearing Date</td><td>Purpose</td></tr>
              <tr><td>CJ-1</td><td>10-10-2023</td><td>11-11-2023</td><td>Evidence</td></tr>
            </table>"#);
        assert_eq!(extract_history(&doc), vec!["CJ-1 → 10-10-2023 → 11-11-2023 → Evidence"]);
    }

    #[test]
    fn transfers_and_missing_markers() {
        let doc = Html::parse_document(r#"
            <table>
              <tr><td colspan="4">Case Transfer Details within Establishment</td></tr>
              <tr><td>1</td><td>05-05-2022</td><td>Court 1</td><td>Court 4</td></tr>
            </table>"#);
        assert_eq!(extract_transfers(&doc), vec!["1 | 05-05-2022 | Court 1 | Court 4"]);
        assert!(extract_history(&doc).is_empty());
        assert!(extract_ia_applications(&doc).is_empty());
        assert!(extract_acts(&doc).is_empty());
    }

    #[test]
    fn markers_are_case_sensitive() {
        let doc = Html::parse_document(r#"
            <table><tr><td>transfer details</td></tr><tr><td>x</td></tr></table>"#);
        assert!(extract_transfers(&doc).is_empty());
    }
}
