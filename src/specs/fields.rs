// src/specs/fields.rs
//
// Label-keyed values ("Filing Date" → the cell to its right) and the two
// advocate tables that carry the parties.

use std::sync::LazyLock;

use scraper::{ Html, Selector };

use crate::config::consts::{ NA, PETITIONER_TABLE, RESPONDENT_TABLE };
use crate::core::dom::{ self, first_match, text_of };

static PETITIONER: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(&format!("table.{PETITIONER_TABLE}")));
static RESPONDENT: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(&format!("table.{RESPONDENT_TABLE}")));

/// Text of the cell right after the first cell containing `label`
/// (case-insensitive), or "N/A".
pub fn read_labeled(doc: &Html, label: &str) -> String {
    let needle = label.to_lowercase();
    dom::find_cell(doc, |t| t.to_lowercase().contains(&needle))
        .and_then(dom::next_cell)
        .map(text_of)
        .unwrap_or_else(|| s!(NA))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parties {
    pub petitioner: String,
    pub respondent: String,
}

pub fn extract_parties(doc: &Html) -> Parties {
    Parties {
        petitioner: join_table_cells(doc, &PETITIONER),
        respondent: join_table_cells(doc, &RESPONDENT),
    }
}

/// Every non-empty cell of the first matching table, `"; "`-joined; "N/A" if none.
fn join_table_cells(doc: &Html, sel: &Selector) -> String {
    let Some(table) = first_match(doc, sel) else {
        return s!(NA);
    };
    let names: Vec<String> = dom::cells(table)
        .into_iter()
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect();
    if names.is_empty() { s!(NA) } else { names.join("; ") }
}
