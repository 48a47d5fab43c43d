// src/specs/orders.rs
//
// Orders appear in up to four table layouts depending on court and case type.
// Each layout has its own reader; all four run over the same page and their
// results are appended in order A, B, C, D. The same order can surface twice
// when a page carries more than one layout. Nothing is de-duplicated here.
//
// Rows without a resolvable PDF link are dropped by every reader.

use std::sync::LazyLock;

use scraper::{ ElementRef, Html, Selector };
use url::Url;

use crate::core::dom::{ self, body_rows, cells, first_anchor, first_match, text_of };
use crate::core::link::resolve_pdf_link;
use crate::model::{ OrderEntry, OrderKind };

static MAIN_TABLE: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.table.table-bordered"));
static ORDER_TABLES: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.order_table"));
static BORDERLESS: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.table_borderless"));
static HISTORY: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.history_table"));

pub type Found = Vec<(OrderKind, OrderEntry)>;

/// All four layouts, in their fixed order.
pub fn extract_orders(doc: &Html, base: &Url) -> Found {
    let mut out = Found::new();
    for (name, found) in [
        ("main", main_table(doc, base)),
        ("paired", paired_tables(doc, base)),
        ("borderless", borderless_table(doc, base)),
        ("history", history_judgments(doc, base)),
    ] {
        logd!("Orders: {name} table → {} entries", found.len());
        out.extend(found);
    }
    out
}

/// A: `date | <a>…</a>` rows. Final when the link text says "final" or "judgment".
/// Numbered by row position (1-based, header excluded).
pub fn main_table(doc: &Html, base: &Url) -> Found {
    let Some(table) = first_match(doc, &MAIN_TABLE) else { return Found::new() };

    let mut out = Found::new();
    for (i, row) in body_rows(table).into_iter().enumerate() {
        let cols = cells(row);
        if cols.len() < 2 { continue; }
        let Some((anchor, pdf)) = linked(cols[1], base) else { continue };

        let caption = text_of(anchor).to_lowercase();
        let kind = if caption.contains("final") || caption.contains("judgment") {
            OrderKind::Final
        } else {
            OrderKind::Interim
        };
        out.push((kind, OrderEntry::new((i + 1).to_string(), text_of(cols[0]), &pdf)));
    }
    out
}

/// B: `no | date | <a>` rows in `order_table` tables. The first such table holds
/// interim orders, the second final; any further ones are not read.
pub fn paired_tables(doc: &Html, base: &Url) -> Found {
    let mut out = Found::new();
    for (table, kind) in doc.select(&ORDER_TABLES).zip([OrderKind::Interim, OrderKind::Final]) {
        out.extend(numbered_rows(table, base).into_iter().map(|e| (kind, e)));
    }
    out
}

/// C: date and link share the second cell; always final, numbered by position.
pub fn borderless_table(doc: &Html, base: &Url) -> Found {
    let Some(table) = first_match(doc, &BORDERLESS) else { return Found::new() };

    let mut out = Found::new();
    for (i, row) in body_rows(table).into_iter().enumerate() {
        let cols = cells(row);
        if cols.len() < 2 { continue; }
        let Some((_, pdf)) = linked(cols[1], base) else { continue };
        out.push((OrderKind::Final, OrderEntry::new((i + 1).to_string(), text_of(cols[1]), &pdf)));
    }
    out
}

/// D: judgment links in the case history table; always final.
pub fn history_judgments(doc: &Html, base: &Url) -> Found {
    let Some(table) = first_match(doc, &HISTORY) else { return Found::new() };
    numbered_rows(table, base)
        .into_iter()
        .map(|e| (OrderKind::Final, e))
        .collect()
}

/// `no | date | <a>` rows with at least three cells and an anchor in the third.
fn numbered_rows(table: ElementRef, base: &Url) -> Vec<OrderEntry> {
    let mut out = Vec::new();
    for row in body_rows(table) {
        let cols = cells(row);
        if cols.len() < 3 { continue; }
        let Some((_, pdf)) = linked(cols[2], base) else { continue };
        out.push(OrderEntry::new(text_of(cols[0]), text_of(cols[1]), &pdf));
    }
    out
}

/// First anchor in `cell` together with its resolved PDF URL.
fn linked<'a>(cell: ElementRef<'a>, base: &Url) -> Option<(ElementRef<'a>, String)> {
    let anchor = first_anchor(cell)?;
    match resolve_pdf_link(anchor, base) {
        Some(pdf) => Some((anchor, pdf)),
        None => {
            logd!("Orders: skipped row, no PDF reference in {:?}", text_of(cell));
            None
        }
    }
}
