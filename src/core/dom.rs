// src/core/dom.rs
//
// Small vocabulary over a parsed page: find a cell by predicate, step to its
// neighbour or enclosing table, and read table rows below the header.
// Everything borrows from one immutable `Html` snapshot.

use std::sync::LazyLock;

use scraper::{ ElementRef, Html, Selector };

use super::sanitize::clean_text;

pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static A: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static NESTED: LazyLock<Selector> = LazyLock::new(|| selector("td, table"));

/// Raw concatenated text of an element (no normalization).
pub fn raw_text(el: ElementRef) -> String {
    el.text().collect()
}

/// Normalized text of an element.
pub fn text_of(el: ElementRef) -> String {
    clean_text(&raw_text(el))
}

/// Text a cell offers as a label: only leaf cells qualify, so layout cells
/// that wrap whole tables never match a marker.
pub fn label_text(cell: ElementRef) -> Option<String> {
    if cell.select(&NESTED).next().is_some() {
        return None;
    }
    Some(raw_text(cell))
}

/// First `td` in document order whose label text satisfies `pred`.
pub fn find_cell<'a, P>(doc: &'a Html, pred: P) -> Option<ElementRef<'a>>
where
    P: Fn(&str) -> bool,
{
    find_cells(doc, pred).into_iter().next()
}

/// Every `td` in document order whose label text satisfies `pred`.
pub fn find_cells<'a, P>(doc: &'a Html, pred: P) -> Vec<ElementRef<'a>>
where
    P: Fn(&str) -> bool,
{
    doc.select(&TD)
        .filter(|cell| label_text(*cell).is_some_and(|t| pred(&t)))
        .collect()
}

/// The next `td` sibling in the same row, skipping text nodes.
pub fn next_cell(cell: ElementRef) -> Option<ElementRef> {
    cell.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
}

/// Nearest ancestor `<table>`.
pub fn enclosing_table(el: ElementRef) -> Option<ElementRef> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}

/// First element matching `sel`, in document order.
pub fn first_match<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// All `tr` below the table's first row (the header), nested rows included.
pub fn body_rows(table: ElementRef) -> Vec<ElementRef> {
    table.select(&TR).skip(1).collect()
}

/// The row's `td` cells (header `th` cells are not counted).
pub fn cells(row: ElementRef) -> Vec<ElementRef> {
    row.select(&TD).collect()
}

/// First anchor inside `el`.
pub fn first_anchor(el: ElementRef) -> Option<ElementRef> {
    el.select(&A).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <table id="outer"><tr><td>
            <table id="inner">
              <tr><td>Filing Date</td><td> 12-01-2024 </td></tr>
              <tr><td><b>Next Date</b></td> <td>20-02-2024</td></tr>
              <tr><td>Lonely</td></tr>
            </table>
          </td></tr></table>
        </body></html>
    "#;

    #[test]
    fn find_cell_skips_wrapper_cells() {
        let doc = Html::parse_document(DOC);
        let hit = find_cell(&doc, |t| t.contains("Filing")).expect("label cell");
        assert_eq!(text_of(hit), "Filing Date");
        let table = enclosing_table(hit).expect("table");
        assert_eq!(table.value().id(), Some("inner"));
    }

    #[test]
    fn next_cell_skips_whitespace_nodes() {
        let doc = Html::parse_document(DOC);
        let hit = find_cell(&doc, |t| t.contains("Next Date")).expect("label cell");
        assert_eq!(next_cell(hit).map(text_of).as_deref(), Some("20-02-2024"));

        let lonely = find_cell(&doc, |t| t == "Lonely").expect("lonely");
        assert!(next_cell(lonely).is_none());
    }

    #[test]
    fn body_rows_skip_header() {
        let doc = Html::parse_document(DOC);
        let inner = first_match(&doc, &selector("#inner")).expect("inner");
        let rows = body_rows(inner);
        assert_eq!(rows.len(), 2);
        assert_eq!(cells(rows[0]).len(), 2);
        assert_eq!(cells(rows[1]).len(), 1);
    }
}
