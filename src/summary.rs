// src/summary.rs
//
// Plain-text printable summary of a CaseRecord.

use std::fmt::Write;

use chrono::Local;

use crate::model::{ CaseRecord, OrderEntry };

pub const GENERATED_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Local wall-clock time in the summary's "Generated on" format.
pub fn generated_now() -> String {
    Local::now().format(GENERATED_FORMAT).to_string()
}

pub fn render_summary(record: &CaseRecord, generated_on: &str) -> String {
    let mut out = String::new();
    let title = format!(
        "Case Summary: {} {}/{}",
        record.case_type, record.case_number, record.filing_year
    );
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(out, "Generated on: {generated_on}");
    let _ = writeln!(out);

    for (label, value) in [
        ("Case Type", &record.case_type),
        ("Case Number", &record.case_number),
        ("Filing Year", &record.filing_year),
        ("Filing Date", &record.filing_date),
        ("Petitioner", &record.petitioner),
        ("Respondent", &record.respondent),
    ] {
        let _ = writeln!(out, "{label:<12} {value}");
    }

    list_section(&mut out, "Acts", &record.acts);
    order_section(&mut out, "Interim Orders", &record.interim_orders);
    order_section(&mut out, "Final Orders", &record.final_orders);
    list_section(&mut out, "Interlocutory Applications", &record.ia_applications);
    list_section(&mut out, "Case History", &record.history);
    list_section(&mut out, "Transfers", &record.transfers);
    out
}

fn heading(out: &mut String, title: &str, n: usize) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title} ({n})");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count() + 4 + n.to_string().len()));
}

fn list_section(out: &mut String, title: &str, items: &[String]) {
    heading(out, title, items.len());
    if items.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

fn order_section(out: &mut String, title: &str, orders: &[OrderEntry]) {
    heading(out, title, orders.len());
    if orders.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for o in orders {
        let link = o.pdf_url().unwrap_or_else(|| o.order_link.clone());
        let _ = writeln!(out, "  {}. {}  {}", o.order_number, o.order_date, link);
    }
}
