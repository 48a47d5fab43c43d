// tests/case_detail_e2e.rs
//
// Full extraction over a saved case-detail page.

use ecourts_scrape::config::consts::BASE_URL;
use ecourts_scrape::model::{ CaseQuery, CaseRecord };
use ecourts_scrape::specs::case_detail::parse_doc;

const PAGE: &str = include_str!("fixtures/case_detail.html");

fn record() -> CaseRecord {
    parse_doc(PAGE, &CaseQuery::new("CS", "12", "2023"))
}

#[test]
fn identifying_fields_and_parties() {
    let rec = record();
    assert_eq!(rec.case_type, "CS");
    assert_eq!(rec.case_number, "12");
    assert_eq!(rec.filing_year, "2023");
    assert_eq!(rec.filing_date, "14-03-2023");
    assert_eq!(rec.petitioner, "1) Ramesh Kumar Advocate- S. K. Gupta; 2) Suresh Kumar");
    assert_eq!(rec.respondent, "1) Haryana Urban Development Authority");
    assert!(rec.order_links.is_empty());
}

#[test]
fn acts_are_distinct_in_first_seen_order() {
    assert_eq!(
        record().acts,
        vec!["Code of Civil Procedure", "Specific Relief Act", "Transfer of Property Act"]
    );
}

#[test]
fn orders_from_every_layout() {
    let rec = record();

    let interim: Vec<(&str, &str)> = rec.interim_orders.iter()
        .map(|o| (o.order_number.as_str(), o.order_date.as_str()))
        .collect();
    assert_eq!(interim, vec![("1", "20-04-2023"), ("1", "20-04-2023")]);
    assert_eq!(
        rec.interim_orders[1].pdf_url().as_deref(),
        Some(format!("{BASE_URL}orders/2023/io_1.pdf").as_str())
    );

    let fin: Vec<(&str, &str)> = rec.final_orders.iter()
        .map(|o| (o.order_number.as_str(), o.order_date.as_str()))
        .collect();
    assert_eq!(
        fin,
        vec![("2", "18-10-2023"), ("1", "18-10-2023"), ("Civil Judge Jr Div", "11-07-2023")]
    );
    assert_eq!(
        rec.final_orders[2].pdf_url().as_deref(),
        Some("https://services.ecourts.gov.in/orders/2023/judg_77.pdf")
    );

    for o in rec.interim_orders.iter().chain(&rec.final_orders) {
        assert!(o.order_link.starts_with("/view_pdf?url=https%3A%2F%2F"), "{}", o.order_link);
    }
}

#[test]
fn sections() {
    let rec = record();
    assert_eq!(
        rec.ia_applications,
        vec![
            "IA/145/2023 | 15-03-2023 | 20-04-2024 | Pending",
            "IA/301/2023 | 02-06-2023 |  | Disposed allowed",
        ]
    );
    assert_eq!(
        rec.history,
        vec![
            "Civil Judge Jr Div → 20-04-2023 → 11-07-2023 → Appearance",
            "Civil Judge Jr Div → 11-07-2023 → 18-10-2023 → Evidence",
        ]
    );
    assert_eq!(
        rec.transfers,
        vec![
            "Registration Number | Transfer Date | From Court | To Court",
            "12/2023 | 01-06-2023 | Civil Judge 1 | Civil Judge 4",
        ]
    );
}

#[test]
fn every_text_field_is_single_line() {
    let rec = record();
    let mut texts: Vec<&String> = vec![
        &rec.case_type, &rec.case_number, &rec.filing_year,
        &rec.filing_date, &rec.petitioner, &rec.respondent,
    ];
    texts.extend(&rec.acts);
    texts.extend(&rec.history);
    texts.extend(&rec.ia_applications);
    texts.extend(&rec.transfers);
    for o in rec.interim_orders.iter().chain(&rec.final_orders) {
        texts.push(&o.order_number);
        texts.push(&o.order_date);
    }
    for t in texts {
        assert!(!t.contains(['\n', '\r', ':']), "{t:?}");
        assert_eq!(t.trim(), t.as_str());
    }
}

#[test]
fn not_a_case_page() {
    let rec = parse_doc("<html><body><p>Session expired</p></body></html>", &CaseQuery::default());
    assert!(rec.interim_orders.is_empty() && rec.final_orders.is_empty());
    assert_eq!(rec.filing_date, "N/A");
    assert_eq!(rec.petitioner, "N/A");
    assert_eq!(rec.case_type, "N/A");
}
