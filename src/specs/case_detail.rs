// src/specs/case_detail.rs
//
// One case-detail page snapshot → one CaseRecord.
// Never fails: a page that is not a case-detail page (captcha error, session
// timeout, half-loaded) yields "N/A" fields and empty lists.

use scraper::Html;
use url::Url;

use crate::config::consts::FILING_DATE_LABEL;
use crate::core::clean_text;
use crate::core::link::base_url;
use crate::model::{ CaseQuery, CaseRecord, OrderKind };

use super::{ fields, orders, sections };

/// Parse `html` and extract against the portal base URL.
pub fn parse_doc(html: &str, query: &CaseQuery) -> CaseRecord {
    let t = std::time::Instant::now();
    let doc = Html::parse_document(html);
    let record = extract(&doc, query, base_url());
    logd!(
        "CaseDetail: {} parsed in {:?} (interim={}, final={}, acts={}, history={})",
        query.label(),
        t.elapsed(),
        record.interim_orders.len(),
        record.final_orders.len(),
        record.acts.len(),
        record.history.len()
    );
    record
}

pub fn extract(doc: &Html, query: &CaseQuery, base: &Url) -> CaseRecord {
    let parties = fields::extract_parties(doc);

    let mut interim_orders = Vec::new();
    let mut final_orders = Vec::new();
    for (kind, entry) in orders::extract_orders(doc, base) {
        match kind {
            OrderKind::Interim => interim_orders.push(entry),
            OrderKind::Final => final_orders.push(entry),
        }
    }

    CaseRecord {
        case_type: or_na!(clean_text(&query.case_type)),
        case_number: or_na!(clean_text(&query.case_number)),
        filing_year: or_na!(clean_text(&query.filing_year)),
        filing_date: fields::read_labeled(doc, FILING_DATE_LABEL),
        petitioner: parties.petitioner,
        respondent: parties.respondent,
        order_links: Vec::new(),
        acts: sections::extract_acts(doc),
        history: sections::extract_history(doc),
        interim_orders,
        final_orders,
        ia_applications: sections::extract_ia_applications(doc),
        transfers: sections::extract_transfers(doc),
    }
}
