// src/model.rs
//
// The normalized case record handed from extraction to every front end.

use url::form_urlencoded;

use crate::config::consts::VIEWER_ROUTE;

/// What the operator typed into the portal's case-status form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseQuery {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
}

impl CaseQuery {
    pub fn new(case_type: &str, case_number: &str, filing_year: &str) -> Self {
        Self {
            case_type: s!(case_type),
            case_number: s!(case_number),
            filing_year: s!(filing_year),
        }
    }

    /// "CS 123/2023" style label for lists and status lines.
    pub fn label(&self) -> String {
        format!("{} {}/{}", self.case_type, self.case_number, self.filing_year)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderKind {
    Interim,
    Final,
}

impl OrderKind {
    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Interim => "Interim",
            OrderKind::Final => "Final",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderEntry {
    pub order_number: String,
    pub order_date: String,
    /// Relative viewer URL: `/view_pdf?url=<percent-encoded absolute PDF URL>`.
    pub order_link: String,
}

impl OrderEntry {
    pub fn new(order_number: String, order_date: String, pdf_url: &str) -> Self {
        Self { order_number, order_date, order_link: viewer_link(pdf_url) }
    }

    /// The absolute PDF URL carried by `order_link`.
    pub fn pdf_url(&self) -> Option<String> {
        let (_, query) = self.order_link.split_once('?')?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "url")
            .map(|(_, v)| v.into_owned())
    }
}

pub fn viewer_link(pdf_url: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(pdf_url.as_bytes()).collect();
    format!("{VIEWER_ROUTE}?url={encoded}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
    pub filing_date: String,
    pub petitioner: String,
    pub respondent: String,
    /// Kept for shape compatibility with older exports; never populated.
    pub order_links: Vec<String>,
    pub acts: Vec<String>,
    pub history: Vec<String>,
    pub interim_orders: Vec<OrderEntry>,
    pub final_orders: Vec<OrderEntry>,
    pub ia_applications: Vec<String>,
    pub transfers: Vec<String>,
}

impl CaseRecord {
    pub fn query(&self) -> CaseQuery {
        CaseQuery::new(&self.case_type, &self.case_number, &self.filing_year)
    }

    pub fn orders(&self, kind: OrderKind) -> &[OrderEntry] {
        match kind {
            OrderKind::Interim => &self.interim_orders,
            OrderKind::Final => &self.final_orders,
        }
    }

    /// Interim orders first, then final, each in extraction order.
    pub fn all_orders(&self) -> impl Iterator<Item = (OrderKind, &OrderEntry)> {
        self.interim_orders.iter().map(|o| (OrderKind::Interim, o))
            .chain(self.final_orders.iter().map(|o| (OrderKind::Final, o)))
    }
}
