// src/config/consts.rs

// Portal
pub const PORTAL_URL: &str = "https://services.ecourts.gov.in/ecourtindia_v6/";
/// Relative PDF references on the case-detail page resolve against this.
pub const BASE_URL: &str = PORTAL_URL;
pub const VIEWER_ROUTE: &str = "/view_pdf";

// Extraction
pub const NA: &str = "N/A";
pub const PETITIONER_TABLE: &str = "Petitioner_Advocate_table";
pub const RESPONDENT_TABLE: &str = "Respondent_Advocate_table";
pub const FILING_DATE_LABEL: &str = "Filing Date";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const QUERIES_SUBDIR: &str = "queries";
pub const QUERY_INDEX_FILE: &str = "index.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "orders";
pub const SUMMARY_FILE: &str = "Case_Summary.txt";
pub const DEFAULT_PAGE_FILE: &str = "case_detail.html";
