// src/specs/mod.rs
//! # Case-detail page specs
//!
//! Where the ground truth lives in the portal's case-detail HTML and how to
//! read it without falling over.
//!
//! ## What lives here
//! - **Pure extraction** from one parsed snapshot (`scraper::Html`). No I/O,
//!   no `Result`: a page that is not a case-detail page yields "N/A" fields and
//!   empty lists.
//! - **Selector choice**: class-anchored tables for parties and orders,
//!   marker-anchored tables for acts, IA applications, history and transfers.
//! - **The case-type catalogue** offered by the portal's search form.
//!
//! ## What does **not** live here
//! - Getting the page (`session`), keeping snapshots (`store`), exports
//!   (`file`, `summary`) and anything GUI.
//!
//! ## Typical call chain
//! ```text
//! PageSource::page_html → specs::case_detail::parse_doc → CaseRecord
//!                                    ↘ fields / orders / sections
//! ```
//!
//! ## Conventions
//! - Cell text always goes through `core::clean_text`.
//! - Labels match only leaf cells (no nested `td`/`table`), so layout wrappers
//!   never shadow the real label.
//! - The four order layouts are additive and not de-duplicated.
//! - Tests use small inline snippets; the full fixture lives in `tests/`.
pub mod case_detail;
pub mod case_types;
pub mod fields;
pub mod orders;
pub mod sections;
