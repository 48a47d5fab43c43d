// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see the action functions.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::{ copy_orders, copy_summary };
pub use export::{ export_orders, export_summary };
pub use load::{ load, replay };

use crate::{ gui::app::App, model::CaseRecord };

#[inline]
pub(super) fn current_record(app: &App) -> Option<&CaseRecord> {
    app.record.as_ref()
}
