// src/gui/components/mod.rs
pub mod export_bar;
pub mod order_table;
pub mod query_panel;
pub mod tabs;
