// src/gui/pages/orders.rs
use eframe::egui;

use crate::{
    config::options::PageKind::{ self, * },
    gui::components::order_table,
    model::{ CaseRecord, OrderKind },
};

use super::Page;

pub struct OrdersPage;
pub static PAGE: OrdersPage = OrdersPage;

impl Page for OrdersPage {
    fn kind(&self) -> PageKind { Orders }
    fn title(&self) -> &'static str { "Orders" }

    fn draw(&self, ui: &mut egui::Ui, record: &CaseRecord, status: &mut String) {
        for kind in [OrderKind::Interim, OrderKind::Final] {
            let orders = record.orders(kind);
            ui.heading(format!("{} Orders ({})", kind.label(), orders.len()));
            order_table::draw(ui, kind, orders, status);
            ui.add_space(12.0);
        }
    }
}
