//! Page section renderers.

mod cart_items;
mod order_summary;

pub use cart_items::{render_cart_items, render_empty_cart};
pub use order_summary::render_order_summary;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
