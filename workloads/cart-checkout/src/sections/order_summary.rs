//! Order summary renderer.

use turbo_commerce::OrderTotals;

/// Render subtotal, shipping, tax, total and the place-order control.
pub fn render_order_summary(totals: &OrderTotals) -> String {
    format!(
        r#"<div class="summary-item">
    <span>Subtotal:</span>
    <span>{subtotal}</span>
</div>
<div class="summary-item">
    <span>Shipping:</span>
    <span>{shipping}</span>
</div>
<div class="summary-item">
    <span>Tax:</span>
    <span>{tax}</span>
</div>
<div class="summary-total">
    <span>Total:</span>
    <span>{total}</span>
</div>
<button class="btn btn-primary btn-block" data-action="place-order">
    Place Order
</button>"#,
        subtotal = totals.subtotal.display(),
        shipping = totals.shipping.display(),
        tax = totals.tax.display(),
        total = totals.grand_total.display(),
    )
}
