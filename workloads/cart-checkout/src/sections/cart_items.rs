//! Line item list renderer.

use turbo_commerce::LineItem;

use super::html_escape;

/// Render every line item, in cart order.
pub fn render_cart_items(items: &[LineItem]) -> String {
    if items.is_empty() {
        return render_empty_cart();
    }
    items.iter().map(render_line_item).collect()
}

/// Render the empty cart message.
pub fn render_empty_cart() -> String {
    r#"<div class="empty-cart">
    <h3>Your cart is empty</h3>
    <p>Add some items to your cart to continue shopping.</p>
    <a href="store.html" class="btn btn-primary">Continue Shopping</a>
</div>"#
        .to_string()
}

fn render_line_item(item: &LineItem) -> String {
    let id = html_escape(item.id.as_str());
    let name = html_escape(&item.name);
    let initial = item
        .name
        .chars()
        .next()
        .map(|c| html_escape(&c.to_string()))
        .unwrap_or_default();

    let size = option_row("Size", &item.size);
    let color = option_row("Color", &item.color);

    format!(
        r#"<div class="cart-item" data-id="{id}">
    <div class="cart-item-image">{initial}</div>
    <div class="cart-item-details">
        <div class="cart-item-name">{name}</div>
        {size}{color}<div class="cart-item-price">{price}</div>
        <div class="quantity-controls">
            <button class="quantity-btn minus" data-action="set-quantity" data-id="{id}" data-quantity="{minus}">-</button>
            <span class="quantity">{quantity}</span>
            <button class="quantity-btn plus" data-action="set-quantity" data-id="{id}" data-quantity="{plus}">+</button>
        </div>
    </div>
    <button class="remove-btn" data-action="remove" data-id="{id}">Remove</button>
</div>
"#,
        id = id,
        initial = initial,
        name = name,
        size = size,
        color = color,
        price = item.price.display(),
        quantity = item.quantity,
        minus = i64::from(item.quantity) - 1,
        plus = i64::from(item.quantity) + 1,
    )
}

fn option_row(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="cart-item-option">{}: {}</div>
        "#,
            label,
            html_escape(value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::{Money, ProductId};

    fn item(size: &str, color: &str, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new("tee"),
            name: "Logo Tee".to_string(),
            price: Money::from_cents(2500),
            quantity,
            size: size.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_empty_items_render_empty_cart() {
        let html = render_cart_items(&[]);
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains(r#"href="store.html""#));
    }

    #[test]
    fn test_line_item_markup() {
        let html = render_cart_items(&[item("M", "", 2)]);

        assert!(html.contains(r#"<div class="cart-item-image">L</div>"#));
        assert!(html.contains("Size: M"));
        assert!(!html.contains("Color:"));
        assert!(html.contains("$25.00"));
        assert!(html.contains(r#"data-quantity="1">-</button>"#));
        assert!(html.contains(r#"data-quantity="3">+</button>"#));
        assert!(html.contains(r#"data-action="remove" data-id="tee""#));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_items_render_in_order() {
        let mut second = item("", "Red", 1);
        second.id = ProductId::new("cap");
        second.name = "Cap".to_string();

        let html = render_cart_items(&[item("M", "", 1), second]);
        let tee = html.find(r#"data-id="tee""#).unwrap();
        let cap = html.find(r#"data-id="cap""#).unwrap();
        assert!(tee < cap);
        assert!(html.contains("Color: Red"));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut evil = item("", "", 1);
        evil.name = r#"<script>alert("x")</script>"#.to_string();

        let html = render_cart_items(&[evil]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
