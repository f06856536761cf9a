//! Pure cart derivation. Every screen re-derives from the latest fetched
//! snapshot; nothing here caches state or talks to the network.

use crate::model::CartEntry;
use shared::errors::CartError;

/// Joined product price times quantity. An entry with no snapshot prices
/// at 0; an out-of-stock entry keeps its last known subtotal so it can
/// still be displayed while checkout stays blocked.
pub fn line_subtotal(entry: &CartEntry) -> f64 {
    entry.unit_price() * f64::from(entry.quantity)
}

/// Sum of all line subtotals. An empty cart totals 0, not an error.
pub fn cart_total(entries: &[CartEntry]) -> f64 {
    entries.iter().map(line_subtotal).sum()
}

pub fn is_cart_empty(entries: &[CartEntry]) -> bool {
    entries.is_empty()
}

/// Bound-checks a relative quantity change and returns the new quantity.
/// A rejected change is a no-op for the caller: quantity stays as it was
/// and the control is disabled, no error dialog.
pub fn validate_quantity_change(entry: &CartEntry, delta: i64) -> Result<u32, CartError> {
    let product = entry.product.as_ref().ok_or(CartError::Unavailable)?;
    if product.stock_qty == 0 {
        return Err(CartError::Unavailable);
    }

    let requested = i64::from(entry.quantity) + delta;
    if requested < 1 || requested > i64::from(product.stock_qty) {
        return Err(CartError::InvalidQuantity {
            requested,
            stock: product.stock_qty,
        });
    }

    Ok(requested as u32)
}

pub fn unavailable_entries(entries: &[CartEntry]) -> Vec<&CartEntry> {
    entries.iter().filter(|e| !e.is_available()).collect()
}

/// Checkout must be blocked while the cart is empty or any entry is
/// unavailable; the cart never silently drops an entry nor silently sells
/// an out-of-stock one.
pub fn is_checkout_blocked(entries: &[CartEntry]) -> bool {
    is_cart_empty(entries) || entries.iter().any(|e| !e.is_available())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::model::Product;
    use uuid::Uuid;

    fn product(id: i64, price: f64, stock_qty: u32) -> Product {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "name": "P{id}", "price": {price}, "stockQty": {stock_qty}}}"#
        ))
        .unwrap()
    }

    fn entry(id: i64, quantity: u32, product: Option<Product>) -> CartEntry {
        CartEntry {
            id,
            customer_id: Uuid::nil(),
            product_id: product.as_ref().map(|p| p.id).unwrap_or(0),
            quantity,
            product,
            added_at: None,
        }
    }

    #[test]
    fn test_cart_total_is_sum_of_line_subtotals() {
        let entries = vec![
            entry(1, 2, Some(product(1, 1500.0, 10))),
            entry(2, 1, Some(product(2, 800.0, 5))),
        ];
        assert_eq!(line_subtotal(&entries[0]), 3000.0);
        assert_eq!(line_subtotal(&entries[1]), 800.0);
        assert_eq!(cart_total(&entries), 3800.0);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
        assert!(is_cart_empty(&[]));
        assert!(is_checkout_blocked(&[]));
    }

    #[test]
    fn test_quantity_change_stays_within_bounds() {
        let e = entry(1, 2, Some(product(1, 100.0, 5)));

        assert_eq!(validate_quantity_change(&e, 1).unwrap(), 3);
        assert_eq!(validate_quantity_change(&e, -1).unwrap(), 1);
        assert_eq!(validate_quantity_change(&e, 3).unwrap(), 5);

        assert_eq!(
            validate_quantity_change(&e, 4),
            Err(CartError::InvalidQuantity {
                requested: 6,
                stock: 5
            })
        );
        assert_eq!(
            validate_quantity_change(&e, -2),
            Err(CartError::InvalidQuantity {
                requested: 0,
                stock: 5
            })
        );
    }

    #[test]
    fn test_increment_rejected_at_stock_limit() {
        // Cart with one entry {P1, quantity 3}, P1 has price 1000 and stock 3.
        let entries = vec![entry(1, 3, Some(product(1, 1000.0, 3)))];

        assert_eq!(cart_total(&entries), 3000.0);
        assert_eq!(
            validate_quantity_change(&entries[0], 1),
            Err(CartError::InvalidQuantity {
                requested: 4,
                stock: 3
            })
        );
    }

    #[test]
    fn test_out_of_stock_entry_keeps_subtotal_but_blocks_checkout() {
        let stale = entry(1, 2, Some(product(1, 1500.0, 0)));
        let fresh = entry(2, 1, Some(product(2, 800.0, 5)));

        // Still displayed with its last known subtotal.
        assert_eq!(line_subtotal(&stale), 3000.0);

        // Quantity controls are disabled in both directions.
        assert_eq!(validate_quantity_change(&stale, 1), Err(CartError::Unavailable));
        assert_eq!(validate_quantity_change(&stale, -1), Err(CartError::Unavailable));

        let entries = vec![stale, fresh];
        assert_eq!(unavailable_entries(&entries).len(), 1);
        assert!(is_checkout_blocked(&entries));
    }

    #[test]
    fn test_missing_snapshot_blocks_checkout() {
        let orphan = entry(1, 2, None);

        assert_eq!(line_subtotal(&orphan), 0.0);
        assert_eq!(validate_quantity_change(&orphan, 1), Err(CartError::Unavailable));
        assert!(is_checkout_blocked(&[orphan]));
    }

    #[test]
    fn test_available_cart_is_not_blocked() {
        let entries = vec![
            entry(1, 1, Some(product(1, 100.0, 1))),
            entry(2, 2, Some(product(2, 50.0, 4))),
        ];
        assert!(!is_checkout_blocked(&entries));
        assert!(unavailable_entries(&entries).is_empty());
    }
}
