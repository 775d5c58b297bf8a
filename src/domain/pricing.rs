//! Checkout pricing
//!
//! Pure computation over cart lines, in fixed-point decimal so the figure the
//! client displayed is exactly the figure that gets persisted. Orders above
//! the free-shipping threshold ship free; everything else pays a flat fee.
//! Tax is a flat 18% of the item total.

use rust_decimal::Decimal;

fn free_shipping_threshold() -> Decimal {
    Decimal::new(999, 0)
}

fn flat_shipping_fee() -> Decimal {
    Decimal::new(50, 0)
}

fn tax_rate() -> Decimal {
    Decimal::new(18, 2)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
}

/// Prices a set of `(quantity, unit price)` lines.
pub fn quote<I>(lines: I) -> PriceBreakdown
where
    I: IntoIterator<Item = (u32, Decimal)>,
{
    let items_price = lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, (qty, price)| acc + price * Decimal::from(qty));
    breakdown(items_price)
}

/// Derives shipping, tax and total from an item total.
///
/// Every figure is normalized to its canonical scale so `180.00` and `180`
/// cannot diverge between display, storage and comparison.
pub fn breakdown(items_price: Decimal) -> PriceBreakdown {
    let shipping_price = if items_price > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping_fee()
    };
    let tax_price = items_price * tax_rate();
    let total_price = items_price + shipping_price + tax_price;
    PriceBreakdown {
        items_price: items_price.normalize(),
        shipping_price: shipping_price.normalize(),
        tax_price: tax_price.normalize(),
        total_price: total_price.normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn test_two_at_500_ships_free() {
        let q = quote([(2, rupees(500))]);
        assert_eq!(q.items_price, rupees(1000));
        assert_eq!(q.shipping_price, rupees(0));
        assert_eq!(q.tax_price, rupees(180));
        assert_eq!(q.total_price, rupees(1180));
    }

    #[test]
    fn test_single_at_300_pays_flat_shipping() {
        let q = quote([(1, rupees(300))]);
        assert_eq!(q.items_price, rupees(300));
        assert_eq!(q.shipping_price, rupees(50));
        assert_eq!(q.tax_price, rupees(54));
        assert_eq!(q.total_price, rupees(404));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 999 exactly still pays shipping; 1000 ships free
        assert_eq!(breakdown(rupees(999)).shipping_price, rupees(50));
        assert_eq!(breakdown(rupees(1000)).shipping_price, rupees(0));
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        for items in [0i64, 1, 42, 999, 1000, 123_456] {
            let q = breakdown(rupees(items));
            assert_eq!(q.total_price, q.items_price + q.shipping_price + q.tax_price);
            assert_eq!(q.tax_price, q.items_price * Decimal::new(18, 2));
        }
    }

    #[test]
    fn test_breakdown_scale_is_canonical() {
        // 1000 × 0.18 must surface as "180", never "180.00"
        let json = serde_json::to_value(breakdown(rupees(1000))).unwrap();
        assert_eq!(json["taxPrice"], "180");
        assert_eq!(json["totalPrice"], "1180");
    }

    #[test]
    fn test_fractional_tax_is_exact() {
        // 18% of 333 is 59.94, not a float approximation
        let q = breakdown(rupees(333));
        assert_eq!(q.tax_price, Decimal::new(5994, 2));
        assert_eq!(q.total_price, Decimal::new(44294, 2));
    }
}
