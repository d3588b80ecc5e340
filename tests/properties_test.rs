use proptest::prelude::*;
use rust_decimal::Decimal;
use stockroom::error::StoreError;
use stockroom::model::{Product, ProductId};
use stockroom::{discount, occ, stock};

fn product(version: i64, quantity: i64) -> Product {
    let mut product = Product::new(
        ProductId(1),
        "Widget",
        Decimal::new(10_000, 2),
        Decimal::new(4_000, 2),
        quantity,
    );
    product.version = version;
    product
}

proptest! {
    #[test]
    fn increase_adds_exactly_and_bumps_once(
        version in 1i64..1_000,
        quantity in 0i64..1_000_000,
        amount in 1i64..1_000_000,
    ) {
        let current = product(version, quantity);
        let next = occ::apply(current, version, |p| stock::increase(p, amount)).unwrap();
        prop_assert_eq!(next.stock_quantity, quantity + amount);
        prop_assert_eq!(next.version, version + 1);
    }

    #[test]
    fn overdraw_is_rejected(
        version in 1i64..1_000,
        quantity in 0i64..1_000,
        excess in 1i64..1_000,
    ) {
        let current = product(version, quantity);
        let result = occ::apply(current, version, |p| stock::decrease(p, quantity + excess));
        prop_assert_eq!(
            result,
            Err(StoreError::InsufficientStock { requested: quantity + excess, available: quantity })
        );
    }

    #[test]
    fn stale_version_conflicts(
        stored in 1i64..1_000,
        offset in 1i64..1_000,
        amount in 1i64..100,
    ) {
        let current = product(stored + offset, 50);
        let result = occ::apply(current, stored, |p| stock::increase(p, amount));
        prop_assert_eq!(
            result,
            Err(StoreError::VersionConflict { expected: stored, actual: stored + offset })
        );
    }

    #[test]
    fn non_positive_token_is_invalid(expected in i64::MIN..=0) {
        let result = occ::enable(product(1, 0), expected);
        prop_assert_eq!(result, Err(StoreError::InvalidVersion(expected)));
    }

    #[test]
    fn discount_stays_positive_and_never_raises(
        cents in 1i64..10_000_000,
        percent in 1u32..100,
    ) {
        let price = Decimal::new(cents, 2);
        match discount::discounted_price(price, Decimal::from(percent)) {
            Ok(next) => {
                prop_assert!(next > Decimal::ZERO);
                prop_assert!(next <= price);
                prop_assert!(next.scale() <= discount::PRICE_SCALE);
            }
            Err(e) => prop_assert!(matches!(e, StoreError::InvalidPrice(_))),
        }
    }
}
