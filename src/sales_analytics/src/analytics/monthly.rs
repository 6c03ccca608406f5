//! Revenue and sold/unsold counts for a month of records.

use serde::Serialize;

use crate::models::Sale;

/// Monthly totals.
///
/// - `amount`: sum of `price` over records with `sold == Some(true)`
/// - `sold_items`: records with `sold == Some(true)`
/// - `un_sold_items`: records with `sold == Some(false)`
///
/// Records without a sold flag land in neither count. A sold record without a
/// price is counted as sold but adds nothing to `amount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Revenue over sold records.
    pub amount: f64,
    /// Number of sold records.
    pub sold_items: u64,
    /// Number of records explicitly marked unsold.
    pub un_sold_items: u64,
}

impl MonthlySummary {
    /// Reduce a month-filtered record set.
    pub fn from_sales(sales: &[Sale]) -> Self {
        sales.iter().fold(Self::default(), |mut acc, sale| {
            match sale.sold {
                Some(true) => {
                    acc.sold_items += 1;
                    acc.amount += sale.price.unwrap_or(0.0);
                }
                Some(false) => acc.un_sold_items += 1,
                None => {}
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sale(price: Option<f64>, sold: Option<bool>) -> Sale {
        Sale {
            date_of_sale: "2021-10-01".into(),
            price,
            sold,
            category: None,
        }
    }

    #[test]
    fn empty_is_all_zero() {
        assert_eq!(MonthlySummary::from_sales(&[]), MonthlySummary::default());
    }

    #[test]
    fn sums_only_sold_prices() {
        let s = MonthlySummary::from_sales(&[
            sale(Some(50.0), Some(true)),
            sale(Some(150.0), Some(false)),
            sale(Some(900.0), Some(true)),
        ]);
        assert_eq!(s.amount, 950.0);
        assert_eq!(s.sold_items, 2);
        assert_eq!(s.un_sold_items, 1);
    }

    #[test]
    fn missing_flag_counts_nowhere_and_missing_price_adds_nothing() {
        let s = MonthlySummary::from_sales(&[
            sale(Some(10.0), None),
            sale(None, Some(true)),
            sale(Some(5.5), Some(true)),
        ]);
        assert_eq!(s.sold_items, 2);
        assert_eq!(s.un_sold_items, 0);
        assert_eq!(s.amount, 5.5);
        assert!(!s.amount.is_nan());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let s = MonthlySummary {
            amount: 950.0,
            sold_items: 2,
            un_sold_items: 1,
        };
        insta::assert_json_snapshot!(s, @r#"
        {
          "amount": 950.0,
          "soldItems": 2,
          "unSoldItems": 1
        }
        "#);
    }

    fn arb_sale() -> impl Strategy<Value = Sale> {
        (
            proptest::option::of(0.0f64..10_000.0),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(p, s)| sale(p, s))
    }

    proptest! {
        #[test]
        fn counts_never_exceed_record_count(sales in proptest::collection::vec(arb_sale(), 0..64)) {
            let s = MonthlySummary::from_sales(&sales);
            let total = sales.len() as u64;
            prop_assert!(s.sold_items + s.un_sold_items <= total);
            let all_flagged = sales.iter().all(|x| x.sold.is_some());
            prop_assert_eq!(s.sold_items + s.un_sold_items == total, all_flagged);
        }

        #[test]
        fn revenue_is_monotonic_in_sold_records(
            sales in proptest::collection::vec(arb_sale(), 0..32),
            extra in 0.0f64..10_000.0,
        ) {
            let before = MonthlySummary::from_sales(&sales);
            let mut more = sales.clone();
            more.push(sale(Some(extra), Some(true)));
            let after = MonthlySummary::from_sales(&more);
            prop_assert!(after.amount >= before.amount);
            prop_assert_eq!(after.sold_items, before.sold_items + 1);
        }
    }
}
