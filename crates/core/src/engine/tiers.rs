use rust_decimal::Decimal;

use crate::domain::product::ProductPricingTable;
use crate::errors::EngineError;

const MAX_TIERS: usize = 3;

/// Resolves the per-unit price for `quantity` against a tiered table.
///
/// Pure and referentially transparent: the same table and quantity always
/// produce the same price, so callers may memoize freely. The contiguity
/// invariant is validated here, not just at data entry, so stale or
/// hand-edited reference data surfaces as `InconsistentPricingTable`.
pub fn resolve_unit_price(
    reference: &str,
    table: &ProductPricingTable,
    quantity: u32,
) -> Result<Decimal, EngineError> {
    validate_table(reference, table)?;

    for tier in &table.tiers {
        let within_max = tier.max_quantity.map_or(true, |max| quantity <= max);
        if quantity >= tier.min_quantity && within_max {
            return Ok(tier.unit_price);
        }
    }

    Err(EngineError::PricingTierExhausted { reference: reference.to_string(), quantity })
}

/// Checks tier ordering and contiguity: 1-3 tiers, the first starting at
/// quantity 1, each subsequent minimum equal to the previous maximum + 1,
/// and only the highest tier open-ended.
pub fn validate_table(reference: &str, table: &ProductPricingTable) -> Result<(), EngineError> {
    let inconsistent = |reason: String| EngineError::InconsistentPricingTable {
        reference: reference.to_string(),
        reason,
    };

    let tiers = &table.tiers;
    if tiers.is_empty() || tiers.len() > MAX_TIERS {
        return Err(inconsistent(format!(
            "expected between 1 and {MAX_TIERS} tiers, found {}",
            tiers.len()
        )));
    }

    if tiers[0].min_quantity != 1 {
        return Err(inconsistent(format!(
            "first tier must start at quantity 1, found {}",
            tiers[0].min_quantity
        )));
    }

    for (index, tier) in tiers.iter().enumerate() {
        if tier.unit_price < Decimal::ZERO {
            return Err(inconsistent(format!("tier {} has a negative unit price", index + 1)));
        }

        match tier.max_quantity {
            Some(max) if max < tier.min_quantity => {
                return Err(inconsistent(format!(
                    "tier {} maximum {max} is below its minimum {}",
                    index + 1,
                    tier.min_quantity
                )));
            }
            Some(max) => {
                if let Some(next) = tiers.get(index + 1) {
                    if next.min_quantity != max + 1 {
                        return Err(inconsistent(format!(
                            "tier {} must start at {} to stay contiguous, found {}",
                            index + 2,
                            max + 1,
                            next.min_quantity
                        )));
                    }
                }
            }
            None => {
                if index + 1 < tiers.len() {
                    return Err(inconsistent(format!(
                        "tier {} is open-ended but is not the highest tier",
                        index + 1
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{PricingTier, ProductPricingTable};
    use crate::errors::EngineError;

    use super::{resolve_unit_price, validate_table};

    fn three_tier_table() -> ProductPricingTable {
        ProductPricingTable {
            tiers: vec![
                PricingTier {
                    min_quantity: 1,
                    max_quantity: Some(10),
                    unit_price: Decimal::new(5000, 2),
                },
                PricingTier {
                    min_quantity: 11,
                    max_quantity: Some(50),
                    unit_price: Decimal::new(4000, 2),
                },
                PricingTier {
                    min_quantity: 51,
                    max_quantity: None,
                    unit_price: Decimal::new(3000, 2),
                },
            ],
        }
    }

    #[test]
    fn resolves_tier_boundaries_to_that_tier_price() {
        let table = three_tier_table();
        assert_eq!(resolve_unit_price("teller", &table, 1).unwrap(), Decimal::new(5000, 2));
        assert_eq!(resolve_unit_price("teller", &table, 10).unwrap(), Decimal::new(5000, 2));
        assert_eq!(resolve_unit_price("teller", &table, 11).unwrap(), Decimal::new(4000, 2));
        assert_eq!(resolve_unit_price("teller", &table, 50).unwrap(), Decimal::new(4000, 2));
        assert_eq!(resolve_unit_price("teller", &table, 51).unwrap(), Decimal::new(3000, 2));
        assert_eq!(resolve_unit_price("teller", &table, 10_000).unwrap(), Decimal::new(3000, 2));
    }

    #[test]
    fn exhausts_when_quantity_exceeds_a_closed_highest_tier() {
        let mut table = three_tier_table();
        table.tiers[2].max_quantity = Some(100);

        let error = resolve_unit_price("teller", &table, 101).expect_err("beyond highest tier");
        assert_eq!(
            error,
            EngineError::PricingTierExhausted { reference: "teller".to_string(), quantity: 101 }
        );
    }

    #[test]
    fn zero_quantity_resolves_to_no_tier() {
        let table = three_tier_table();
        let error = resolve_unit_price("teller", &table, 0).expect_err("zero quantity");
        assert!(matches!(error, EngineError::PricingTierExhausted { quantity: 0, .. }));
    }

    #[test]
    fn detects_gap_between_tiers() {
        let mut table = three_tier_table();
        table.tiers[1].min_quantity = 12;

        let error = validate_table("teller", &table).expect_err("gap between tiers");
        assert!(matches!(
            error,
            EngineError::InconsistentPricingTable { reason, .. } if reason.contains("contiguous")
        ));
    }

    #[test]
    fn rejects_open_ended_tier_below_the_highest() {
        let mut table = three_tier_table();
        table.tiers[1].max_quantity = None;

        let error = validate_table("teller", &table).expect_err("mid tier open-ended");
        assert!(matches!(
            error,
            EngineError::InconsistentPricingTable { reason, .. } if reason.contains("open-ended")
        ));
    }

    #[test]
    fn rejects_first_tier_not_starting_at_one() {
        let mut table = three_tier_table();
        table.tiers[0].min_quantity = 2;

        let error = validate_table("teller", &table).expect_err("first tier must start at 1");
        assert!(matches!(error, EngineError::InconsistentPricingTable { .. }));
    }

    #[test]
    fn rejects_more_than_three_tiers() {
        let mut table = three_tier_table();
        table.tiers[2].max_quantity = Some(100);
        table.tiers.push(PricingTier {
            min_quantity: 101,
            max_quantity: None,
            unit_price: Decimal::new(2000, 2),
        });

        let error = validate_table("teller", &table).expect_err("four tiers");
        assert!(matches!(error, EngineError::InconsistentPricingTable { .. }));
    }
}
