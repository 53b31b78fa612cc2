use rust_decimal::Decimal;

use crate::domain::referrer::{Referrer, ReferralCommission, ReferralTerms};
use crate::errors::EngineError;
use crate::money::round_currency;

/// Computes the commission owed for a version, if any. The figure is
/// informational: it is never deducted from the client-facing total.
pub fn commission(
    total_contracted: Decimal,
    terms: &ReferralTerms,
    referrer: Option<&Referrer>,
) -> Result<Option<ReferralCommission>, EngineError> {
    let Some(referrer) = referrer else {
        if terms.rate_override.is_some() {
            return Err(EngineError::InvalidReferralRate {
                reason: "rate override supplied without a referrer".to_string(),
            });
        }
        return Ok(None);
    };

    let rate = terms.rate_override.unwrap_or(referrer.default_rate);
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::InvalidReferralRate {
            reason: format!("effective rate {rate} is outside [0, 1]"),
        });
    }

    Ok(Some(ReferralCommission {
        referrer_id: referrer.id.clone(),
        rate,
        amount: round_currency(total_contracted * rate),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::referrer::{Referrer, ReferrerId, ReferralTerms};
    use crate::errors::EngineError;

    use super::commission;

    fn referrer(default_rate: Decimal) -> Referrer {
        Referrer {
            id: ReferrerId("REF-1".to_string()),
            name: "Gulf Coast Partners".to_string(),
            default_rate,
            active: true,
        }
    }

    #[test]
    fn uses_the_default_rate_when_no_override_is_set() {
        let result = commission(
            Decimal::new(10_000_000, 2),
            &ReferralTerms { referrer_id: Some(ReferrerId("REF-1".to_string())), rate_override: None },
            Some(&referrer(Decimal::new(5, 2))),
        )
        .unwrap()
        .expect("commission for referred quote");

        assert_eq!(result.rate, Decimal::new(5, 2));
        assert_eq!(result.amount, Decimal::new(500_000, 2));
    }

    #[test]
    fn override_replaces_the_default_rate() {
        let result = commission(
            Decimal::new(10_000_000, 2),
            &ReferralTerms {
                referrer_id: Some(ReferrerId("REF-1".to_string())),
                rate_override: Some(Decimal::new(75, 3)),
            },
            Some(&referrer(Decimal::new(5, 2))),
        )
        .unwrap()
        .expect("commission with override");

        assert_eq!(result.rate, Decimal::new(75, 3));
        assert_eq!(result.amount, Decimal::new(750_000, 2));
    }

    #[test]
    fn no_referrer_and_no_override_yields_no_commission() {
        let result = commission(Decimal::ONE_HUNDRED, &ReferralTerms::default(), None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn override_without_a_referrer_is_rejected() {
        let error = commission(
            Decimal::ONE_HUNDRED,
            &ReferralTerms { referrer_id: None, rate_override: Some(Decimal::new(5, 2)) },
            None,
        )
        .expect_err("override without referrer");
        assert!(matches!(error, EngineError::InvalidReferralRate { .. }));
    }

    #[test]
    fn rejects_rates_outside_the_unit_interval() {
        let error = commission(
            Decimal::ONE_HUNDRED,
            &ReferralTerms {
                referrer_id: Some(ReferrerId("REF-1".to_string())),
                rate_override: Some(Decimal::new(150, 2)),
            },
            Some(&referrer(Decimal::new(5, 2))),
        )
        .expect_err("rate above 1");
        assert!(matches!(error, EngineError::InvalidReferralRate { .. }));
    }
}
