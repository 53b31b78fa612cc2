use rust_decimal::Decimal;

use crate::domain::milestones::{Milestone, MilestoneStyle, MilestoneTerms};
use crate::errors::EngineError;
use crate::money::{round_currency, round_currency_down};

/// Largest tolerated gap between a custom schedule and the contract
/// total: one currency unit of rounding slack.
const CUSTOM_SUM_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Splits the total contracted amount into milestone payments.
///
/// Invariant for every style: the returned milestones sum exactly to the
/// input total. Per-month shares round toward zero and the final milestone
/// absorbs the remainder, which keeps that remainder non-negative.
pub fn allocate(total: Decimal, terms: &MilestoneTerms) -> Result<Vec<Milestone>, EngineError> {
    if terms.duration_months == 0 {
        return Err(EngineError::InvalidRequest(
            "project duration must be at least 1 month".to_string(),
        ));
    }
    if terms.initial_payment < Decimal::ZERO || terms.initial_payment > Decimal::ONE {
        return Err(EngineError::InvalidRequest(format!(
            "initial payment fraction {} must be in [0, 1]",
            terms.initial_payment
        )));
    }

    match terms.style {
        MilestoneStyle::UpfrontPlusMonthly => Ok(upfront_plus_monthly(total, terms)),
        MilestoneStyle::EqualInstallments => Ok(equal_installments(total, terms.duration_months)),
        MilestoneStyle::Custom => custom(total, terms),
    }
}

fn upfront_plus_monthly(total: Decimal, terms: &MilestoneTerms) -> Vec<Milestone> {
    let duration = terms.duration_months;
    if duration == 1 {
        return vec![Milestone { month: 1, amount: total }];
    }

    let first = round_currency(total * terms.initial_payment);
    let tail_months = Decimal::from(duration - 1);
    let per_month = round_currency_down((total - first) / tail_months);

    let mut milestones = Vec::with_capacity(duration as usize);
    milestones.push(Milestone { month: 1, amount: first });
    let mut allocated = first;
    for month in 2..duration {
        milestones.push(Milestone { month, amount: per_month });
        allocated += per_month;
    }
    milestones.push(Milestone { month: duration, amount: total - allocated });
    milestones
}

fn equal_installments(total: Decimal, duration: u32) -> Vec<Milestone> {
    let per_month = round_currency_down(total / Decimal::from(duration));

    let mut milestones = Vec::with_capacity(duration as usize);
    let mut allocated = Decimal::ZERO;
    for month in 1..duration {
        milestones.push(Milestone { month, amount: per_month });
        allocated += per_month;
    }
    milestones.push(Milestone { month: duration, amount: total - allocated });
    milestones
}

fn custom(total: Decimal, terms: &MilestoneTerms) -> Result<Vec<Milestone>, EngineError> {
    let supplied = match terms.custom.as_deref() {
        Some(milestones) if !milestones.is_empty() => milestones,
        _ => {
            return Err(EngineError::InvalidRequest(
                "custom milestone style requires a non-empty milestone list".to_string(),
            ));
        }
    };

    let actual: Decimal = supplied.iter().map(|milestone| milestone.amount).sum();
    let gap = total - actual;
    if gap.abs() > CUSTOM_SUM_TOLERANCE {
        return Err(EngineError::MilestoneSumMismatch { expected: total, actual });
    }

    // Within tolerance: absorb the cent-level gap into the final
    // milestone so the stored schedule sums exactly.
    let mut milestones = supplied.to_vec();
    if let Some(last) = milestones.last_mut() {
        last.amount += gap;
    }
    Ok(milestones)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::milestones::{Milestone, MilestoneStyle, MilestoneTerms};
    use crate::errors::EngineError;

    use super::allocate;

    fn terms(style: MilestoneStyle, initial_pct: i64, duration: u32) -> MilestoneTerms {
        MilestoneTerms {
            style,
            initial_payment: Decimal::new(initial_pct, 2),
            duration_months: duration,
            custom: None,
        }
    }

    fn assert_sums_to(milestones: &[Milestone], total: Decimal) {
        let sum: Decimal = milestones.iter().map(|m| m.amount).sum();
        assert_eq!(sum, total, "milestones must sum exactly to the total");
    }

    #[test]
    fn upfront_plus_monthly_assigns_the_rounding_remainder_to_the_final_month() {
        let total = Decimal::new(1_200_000, 2); // 12,000.00
        let milestones =
            allocate(total, &terms(MilestoneStyle::UpfrontPlusMonthly, 25, 12)).unwrap();

        assert_eq!(milestones.len(), 12);
        assert_eq!(milestones[0].amount, Decimal::new(300_000, 2));
        for milestone in &milestones[1..11] {
            assert_eq!(milestone.amount, Decimal::new(81_818, 2));
        }
        assert_eq!(milestones[11].amount, Decimal::new(81_820, 2));
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn upfront_with_duration_one_collapses_to_a_single_milestone() {
        let total = Decimal::new(500_000, 2);
        let milestones =
            allocate(total, &terms(MilestoneStyle::UpfrontPlusMonthly, 25, 1)).unwrap();
        assert_eq!(milestones, vec![Milestone { month: 1, amount: total }]);
    }

    #[test]
    fn upfront_with_full_initial_payment_still_sums_exactly() {
        let total = Decimal::new(987_654, 2);
        let milestones =
            allocate(total, &terms(MilestoneStyle::UpfrontPlusMonthly, 100, 6)).unwrap();
        assert_eq!(milestones[0].amount, total);
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn equal_installments_ignores_the_initial_percentage() {
        let total = Decimal::new(100_000, 2); // 1,000.00
        let milestones =
            allocate(total, &terms(MilestoneStyle::EqualInstallments, 25, 3)).unwrap();

        assert_eq!(milestones[0].amount, Decimal::new(33_333, 2));
        assert_eq!(milestones[1].amount, Decimal::new(33_333, 2));
        assert_eq!(milestones[2].amount, Decimal::new(33_334, 2));
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn allocation_sums_exactly_across_duration_and_percentage_combinations() {
        let total = Decimal::new(777_777, 2);
        for duration in [1u32, 2, 7, 12, 36] {
            for initial_pct in [0i64, 10, 25, 50, 100] {
                for style in [MilestoneStyle::UpfrontPlusMonthly, MilestoneStyle::EqualInstallments]
                {
                    let milestones =
                        allocate(total, &terms(style, initial_pct, duration)).unwrap();
                    assert_eq!(milestones.len(), duration as usize);
                    assert_sums_to(&milestones, total);
                }
            }
        }
    }

    #[test]
    fn final_milestone_never_goes_negative_for_extreme_initial_fractions() {
        // 97% up front over 36 months leaves 3.00 across 35 months; a
        // half-even 0.09 share would overdraw the remainder.
        let total = Decimal::new(10_000, 2); // 100.00
        let milestones =
            allocate(total, &terms(MilestoneStyle::UpfrontPlusMonthly, 97, 36)).unwrap();

        assert_eq!(milestones[0].amount, Decimal::new(9_700, 2));
        for milestone in &milestones {
            assert!(milestone.amount >= Decimal::ZERO, "negative milestone {milestone:?}");
        }
        assert_eq!(milestones[35].amount, Decimal::new(28, 2));
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn equal_installments_round_down_rather_than_overdraw_small_totals() {
        let total = Decimal::new(18, 2); // 0.18 over 12 months
        let milestones =
            allocate(total, &terms(MilestoneStyle::EqualInstallments, 0, 12)).unwrap();

        for milestone in &milestones {
            assert!(milestone.amount >= Decimal::ZERO, "negative milestone {milestone:?}");
        }
        assert_eq!(milestones[0].amount, Decimal::new(1, 2));
        assert_eq!(milestones[11].amount, Decimal::new(7, 2));
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn custom_schedule_within_tolerance_is_adjusted_to_sum_exactly() {
        let total = Decimal::new(100_001, 2); // 1,000.01
        let custom = MilestoneTerms {
            style: MilestoneStyle::Custom,
            initial_payment: Decimal::ZERO,
            duration_months: 2,
            custom: Some(vec![
                Milestone { month: 1, amount: Decimal::new(50_000, 2) },
                Milestone { month: 2, amount: Decimal::new(50_000, 2) },
            ]),
        };

        let milestones = allocate(total, &custom).unwrap();
        assert_eq!(milestones[1].amount, Decimal::new(50_001, 2));
        assert_sums_to(&milestones, total);
    }

    #[test]
    fn custom_schedule_outside_tolerance_is_rejected() {
        let total = Decimal::new(100_000, 2);
        let custom = MilestoneTerms {
            style: MilestoneStyle::Custom,
            initial_payment: Decimal::ZERO,
            duration_months: 2,
            custom: Some(vec![
                Milestone { month: 1, amount: Decimal::new(40_000, 2) },
                Milestone { month: 2, amount: Decimal::new(50_000, 2) },
            ]),
        };

        let error = allocate(total, &custom).expect_err("schedule 100.00 short");
        assert_eq!(
            error,
            EngineError::MilestoneSumMismatch {
                expected: Decimal::new(100_000, 2),
                actual: Decimal::new(90_000, 2)
            }
        );
    }

    #[test]
    fn rejects_zero_duration_and_out_of_range_initial_payment() {
        let total = Decimal::ONE_HUNDRED;
        assert!(matches!(
            allocate(total, &terms(MilestoneStyle::EqualInstallments, 25, 0)),
            Err(EngineError::InvalidRequest(_))
        ));
        assert!(matches!(
            allocate(total, &terms(MilestoneStyle::UpfrontPlusMonthly, 150, 10)),
            Err(EngineError::InvalidRequest(_))
        ));
    }
}
