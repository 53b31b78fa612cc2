use rust_decimal::Decimal;

use crate::domain::escalation::EscalationModel;
use crate::errors::EngineError;
use crate::money::round_currency;

/// Longest supported contract horizon.
pub const MAX_PROJECTION_YEARS: u32 = 10;

/// Projects a base monthly amount across the contract horizon, returning
/// one per-year monthly amount per projected year.
///
/// Escalation compounds on the unrounded running amount; only the
/// reported per-year figure is rounded, half-even, to the cent.
pub fn project_monthly(
    base_monthly: Decimal,
    horizon_years: u32,
    model: &EscalationModel,
) -> Result<Vec<Decimal>, EngineError> {
    if horizon_years == 0 || horizon_years > MAX_PROJECTION_YEARS {
        return Err(EngineError::InvalidRequest(format!(
            "projection horizon of {horizon_years} years must be between 1 and {MAX_PROJECTION_YEARS}"
        )));
    }

    let years = horizon_years as usize;
    match model {
        EscalationModel::Flat => Ok(vec![round_currency(base_monthly); years]),
        EscalationModel::FixedPercent { annual_rate } => {
            let growth = growth_factor(*annual_rate)?;
            let mut projected = Vec::with_capacity(years);
            let mut running = base_monthly;
            projected.push(round_currency(running));
            for _ in 1..years {
                running *= growth;
                projected.push(round_currency(running));
            }
            Ok(projected)
        }
        EscalationModel::MultiYearFreeze { freeze_years, annual_rate } => {
            if *freeze_years == 0 || *freeze_years > horizon_years {
                return Err(EngineError::InvalidRequest(format!(
                    "freeze of {freeze_years} years must be between 1 and the {horizon_years}-year horizon"
                )));
            }

            let growth = growth_factor(*annual_rate)?;
            let mut projected = vec![round_currency(base_monthly); *freeze_years as usize];
            // Escalation restarts cleanly: the exponent counts from the
            // first post-freeze year, never from the frozen years.
            let mut running = base_monthly;
            for _ in *freeze_years..horizon_years {
                running *= growth;
                projected.push(round_currency(running));
            }
            Ok(projected)
        }
    }
}

fn growth_factor(annual_rate: Decimal) -> Result<Decimal, EngineError> {
    if annual_rate < Decimal::ZERO {
        return Err(EngineError::InvalidRequest(format!(
            "escalation rate {annual_rate} cannot be negative"
        )));
    }
    Ok(Decimal::ONE + annual_rate)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::escalation::EscalationModel;
    use crate::errors::EngineError;

    use super::project_monthly;

    #[test]
    fn flat_returns_identical_amounts_for_every_year() {
        let projected =
            project_monthly(Decimal::new(25000, 2), 5, &EscalationModel::Flat).unwrap();
        assert_eq!(projected, vec![Decimal::new(25000, 2); 5]);
    }

    #[test]
    fn fixed_percent_compounds_from_year_two() {
        let model = EscalationModel::FixedPercent { annual_rate: Decimal::new(10, 2) };
        let projected = project_monthly(Decimal::new(25000, 2), 3, &model).unwrap();
        assert_eq!(
            projected,
            vec![Decimal::new(25000, 2), Decimal::new(27500, 2), Decimal::new(30250, 2)]
        );
    }

    #[test]
    fn fixed_percent_is_strictly_increasing_for_positive_rates() {
        let model = EscalationModel::FixedPercent { annual_rate: Decimal::new(4, 2) };
        let projected = project_monthly(Decimal::new(295000, 2), 10, &model).unwrap();
        for pair in projected.windows(2) {
            assert!(pair[1] > pair[0], "expected strict growth, got {pair:?}");
        }
    }

    #[test]
    fn freeze_holds_base_then_escalates_from_the_first_post_freeze_year() {
        let model = EscalationModel::MultiYearFreeze {
            freeze_years: 3,
            annual_rate: Decimal::new(10, 2),
        };
        let projected = project_monthly(Decimal::new(10000, 2), 5, &model).unwrap();
        assert_eq!(
            projected,
            vec![
                Decimal::new(10000, 2),
                Decimal::new(10000, 2),
                Decimal::new(10000, 2),
                Decimal::new(11000, 2), // (1.10)^1, not (1.10)^3
                Decimal::new(12100, 2),
            ]
        );
    }

    #[test]
    fn freeze_for_the_whole_horizon_never_escalates() {
        let model = EscalationModel::MultiYearFreeze {
            freeze_years: 4,
            annual_rate: Decimal::new(10, 2),
        };
        let projected = project_monthly(Decimal::new(10000, 2), 4, &model).unwrap();
        assert_eq!(projected, vec![Decimal::new(10000, 2); 4]);
    }

    #[test]
    fn rejects_horizons_outside_one_to_ten_years() {
        let error = project_monthly(Decimal::ONE, 0, &EscalationModel::Flat)
            .expect_err("zero horizon");
        assert!(matches!(error, EngineError::InvalidRequest(_)));

        let error = project_monthly(Decimal::ONE, 11, &EscalationModel::Flat)
            .expect_err("horizon beyond the cap");
        assert!(matches!(error, EngineError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_out_of_range_freeze() {

        let model = EscalationModel::MultiYearFreeze {
            freeze_years: 6,
            annual_rate: Decimal::new(4, 2),
        };
        let error = project_monthly(Decimal::ONE, 5, &model).expect_err("freeze beyond horizon");
        assert!(matches!(error, EngineError::InvalidRequest(_)));
    }
}
