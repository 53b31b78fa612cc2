use std::path::Path;

use quotemill_core::engine::escalation::MAX_PROJECTION_YEARS;
use quotemill_core::engine::{discounts, tiers};
use quotemill_core::SkuPrice;
use rust_decimal::Decimal;

use crate::commands::CommandResult;
use crate::input::{self, CalculationFile};

/// Checks an input file for reference and configuration problems without
/// pricing it. Reports every issue found rather than stopping at the
/// first, so a file can be fixed in one pass.
pub fn run(path: &Path) -> CommandResult {
    let file = match input::load(path) {
        Ok(file) => file,
        Err(error) => {
            return CommandResult::failure("validate", error.class(), error.to_string(), 2);
        }
    };

    let issues = collect_issues(&file);
    if issues.is_empty() {
        return CommandResult::success(
            "validate",
            format!(
                "input is valid: {} SaaS line(s), {} setup line(s), {} year horizon",
                file.request.saas.len(),
                file.request.setup.len(),
                file.request.projection_years
            ),
        );
    }

    tracing::warn!(input = %path.display(), issues = issues.len(), "input validation failed");
    CommandResult::failure(
        "validate",
        "validation",
        format!("found {} issue(s):\n  - {}", issues.len(), issues.join("\n  - ")),
        2,
    )
}

fn collect_issues(file: &CalculationFile) -> Vec<String> {
    let mut issues = Vec::new();
    let snapshot = &file.snapshot;
    let request = &file.request;

    for product in &snapshot.products {
        if let Err(error) = tiers::validate_table(&product.code, &product.pricing) {
            issues.push(error.to_string());
        }
    }
    for sku in &snapshot.skus {
        if let SkuPrice::Tiered(table) = &sku.price {
            if let Err(error) = tiers::validate_table(&sku.code, table) {
                issues.push(error.to_string());
            }
        }
    }

    for selection in &request.saas {
        if snapshot.product(&selection.product_id).is_none() {
            issues.push(format!("unknown product reference: {}", selection.product_id.0));
        }
        if selection.quantity == 0 {
            issues.push(format!(
                "product {} has a zero quantity",
                selection.product_id.0
            ));
        }
    }
    for selection in &request.setup {
        if snapshot.sku(&selection.sku_id).is_none() {
            issues.push(format!("unknown sku reference: {}", selection.sku_id.0));
        }
    }

    if let Some(zone_id) = &request.travel.zone_id {
        if snapshot.zone(zone_id).is_none() {
            issues.push(format!("unknown travel zone reference: {}", zone_id.0));
        }
    }
    if let Some(referrer_id) = &request.referral.referrer_id {
        if snapshot.referrer(referrer_id).is_none() {
            issues.push(format!("unknown referrer reference: {}", referrer_id.0));
        }
    }

    if request.projection_years == 0 || request.projection_years > MAX_PROJECTION_YEARS {
        issues.push(format!(
            "projection horizon must be between 1 and {MAX_PROJECTION_YEARS} years"
        ));
    }

    if let Err(error) = discounts::saas_discount_fractions(&request.discounts) {
        issues.push(error.to_string());
    }
    if let Some(fixed) = request.discounts.setup_fixed {
        if fixed < Decimal::ZERO {
            issues.push(format!("setup_fixed discount {fixed} cannot be negative"));
        }
    }

    if request.milestones.duration_months == 0 {
        issues.push("milestone duration must be at least 1 month".to_string());
    }
    if request.milestones.initial_payment < Decimal::ZERO
        || request.milestones.initial_payment > Decimal::ONE
    {
        issues.push(format!(
            "initial payment fraction {} must be in [0, 1]",
            request.milestones.initial_payment
        ));
    }

    issues
}
