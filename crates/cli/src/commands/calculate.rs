use std::path::Path;

use quotemill_core::{calculate_version, VersionNumber};

use crate::commands::CommandResult;
use crate::input;

pub fn run(path: &Path) -> CommandResult {
    let file = match input::load(path) {
        Ok(file) => file,
        Err(error) => {
            return CommandResult::failure("calculate", error.class(), error.to_string(), 2);
        }
    };

    let version = match calculate_version(&file.request, &file.snapshot, VersionNumber::first()) {
        Ok(version) => version,
        Err(error) => {
            tracing::warn!(
                error_class = error.class(),
                input = %path.display(),
                "version calculation failed"
            );
            return CommandResult::failure("calculate", error.class(), error.to_string(), 3);
        }
    };

    tracing::info!(
        input = %path.display(),
        contracted = %version.totals.contracted,
        advisories = version.advisories.len(),
        "version calculation completed"
    );

    let message = format!(
        "priced {} over {} year(s): contracted total {}",
        version.number, version.projection_years, version.totals.contracted
    );
    match serde_json::to_value(&version) {
        Ok(data) => CommandResult::success_with_data("calculate", message, data),
        Err(error) => CommandResult::failure(
            "calculate",
            "serialization",
            format!("could not serialize the computed version: {error}"),
            3,
        ),
    }
}
