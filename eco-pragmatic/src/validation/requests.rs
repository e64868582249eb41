#[cfg(test)]
#[path = "../../tests/unit/validation/requests_test.rs"]
mod requests_test;

use super::*;
use eco_core::models::CargoType;
use rustc_hash::FxHashSet;
use std::str::FromStr;

/// Checks that request list is not empty.
fn check_e1000_no_requests(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.requests.is_empty() {
        Err(FormatError::new(
            "E1000".to_string(),
            "empty request list".to_string(),
            "specify at least one delivery request".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that each request has positive and finite cargo weight.
fn check_e1001_non_positive_cargo(ctx: &ValidationContext) -> Result<(), FormatError> {
    let indices = ctx
        .requests()
        .enumerate()
        .filter(|(_, request)| !(request.cargo_tonnes.is_finite() && request.cargo_tonnes > 0.))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "non-positive cargo weight".to_string(),
            format!("use positive cargo weight for requests with indices: '{}'", join_indices(&indices)),
        ))
    }
}

/// Checks that each request has a known cargo type.
fn check_e1002_unknown_cargo_type(ctx: &ValidationContext) -> Result<(), FormatError> {
    let indices = ctx
        .requests()
        .enumerate()
        .filter(|(_, request)| CargoType::from_str(request.cargo_type.as_str()).is_err())
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "unknown cargo type".to_string(),
            format!(
                "use one of '{}' for requests with indices: '{}'",
                CargoType::ALL.iter().map(|cargo_type| cargo_type.as_str()).collect::<Vec<_>>().join(", "),
                join_indices(&indices)
            ),
        ))
    }
}

/// Checks that requests and distances refer only to known locations.
fn check_e1003_unknown_locations(ctx: &ValidationContext) -> Result<(), FormatError> {
    let known = ctx.locations().map(|location| location.id.as_str()).collect::<FxHashSet<_>>();

    let mut unknown = ctx
        .requests()
        .flat_map(|request| [request.origin.as_str(), request.destination.as_str()])
        .chain(ctx.distances().flat_map(|distance| [distance.from.as_str(), distance.to.as_str()]))
        .filter(|id| !known.contains(id))
        .collect::<Vec<_>>();
    unknown.sort_unstable();
    unknown.dedup();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            "unknown location".to_string(),
            format!("define locations with ids: '{}'", unknown.join(", ")),
        ))
    }
}

/// Validates delivery requests.
pub fn validate_requests(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_requests(ctx),
        check_e1001_non_positive_cargo(ctx),
        check_e1002_unknown_cargo_type(ctx),
        check_e1003_unknown_locations(ctx),
    ])
}
