#[cfg(test)]
#[path = "../../tests/unit/validation/locations_test.rs"]
mod locations_test;

use super::*;
use eco_core::models::Zone;
use std::str::FromStr;

/// Checks that location ids are unique.
fn check_e1004_duplicate_location_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.locations().map(|location| &location.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1004".to_string(),
            "duplicated location ids".to_string(),
            format!("remove duplicates of locations with the ids: '{}'", ids.join(", ")),
        ))
    })
}

/// Checks that explicit distances are non-negative and finite.
fn check_e1005_negative_distances(ctx: &ValidationContext) -> Result<(), FormatError> {
    let pairs = ctx
        .distances()
        .filter(|distance| !(distance.km.is_finite() && distance.km >= 0.))
        .map(|distance| format!("{}-{}", distance.from, distance.to))
        .collect::<Vec<_>>();

    if pairs.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1005".to_string(),
            "negative distance".to_string(),
            format!("use non-negative distance between locations: '{}'", pairs.join(", ")),
        ))
    }
}

/// Checks that each location has a known zone.
fn check_e1006_unknown_zones(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .locations()
        .filter(|location| Zone::from_str(location.zone.as_str()).is_err())
        .map(|location| location.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1006".to_string(),
            "unknown zone".to_string(),
            format!("use one of 'north, high_plateau, south' for locations with ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Checks that coordinates are given in pairs and within their range.
fn check_e1007_invalid_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .locations()
        .filter(|location| match (location.lat, location.lng) {
            (Some(lat), Some(lng)) => !((-90. ..=90.).contains(&lat) && (-180. ..=180.).contains(&lng)),
            (None, None) => false,
            _ => true,
        })
        .map(|location| location.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1007".to_string(),
            "invalid coordinates".to_string(),
            format!("specify both lat and lng within their range for locations with ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Checks that road factor is positive and vehicle capacities are non-negative. Zero capacity
/// disables the mode.
fn check_e1008_invalid_options(ctx: &ValidationContext) -> Result<(), FormatError> {
    let options = match ctx.problem.options.as_ref() {
        Some(options) => options,
        None => return Ok(()),
    };

    let is_positive = |value: f64| value.is_finite() && value > 0.;

    let mut fields = vec![];
    if options.road_factor.is_some_and(|factor| !is_positive(factor)) {
        fields.push("roadFactor");
    }

    if let Some(capacities) = options.capacities.as_ref() {
        let values = [
            ("train", capacities.train),
            ("truckSmall", capacities.truck_small),
            ("truckMedium", capacities.truck_medium),
            ("truckLarge", capacities.truck_large),
            ("multimodal", capacities.multimodal),
        ];
        fields.extend(
            values.iter().filter(|(_, value)| !(value.is_finite() && *value >= 0.)).map(|(name, _)| *name),
        );
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1008".to_string(),
            "invalid options".to_string(),
            format!("use positive road factor and non-negative capacities, check: '{}'", fields.join(", ")),
        ))
    }
}

/// Validates locations, distances and options.
pub fn validate_locations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1004_duplicate_location_ids(ctx),
        check_e1005_negative_distances(ctx),
        check_e1006_unknown_zones(ctx),
        check_e1007_invalid_coordinates(ctx),
        check_e1008_invalid_options(ctx),
    ])
}
