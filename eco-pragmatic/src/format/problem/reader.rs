use super::*;
use crate::format::{FormatError, LocationInfo, LocationTable, DEFAULT_ROAD_FACTOR};
use crate::validation::ValidationContext;
use eco_core::models::{CargoType, DeliveryRequest, HubAssignment, ProblemOptions, VehicleCapacities, Zone};
use eco_core::utils::SearchError;
use std::str::FromStr;

/// Validates problem definition and maps it to the core problem resolving all request contexts.
pub fn map_to_problem(problem: &Problem) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(problem).validate()?;

    let table = create_location_table(problem)?;
    let requests = create_requests(problem)?;

    let options = problem.options.clone().unwrap_or_default();
    let capacities = options.capacities.as_ref().map(create_capacities).unwrap_or_default();
    let hubs: Option<&dyn HubAssignment> = if options.use_hubs.unwrap_or(false) { Some(&table) } else { None };

    CoreProblem::new_with_options(requests, &table, ProblemOptions { capacities, hubs }).map_err(MultiFormatError::from)
}

/// Creates a location table from locations and explicit distances of the problem.
pub fn create_location_table(problem: &Problem) -> Result<LocationTable, MultiFormatError> {
    let road_factor =
        problem.options.as_ref().and_then(|options| options.road_factor).unwrap_or(DEFAULT_ROAD_FACTOR);
    let mut table = LocationTable::new(road_factor);

    problem.locations.iter().try_for_each(|location| {
        let zone = Zone::from_str(location.zone.as_str()).map_err(|err| {
            FormatError::new(
                "E1006".to_string(),
                "unknown zone".to_string(),
                format!("check zone of location '{}': '{err}'", location.id),
            )
        })?;

        table.add_location(
            location.id.as_str(),
            LocationInfo {
                zone,
                rail_access: location.rail_access,
                coordinate: location.lat.zip(location.lng),
                hub: location.hub.clone(),
            },
        );

        Ok::<_, FormatError>(())
    })?;

    problem
        .distances
        .iter()
        .flat_map(|distances| distances.iter())
        .for_each(|distance| table.add_distance(distance.from.as_str(), distance.to.as_str(), distance.km));

    Ok(table)
}

fn create_requests(problem: &Problem) -> Result<Vec<DeliveryRequest>, MultiFormatError> {
    problem
        .requests
        .iter()
        .map(|request| -> Result<DeliveryRequest, SearchError> {
            let cargo_type = CargoType::from_str(request.cargo_type.as_str())?;

            let core_request = DeliveryRequest::new(
                request.origin.as_str(),
                request.destination.as_str(),
                request.cargo_tonnes,
                cargo_type,
            )
            .with_return_trip(request.return_trip.unwrap_or(false));

            Ok(match request.priority {
                Some(priority) => core_request.with_priority(priority),
                None => core_request,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(MultiFormatError::from)
}

fn create_capacities(capacities: &Capacities) -> VehicleCapacities {
    VehicleCapacities {
        train: capacities.train,
        truck_small: capacities.truck_small,
        truck_medium: capacities.truck_medium,
        truck_large: capacities.truck_large,
        multimodal: capacities.multimodal,
    }
}
