use super::{evaluate, DecisionCost};
use crate::models::{resolve_context, CargoType, ContextLookup, DeliveryRequest, ProblemOptions, TransportMode};
use crate::utils::{SearchError, SearchResult};

/// A leg between two consecutive stops of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSegment {
    /// A stop where the leg starts.
    pub from: String,
    /// A stop where the leg ends.
    pub to: String,
    /// Leg distance.
    pub distance_km: f64,
    /// Cost and emissions of the leg.
    pub cost: DecisionCost,
}

/// Footprint of a multi-stop route driven with one mode and the same cargo on every leg.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteFootprint {
    /// Legs in route order.
    pub segments: Vec<RouteSegment>,
    /// Sum of leg distances.
    pub total_distance_km: f64,
    /// Sum of leg costs and emissions.
    pub total: DecisionCost,
    /// Emissions per kilometer of the route, zero for a route of zero length.
    pub co2_per_km: f64,
}

/// Estimates cost and emissions of a route visiting `stops` in order. Each leg resolves its own
/// context, so zone and distance rules apply per leg. Lookup failures name the leg index.
pub fn route_footprint<L>(
    stops: &[&str],
    cargo_tonnes: f64,
    cargo_type: CargoType,
    mode: TransportMode,
    lookup: &L,
) -> SearchResult<RouteFootprint>
where
    L: ContextLookup + ?Sized,
{
    if stops.len() < 2 {
        return Err(SearchError::InvalidInput(format!("route needs at least 2 stops, got {}", stops.len())));
    }

    if !(cargo_tonnes.is_finite() && cargo_tonnes > 0.) {
        return Err(SearchError::InvalidInput(format!("route has non-positive cargo: {cargo_tonnes} tonnes")));
    }

    let options = ProblemOptions::default();

    let segments = stops
        .windows(2)
        .enumerate()
        .map(|(idx, leg)| -> SearchResult<RouteSegment> {
            let request = DeliveryRequest::new(leg[0], leg[1], cargo_tonnes, cargo_type);
            let context = resolve_context(&request, lookup, &options)
                .map_err(|cause| SearchError::ExternalLookup { request: idx, cause })?;

            if !context.is_feasible(mode) {
                return Err(SearchError::InvalidInput(format!("mode {mode} is not feasible on leg {idx}")));
            }

            Ok(RouteSegment {
                from: request.origin.clone(),
                to: request.destination.clone(),
                distance_km: context.distance_km,
                cost: evaluate(mode, &request, &context),
            })
        })
        .collect::<SearchResult<Vec<_>>>()?;

    let total_distance_km = segments.iter().map(|segment| segment.distance_km).sum::<f64>();
    let total = segments.iter().fold(DecisionCost::default(), |acc, segment| DecisionCost {
        cost: acc.cost + segment.cost.cost,
        co2: acc.co2 + segment.cost.co2,
    });
    let co2_per_km = if total_distance_km > 0. { total.co2 / total_distance_km } else { 0. };

    Ok(RouteFootprint { segments, total_distance_km, total, co2_per_km })
}
