#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::costs::{evaluate, DecisionCost};
use crate::models::*;
use crate::utils::{GenericError, SearchError, SearchResult};
use rustc_hash::FxHashMap;

/// Specifies optional settings used to resolve request contexts.
#[derive(Default)]
pub struct ProblemOptions<'a> {
    /// Vehicle capacities per mode.
    pub capacities: VehicleCapacities,
    /// When set, deliveries are routed through the origin's regional hub.
    pub hubs: Option<&'a dyn HubAssignment>,
}

/// A search problem: requests with their contexts and feasible modes. Contexts are resolved once
/// and never change afterwards, so no lookup happens during the search.
#[derive(Clone, Debug)]
pub struct Problem {
    requests: Vec<DeliveryRequest>,
    contexts: Vec<Context>,
    feasible_modes: Vec<Vec<TransportMode>>,
}

impl Problem {
    /// Creates a problem using default options.
    pub fn new<L>(requests: Vec<DeliveryRequest>, lookup: &L) -> SearchResult<Self>
    where
        L: ContextLookup + ?Sized,
    {
        Self::new_with_options(requests, lookup, ProblemOptions::default())
    }

    /// Creates a problem validating requests and resolving their contexts.
    pub fn new_with_options<L>(
        requests: Vec<DeliveryRequest>,
        lookup: &L,
        options: ProblemOptions<'_>,
    ) -> SearchResult<Self>
    where
        L: ContextLookup + ?Sized,
    {
        validate_requests(&requests)?;

        let mut cache: FxHashMap<(&str, &str), Context> = FxHashMap::default();
        let mut contexts = Vec::with_capacity(requests.len());

        for (idx, request) in requests.iter().enumerate() {
            let key = (request.origin.as_str(), request.destination.as_str());
            let context = match cache.get(&key) {
                Some(context) => context.clone(),
                None => {
                    let context = resolve_context(request, lookup, &options)
                        .map_err(|cause| SearchError::ExternalLookup { request: idx, cause })?;
                    cache.insert(key, context.clone());
                    context
                }
            };

            contexts.push(context);
        }

        let feasible_modes = contexts
            .iter()
            .enumerate()
            .map(|(idx, context)| {
                let modes = context.feasible_modes();
                if modes.is_empty() {
                    Err(SearchError::InvalidInput(format!("request {idx} has no feasible transport mode")))
                } else {
                    Ok(modes)
                }
            })
            .collect::<SearchResult<Vec<_>>>()?;

        Ok(Self { requests, contexts, feasible_modes })
    }

    /// Returns amount of requests.
    pub fn size(&self) -> usize {
        self.requests.len()
    }

    /// Returns all requests.
    pub fn requests(&self) -> &[DeliveryRequest] {
        self.requests.as_slice()
    }

    /// Returns request by its index.
    pub fn request(&self, idx: usize) -> &DeliveryRequest {
        &self.requests[idx]
    }

    /// Returns resolved context of the request.
    pub fn context(&self, idx: usize) -> &Context {
        &self.contexts[idx]
    }

    /// Returns modes which can be assigned to the request.
    pub fn feasible_modes(&self, idx: usize) -> &[TransportMode] {
        self.feasible_modes[idx].as_slice()
    }

    /// Estimates cost and emissions of assigning `mode` to the request.
    pub fn evaluate_decision(&self, idx: usize, mode: TransportMode) -> DecisionCost {
        evaluate(mode, &self.requests[idx], &self.contexts[idx])
    }
}

fn validate_requests(requests: &[DeliveryRequest]) -> SearchResult<()> {
    if requests.is_empty() {
        return Err(SearchError::InvalidInput("request list is empty".to_string()));
    }

    requests.iter().enumerate().try_for_each(|(idx, request)| {
        if request.cargo_tonnes.is_finite() && request.cargo_tonnes > 0. {
            Ok(())
        } else {
            Err(SearchError::InvalidInput(format!(
                "request {idx} has non-positive cargo: {} tonnes",
                request.cargo_tonnes
            )))
        }
    })
}

pub(crate) fn resolve_context<L>(request: &DeliveryRequest, lookup: &L, options: &ProblemOptions<'_>) -> Result<Context, GenericError>
where
    L: ContextLookup + ?Sized,
{
    let origin = request.origin.as_str();
    let destination = request.destination.as_str();

    let hub = match options.hubs {
        Some(hubs) => hubs.hub(origin)?.filter(|hub| hub != origin && hub != destination),
        None => None,
    };

    let distance_km = match hub.as_deref() {
        Some(hub) => get_distance(lookup, origin, hub)? + get_distance(lookup, hub, destination)?,
        None => get_distance(lookup, origin, destination)?,
    };

    Ok(Context {
        distance_km,
        origin_zone: lookup.zone(origin)?,
        destination_zone: lookup.zone(destination)?,
        rail_access_origin: lookup.has_rail_access(origin)?,
        rail_access_destination: lookup.has_rail_access(destination)?,
        capacities: options.capacities.clone(),
        hub,
    })
}

fn get_distance<L>(lookup: &L, from: &str, to: &str) -> Result<f64, GenericError>
where
    L: ContextLookup + ?Sized,
{
    let distance = lookup.distance_km(from, to)?;

    if distance.is_finite() && distance >= 0. {
        Ok(distance)
    } else {
        Err(format!("invalid distance between '{from}' and '{to}': {distance}").into())
    }
}
