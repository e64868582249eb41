//! A rule based estimator of cost and emissions of a single transport decision.
//!
//! Emissions start from a per mode base factor (kg CO2 per tonne-km) which is adjusted by eight
//! rules applied in a fixed order:
//!
//! 1. base factor of the mode
//! 2. destination zone multiplier
//! 3. zone crossing surcharge (additive)
//! 4. load factor penalty, moderate below 50% and additionally severe below 25%
//! 5. cargo type multiplier
//! 6. empty return leg (additive)
//! 7. long distance rail bonus
//! 8. extreme south penalty
//!
//! Several rules are multiplicative and two are additive, so the order is part of the model.
//! Cost uses its own base table, the same zone, crossing, load and cargo adjustments, an urgent
//! rail surcharge and a fixed handling overhead per shipment.
//!
//! A multi-stop route is estimated leg by leg with `route_footprint`.

#[cfg(test)]
#[path = "../../tests/unit/costs/cost_model_test.rs"]
mod cost_model_test;

mod route;
pub use self::route::*;

mod rules;
pub use self::rules::*;

use crate::models::{Context, DeliveryRequest, TransportMode, Zone};
use crate::utils::compare_floats;

/// Cost and emissions of a single decision. Values are not rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DecisionCost {
    /// Cost in DZD.
    pub cost: f64,
    /// Emissions in kg of CO2.
    pub co2: f64,
}

/// A rule of the cost model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// R1: per mode base factor.
    BaseFactor,
    /// R2: destination zone multiplier.
    DestinationZone,
    /// R3: zone crossing surcharge.
    ZoneCrossing,
    /// R4: partial load penalty.
    LoadFactor,
    /// R5: cargo type multiplier.
    CargoType,
    /// R6: empty return leg.
    EmptyReturn,
    /// R7: long distance rail bonus.
    LongHaulRail,
    /// R8: extreme south penalty.
    ExtremeSouth,
    /// Urgent delivery on rail surcharge, cost only.
    UrgentRail,
}

/// A rule which fired together with running factors right after it was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleTrace {
    /// A rule.
    pub rule: Rule,
    /// Running emission factor, kg CO2 per tonne-km.
    pub co2_factor: f64,
    /// Running cost factor, DZD per tonne-km.
    pub cost_factor: f64,
}

/// Estimates cost and emissions of transporting the request with given mode.
///
/// The function is pure and total for feasible modes. Feasibility is guaranteed by the callers,
/// an infeasible mode is a programming error.
pub fn evaluate(mode: TransportMode, request: &DeliveryRequest, context: &Context) -> DecisionCost {
    apply_rules(mode, request, context, |_| {})
}

/// Returns the rules which fired for the decision in application order.
pub fn explain(mode: TransportMode, request: &DeliveryRequest, context: &Context) -> (DecisionCost, Vec<RuleTrace>) {
    let mut traces = Vec::with_capacity(9);
    let cost = apply_rules(mode, request, context, |trace| traces.push(trace));

    (cost, traces)
}

/// Evaluates every feasible mode for the request and returns them ordered by emissions.
pub fn compare_modes(request: &DeliveryRequest, context: &Context) -> Vec<(TransportMode, DecisionCost)> {
    let mut results = context
        .feasible_modes()
        .into_iter()
        .map(|mode| (mode, evaluate(mode, request, context)))
        .collect::<Vec<_>>();

    results.sort_by(|(_, a), (_, b)| compare_floats(a.co2, b.co2).then_with(|| compare_floats(a.cost, b.cost)));

    results
}

fn apply_rules<F>(mode: TransportMode, request: &DeliveryRequest, context: &Context, mut on_rule: F) -> DecisionCost
where
    F: FnMut(RuleTrace),
{
    debug_assert!(context.is_feasible(mode), "mode {mode} is not feasible in context");

    let base_co2 = emission_factor(mode);
    let base_cost = cost_factor(mode);

    let mut co2 = base_co2;
    let mut cost = base_cost;
    let mut fire = |rule: Rule, co2: f64, cost: f64| on_rule(RuleTrace { rule, co2_factor: co2, cost_factor: cost });

    fire(Rule::BaseFactor, co2, cost);

    let destination_multiplier = zone_multiplier(context.destination_zone);
    co2 *= destination_multiplier;
    cost *= destination_multiplier;
    fire(Rule::DestinationZone, co2, cost);

    if context.is_zone_crossing() {
        let spread = (zone_multiplier(context.origin_zone) - destination_multiplier).abs() / 2.;
        co2 += base_co2 * spread;
        cost += base_cost * spread;
        fire(Rule::ZoneCrossing, co2, cost);
    }

    let load_factor = request.cargo_tonnes / context.capacity(mode);
    if let Some(penalty) = load_penalty(load_factor) {
        co2 *= penalty;
        cost *= penalty;
        fire(Rule::LoadFactor, co2, cost);
    }

    let cargo_multiplier = cargo_multiplier(request.cargo_type);
    co2 *= cargo_multiplier;
    cost *= cargo_multiplier;
    fire(Rule::CargoType, co2, cost);

    if request.return_trip && load_factor < EMPTY_RETURN_LOAD_THRESHOLD {
        co2 += base_co2 * EMPTY_RETURN_SHARE;
        fire(Rule::EmptyReturn, co2, cost);
    }

    if mode == TransportMode::Train && context.distance_km > LONG_HAUL_DISTANCE_KM {
        co2 *= LONG_HAUL_RAIL_BONUS;
        fire(Rule::LongHaulRail, co2, cost);
    }

    if context.destination_zone == Zone::South && context.distance_km > EXTREME_SOUTH_DISTANCE_KM {
        co2 *= EXTREME_SOUTH_PENALTY;
        fire(Rule::ExtremeSouth, co2, cost);
    }

    if request.is_urgent() && mode.requires_rail() {
        cost *= URGENT_RAIL_SURCHARGE;
        fire(Rule::UrgentRail, co2, cost);
    }

    let volume = context.distance_km * request.cargo_tonnes;

    DecisionCost { cost: cost * volume + handling_cost(mode), co2: co2 * volume }
}

/// Returns a multiplicative penalty for a partially loaded vehicle. Moderate and severe
/// penalties compose; a load factor equal to a threshold is not penalized by it.
fn load_penalty(load_factor: f64) -> Option<f64> {
    match load_factor {
        lf if lf < SEVERE_LOAD_THRESHOLD => Some(MODERATE_LOAD_PENALTY * SEVERE_LOAD_PENALTY),
        lf if lf < MODERATE_LOAD_THRESHOLD => Some(MODERATE_LOAD_PENALTY),
        _ => None,
    }
}

/// Returns an efficiency score in percent for given emissions of the request: 100 matches long
/// haul rail, 0 matches an almost empty light truck in the south. The score is clamped to `[0, 100]`.
pub fn efficiency_score(co2: f64, request: &DeliveryRequest, context: &Context) -> f64 {
    let volume = context.distance_km * request.cargo_tonnes;
    let best = emission_factor(TransportMode::Train) * LONG_HAUL_RAIL_BONUS * volume;
    let worst = emission_factor(TransportMode::TruckSmall)
        * zone_multiplier(Zone::South)
        * MODERATE_LOAD_PENALTY
        * SEVERE_LOAD_PENALTY
        * volume;

    if worst > best {
        (100. * (1. - (co2 - best) / (worst - best))).clamp(0., 100.)
    } else {
        100.
    }
}
