use serde::{Deserialize, Serialize};
use serde_json::Error;
use std::io::{BufReader, BufWriter, Read, Write};

/// A transport mode assigned to a request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Index of the request in the input order.
    pub request_index: usize,
    /// Transport mode name.
    pub mode: String,
}

/// A point of the pareto front.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParetoPoint {
    /// Total cost in DZD, rounded to units.
    pub total_cost_dzd: f64,
    /// Total emissions in kg, rounded to two decimals.
    pub total_co2_kg: f64,
    /// Decisions in request order.
    pub decisions: Vec<Decision>,
}

/// Aggregated usage of a transport mode.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModeSummary {
    /// Transport mode name.
    pub mode: String,
    /// Amount of requests.
    pub requests: usize,
    /// Transported tonnes.
    pub tonnes: f64,
    /// Cost in DZD.
    pub total_cost_dzd: f64,
    /// Emissions in kg.
    pub total_co2_kg: f64,
}

/// A recommended pareto point.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSolution {
    /// Total cost in DZD, rounded to units.
    pub total_cost_dzd: f64,
    /// Total emissions in kg, rounded to two decimals.
    pub total_co2_kg: f64,
    /// Weighted score of normalized objectives.
    pub score: f64,
    /// Mean efficiency score of the decisions in `[0, 100]`.
    pub efficiency: f64,
    /// Decisions in request order.
    pub decisions: Vec<Decision>,
    /// Usage per transport mode.
    pub mode_usage: Vec<ModeSummary>,
}

/// A logbook record of one generation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogbookRecord {
    /// Generation number, zero based.
    pub generation: usize,
    /// Minimum total cost in the population.
    pub min_cost: f64,
    /// Minimum total emissions in the population.
    pub min_co2: f64,
}

/// Search statistics.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// Completed generations.
    pub generations: usize,
    /// Population size.
    pub population_size: usize,
    /// Size of the pareto front.
    pub front_size: usize,
    /// Minimum total cost in the final population.
    pub final_min_cost: f64,
    /// Minimum total emissions in the final population.
    pub final_min_co2: f64,
    /// Amount of fitness evaluations.
    pub evaluations: usize,
}

/// A search result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Pareto front sorted by cost.
    pub pareto_front: Vec<ParetoPoint>,
    /// Recommended point.
    pub recommended_solution: RecommendedSolution,
    /// Per generation records.
    pub logbook: Vec<LogbookRecord>,
    /// Search statistics.
    pub statistics: Statistic,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
