#[cfg(test)]
#[path = "../../tests/unit/solver/engine_test.rs"]
mod engine_test;

use super::*;
use crate::algorithms::nsga2::{pareto_front_indices, select_and_rank};
use crate::models::Problem;
use crate::utils::{compare_floats, maybe_parallel_collect, Environment, Random, SearchResult, Timer};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Initial population is created and ranked, no generation has run yet.
    Initialized,
    /// A generation with given number was completed and termination was not yet detected.
    Running {
        /// Last completed generation, zero based.
        generation: usize,
    },
    /// The search is finished.
    Completed,
}

/// Runs the NSGA-II generational loop on a problem.
pub struct Nsga2Engine {
    problem: Arc<Problem>,
    config: SearchConfig,
    environment: Environment,
    termination: CompositeTermination,
    telemetry: Telemetry,
    population: Vec<Individual>,
    rankings: Vec<Ranking>,
    state: EngineState,
    generations: usize,
    evaluations: usize,
}

impl Nsga2Engine {
    /// Creates a new engine: validates config, then creates, evaluates and ranks initial population.
    pub fn new(problem: Arc<Problem>, config: SearchConfig, environment: Environment) -> SearchResult<Self> {
        config.validate()?;

        let mut termination = CompositeTermination::new(vec![Box::new(MaxGeneration::new(config.generations))]);
        if let Some(max_time) = config.max_time {
            termination.add(Box::new(MaxTime::new(max_time)));
        }

        let telemetry_mode = match config.log_every {
            Some(log_every) => TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_every },
            None => TelemetryMode::None,
        };
        let mut telemetry = Telemetry::new(telemetry_mode);

        let is_parallel = config.is_parallel && environment.parallelism.is_parallel();
        let initial_time = Timer::start();

        let random: &dyn Random = environment.random.as_ref();
        let mut population =
            (0..config.population_size).map(|_| create_individual(problem.as_ref(), random)).collect::<Vec<_>>();
        let evaluations = evaluate_population(problem.as_ref(), population.as_mut_slice(), is_parallel);
        let (population, rankings) = rank_population(population, config.population_size);

        telemetry.on_initial(population.as_slice(), initial_time);

        Ok(Self {
            problem,
            config,
            environment,
            termination,
            telemetry,
            population,
            rankings,
            state: EngineState::Initialized,
            generations: 0,
            evaluations,
        })
    }

    /// Adds cancellation flag which is checked between generations.
    pub fn with_interruption(mut self, flag: Arc<AtomicBool>) -> Self {
        self.termination.add(Box::new(Interruption::new(flag)));
        self
    }

    /// Returns current state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns current population.
    pub fn population(&self) -> &[Individual] {
        self.population.as_slice()
    }

    /// Returns rank and crowding distance of each individual in the current population.
    pub fn rankings(&self) -> &[Ranking] {
        self.rankings.as_slice()
    }

    /// Returns amount of fitness evaluations done so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Runs one generation unless termination is detected. Returns false when the engine is completed.
    pub fn step(&mut self) -> bool {
        if self.state == EngineState::Completed {
            return false;
        }

        if self.termination.is_termination(self.generations) {
            self.complete();
            return false;
        }

        let generation_time = Timer::start();
        let generation = self.generations;

        self.run_generation();

        self.generations += 1;
        self.state = EngineState::Running { generation };

        let estimate = self.termination.estimate(self.generations);
        self.telemetry.on_generation(generation, self.population.as_slice(), estimate, generation_time);

        true
    }

    /// Runs the search until termination and returns its outcome.
    pub fn run(mut self) -> SearchOutcome {
        while self.step() {}

        self.into_outcome()
    }

    /// Returns outcome built from the last completed generation.
    pub fn into_outcome(mut self) -> SearchOutcome {
        if self.state != EngineState::Completed {
            self.complete();
        }

        let pareto_front = get_pareto_front(self.population.as_slice());
        let (final_min_cost, final_min_co2) = get_population_minimums(self.population.as_slice());

        SearchOutcome {
            pareto_front,
            statistics: Statistics {
                generations: self.generations,
                population_size: self.config.population_size,
                final_min_cost,
                final_min_co2,
                evaluations: self.evaluations,
            },
            logbook: self.telemetry.take_logbook(),
        }
    }

    fn complete(&mut self) {
        self.state = EngineState::Completed;

        let front_size = pareto_front_indices(self.population.as_slice(), &CostEmissionObjective).len();
        self.telemetry.on_result(self.generations, front_size, self.evaluations);
    }

    fn run_generation(&mut self) {
        let population_size = self.config.population_size;
        let is_parallel = self.config.is_parallel && self.environment.parallelism.is_parallel();
        let random: &dyn Random = self.environment.random.as_ref();

        let parents = select_parents(self.rankings.as_slice(), population_size, random);
        let mut offspring =
            create_offspring(self.problem.as_ref(), self.population.as_slice(), parents.as_slice(), &self.config, random);

        self.evaluations += evaluate_population(self.problem.as_ref(), offspring.as_mut_slice(), is_parallel);

        let mut merged = std::mem::take(&mut self.population);
        merged.extend(offspring);

        let (population, rankings) = rank_population(merged, population_size);
        self.population = population;
        self.rankings = rankings;
    }
}

/// Creates offspring from selected parents taken pairwise. For odd amount the last parent is
/// copied and mutated alone, so offspring size always equals amount of parents.
fn create_offspring(
    problem: &Problem,
    population: &[Individual],
    parents: &[usize],
    config: &SearchConfig,
    random: &dyn Random,
) -> Vec<Individual> {
    let mut offspring = Vec::with_capacity(parents.len());

    parents.chunks(2).for_each(|pair| {
        let children = match *pair {
            [first, second] => {
                let (first, second) = (&population[first], &population[second]);
                if random.is_hit(config.crossover_rate) {
                    let (a, b) = crossover(first, second, config.crossover, random);
                    vec![a, b]
                } else {
                    vec![first.clone(), second.clone()]
                }
            }
            _ => pair.iter().map(|&idx| population[idx].clone()).collect(),
        };

        offspring.extend(children.into_iter().map(|mut child| {
            mutate(&mut child, problem, config.mutation_rate, random);
            child
        }));
    });

    offspring
}

/// Evaluates individuals without fitness. Returns amount of evaluations.
fn evaluate_population(problem: &Problem, population: &mut [Individual], is_parallel: bool) -> usize {
    let fitness = maybe_parallel_collect(population, is_parallel, |individual| match individual.fitness() {
        Some(_) => None,
        None => Some(calculate_fitness(problem, individual.genes())),
    });

    population
        .iter_mut()
        .zip(fitness)
        .filter_map(|(individual, fitness)| fitness.map(|fitness| individual.set_fitness(fitness)))
        .count()
}

/// Selects `n` best individuals and reorders them by rank keeping their rankings aligned.
fn rank_population(individuals: Vec<Individual>, n: usize) -> (Vec<Individual>, Vec<Ranking>) {
    let assigned = select_and_rank(individuals.as_slice(), n, &CostEmissionObjective);
    let mut slots = individuals.into_iter().map(Some).collect::<Vec<_>>();

    assigned
        .into_iter()
        .filter_map(|assigned| {
            slots[assigned.index].take().map(|individual| {
                (individual, Ranking { rank: assigned.rank, crowding_distance: assigned.crowding_distance })
            })
        })
        .unzip()
}

/// Returns non-dominated individuals sorted by cost, emissions and population index.
fn get_pareto_front(population: &[Individual]) -> Vec<ParetoSolution> {
    let mut front = pareto_front_indices(population, &CostEmissionObjective)
        .into_iter()
        .filter_map(|index| {
            let individual = &population[index];
            individual.fitness().map(|fitness| ParetoSolution {
                index,
                cost: fitness.cost,
                co2: fitness.co2,
                decisions: individual
                    .genes()
                    .iter()
                    .enumerate()
                    .map(|(request_index, &mode)| Decision { request_index, mode })
                    .collect(),
            })
        })
        .collect::<Vec<_>>();

    front.sort_by(|a, b| compare_floats(a.cost, b.cost).then(compare_floats(a.co2, b.co2)).then(a.index.cmp(&b.index)));

    front
}
