//! Variation operators: random creation, crossover and mutation.

#[cfg(test)]
#[path = "../../tests/unit/solver/operators_test.rs"]
mod operators_test;

use super::{CrossoverStrategy, Individual};
use crate::models::{Problem, TransportMode};
use crate::utils::Random;

/// Creates an individual choosing each gene uniformly from the feasible modes of its request.
pub fn create_individual(problem: &Problem, random: &dyn Random) -> Individual {
    let genes = (0..problem.size())
        .map(|idx| {
            let modes = problem.feasible_modes(idx);
            modes[random.uniform_index(modes.len())]
        })
        .collect();

    Individual::new(genes)
}

/// Produces two offspring from two parents. Every offspring gene comes from one of the parents
/// at the same position. Offspring have no fitness unless they are equal to one of the parents.
pub fn crossover(
    first: &Individual,
    second: &Individual,
    strategy: CrossoverStrategy,
    random: &dyn Random,
) -> (Individual, Individual) {
    debug_assert_eq!(first.len(), second.len());

    let (left, right) = (first.genes(), second.genes());

    let (a, b): (Vec<_>, Vec<_>) = match strategy {
        CrossoverStrategy::Uniform => left
            .iter()
            .zip(right.iter())
            .map(|(&l, &r)| if random.is_head_not_tails() { (l, r) } else { (r, l) })
            .unzip(),
        CrossoverStrategy::SinglePoint if left.len() > 1 => {
            let cut = random.uniform_int(1, left.len() as i32 - 1) as usize;

            let a = left[..cut].iter().chain(right[cut..].iter()).cloned().collect();
            let b = right[..cut].iter().chain(left[cut..].iter()).cloned().collect();

            (a, b)
        }
        CrossoverStrategy::SinglePoint => (left.to_vec(), right.to_vec()),
    };

    (inherit_fitness(a, first, second), inherit_fitness(b, first, second))
}

/// Mutates each gene with given probability replacing it with a different feasible mode, if the
/// request has one. Returns amount of changed genes.
pub fn mutate(individual: &mut Individual, problem: &Problem, mutation_rate: f64, random: &dyn Random) -> usize {
    if mutation_rate <= 0. {
        return 0;
    }

    (0..individual.len()).fold(0, |changed, idx| {
        if !random.is_hit(mutation_rate) {
            return changed;
        }

        let current = individual.genes()[idx];
        let alternatives = problem.feasible_modes(idx).iter().filter(|&&mode| mode != current).collect::<Vec<_>>();

        if alternatives.is_empty() {
            return changed;
        }

        individual.set_gene(idx, *alternatives[random.uniform_index(alternatives.len())]);

        changed + 1
    })
}

fn inherit_fitness(genes: Vec<TransportMode>, first: &Individual, second: &Individual) -> Individual {
    [first, second]
        .into_iter()
        .find(|parent| parent.fitness().is_some() && parent.genes() == genes.as_slice())
        .cloned()
        .unwrap_or_else(|| Individual::new(genes))
}
