//! Implementation of the [Fast Non-Dominated Sort Algorithm][1] as used by NSGA-II.
//! Time complexity is `O(K * N^2)`, where `K` is the number of objectives and `N` the number of solutions.
//!
//! Non-dominated sorting groups solutions into non-dominated Pareto fronts: F0 holds solutions
//! dominated by nothing, F1 solutions dominated only by members of F0, and so on.
//!
//! [1]: https://www.iitk.ac.in/kangal/Deb_NSGA-II.pdf "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II)"

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::MultiObjective;
use std::cmp::Ordering;

type SolutionIdx = usize;

/// A Pareto front of some rank. Indices inside the front are kept in ascending order.
#[derive(Debug, Clone)]
pub struct Front<'s, S: 's> {
    dominated_solutions: Vec<Vec<SolutionIdx>>,
    domination_count: Vec<usize>,
    current_front: Vec<SolutionIdx>,
    rank: usize,
    solutions: &'s [S],
}

impl<'s, S: 's> Front<'s, S> {
    /// Returns rank of the front, zero for the Pareto front.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns indices of solutions in the front.
    pub fn indices(&self) -> &[SolutionIdx] {
        self.current_front.as_slice()
    }

    /// Iterates over the solutions of the front together with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (&'s S, SolutionIdx)> + '_ {
        let solutions = self.solutions;
        self.current_front.iter().map(move |&idx| (&solutions[idx], idx))
    }

    /// Returns amount of solutions in the front.
    pub fn len(&self) -> usize {
        self.current_front.len()
    }

    /// Returns true if there are no solutions in the front.
    pub fn is_empty(&self) -> bool {
        self.current_front.is_empty()
    }

    /// Peels off the current front and returns the next one.
    pub fn next_front(self) -> Self {
        let Front { dominated_solutions, mut domination_count, current_front, rank, solutions } = self;

        let mut next_front = Vec::new();
        for &p_i in current_front.iter() {
            for &q_i in dominated_solutions[p_i].iter() {
                debug_assert!(domination_count[q_i] > 0);

                domination_count[q_i] -= 1;
                if domination_count[q_i] == 0 {
                    // q_i is not dominated by any remaining solution: it belongs to the next front
                    next_front.push(q_i);
                }
            }
        }
        next_front.sort_unstable();

        Self { dominated_solutions, domination_count, current_front: next_front, rank: rank + 1, solutions }
    }
}

/// Performs a non-dominated sort of `solutions`. Returns the first Pareto front.
pub fn non_dominated_sort<'s, S, O>(solutions: &'s [S], objective: &O) -> Front<'s, S>
where
    O: MultiObjective<Solution = S> + ?Sized,
{
    // the indices of the solutions that are dominated by this solution
    let mut dominated_solutions: Vec<Vec<SolutionIdx>> = solutions.iter().map(|_| Vec::new()).collect();

    // the number of solutions that dominate the solution
    let mut domination_count: Vec<usize> = vec![0; solutions.len()];

    // each pair is compared once: O(n*n / 2)
    for (p_i, p) in solutions.iter().enumerate() {
        for (q_i, q) in solutions.iter().enumerate().skip(p_i + 1) {
            match objective.total_order(p, q) {
                Ordering::Less => {
                    dominated_solutions[p_i].push(q_i);
                    domination_count[q_i] += 1;
                }
                Ordering::Greater => {
                    dominated_solutions[q_i].push(p_i);
                    domination_count[p_i] += 1;
                }
                Ordering::Equal => {}
            }
        }
    }

    let current_front = domination_count.iter().enumerate().filter(|(_, count)| **count == 0).map(|(idx, _)| idx).collect();

    Front { dominated_solutions, domination_count, current_front, rank: 0, solutions }
}

/// Returns indices of solutions which belong to the Pareto front (rank zero).
pub fn pareto_front_indices<S, O>(solutions: &[S], objective: &O) -> Vec<usize>
where
    O: MultiObjective<Solution = S> + ?Sized,
{
    non_dominated_sort(solutions, objective).indices().to_vec()
}
