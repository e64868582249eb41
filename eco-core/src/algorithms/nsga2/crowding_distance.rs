#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/crowding_distance_test.rs"]
mod crowding_distance_test;

use super::{Front, MultiObjective};
use crate::utils::compare_floats;

/// A solution with its front rank and crowding distance assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignedCrowdingDistance {
    /// An index of the solution in the ranked collection.
    pub index: usize,
    /// A rank of the front the solution belongs to.
    pub rank: usize,
    /// A crowding distance within the front, higher is better.
    pub crowding_distance: f64,
}

/// Keeps a spread of objective values within a front.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveStat {
    /// The difference between the largest and the smallest objective values.
    pub spread: f64,
}

/// Assigns a crowding distance to each solution in `front`. Results are ordered by solution index.
///
/// For each objective, members are sorted by the objective value, the extremes get infinite
/// distance and every inner member gets the gap between its neighbours divided by the objective
/// spread. When spread is zero, the objective adds nothing to inner members.
pub fn assign_crowding_distance<S, O>(
    front: &Front<'_, S>,
    multi_objective: &O,
) -> (Vec<AssignedCrowdingDistance>, Vec<ObjectiveStat>)
where
    O: MultiObjective<Solution = S> + ?Sized,
{
    let rank = front.rank();
    let mut assigned: Vec<_> = front
        .iter()
        .map(|(solution, index)| (solution, AssignedCrowdingDistance { index, rank, crowding_distance: 0. }))
        .collect();

    if assigned.is_empty() {
        return (vec![], vec![]);
    }

    let objective_stat = (0..multi_objective.size())
        .map(|objective_idx| {
            let value = |solution: &S| multi_objective.fitness(solution, objective_idx);

            // stable sort keeps index order between equal values
            assigned.sort_by(|(a, a_assigned), (b, b_assigned)| {
                compare_floats(value(*a), value(*b)).then(a_assigned.index.cmp(&b_assigned.index))
            });

            let last = assigned.len() - 1;
            let spread = (value(assigned[last].0) - value(assigned[0].0)).abs();

            assigned[0].1.crowding_distance = f64::INFINITY;
            assigned[last].1.crowding_distance = f64::INFINITY;

            if spread > 0. {
                for i in 1..last {
                    let gap = (value(assigned[i + 1].0) - value(assigned[i - 1].0)).abs();
                    assigned[i].1.crowding_distance += gap / spread;
                }
            }

            ObjectiveStat { spread }
        })
        .collect();

    let mut assigned = assigned.into_iter().map(|(_, assigned)| assigned).collect::<Vec<_>>();
    assigned.sort_by_key(|assigned| assigned.index);

    (assigned, objective_stat)
}
