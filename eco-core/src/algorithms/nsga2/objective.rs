use std::cmp::Ordering;

/// A multi objective defines a set of minimized objective values on solutions.
pub trait MultiObjective {
    /// The solution value type that we define the objective on.
    type Solution;

    /// Returns amount of objectives.
    fn size(&self) -> usize;

    /// Returns value of objective with index `idx` for the `solution`. Lower is better.
    fn fitness(&self, solution: &Self::Solution, idx: usize) -> f64;

    /// Returns dominance order between two solutions: `Less` if `a` dominates `b`, `Greater` if
    /// `b` dominates `a`, `Equal` when neither dominates.
    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        dominance_order(a, b, self)
    }
}

/// Calculates dominance order of two solutions: one dominates the other iff it is not worse in
/// any objective and strictly better in at least one.
pub fn dominance_order<S, O>(a: &S, b: &S, objective: &O) -> Ordering
where
    O: MultiObjective<Solution = S> + ?Sized,
{
    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for idx in 0..objective.size() {
        let (left, right) = (objective.fitness(a, idx), objective.fitness(b, idx));

        if left < right {
            less_cnt += 1;
        } else if left > right {
            greater_cnt += 1;
        }
    }

    match (less_cnt > 0, greater_cnt > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Returns true if `a` dominates `b`.
pub fn dominates<S, O>(a: &S, b: &S, objective: &O) -> bool
where
    O: MultiObjective<Solution = S> + ?Sized,
{
    dominance_order(a, b, objective) == Ordering::Less
}
