//! SearchSpace trait: the interface between the kernel and a concrete problem.

use std::fmt::Debug;

use rand::Rng;

/// A problem the beam search can descend.
///
/// Examples:
/// - N-Queens (state = row per column, cost = attacking pairs)
/// - Latin squares (state = grid, cost = duplicate count)
///
/// The kernel is problem-agnostic; everything domain-specific lives in the
/// `SearchSpace` implementation. Implementations must be:
/// - Pure: `cost` and `successors` never depend on hidden state
/// - Deterministic: `successors` enumerates in a fixed order, so ties in
///   selection resolve the same way on every run
pub trait SearchSpace {
    /// A candidate configuration. Treated as an immutable value.
    type State: Clone + PartialEq + Debug;

    /// Draw a fresh state from the initial distribution.
    ///
    /// All randomness must come from `rng`; the controller relies on this
    /// for replay under a fixed seed.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// Cost to minimize. Zero means the state is a goal.
    fn cost(&self, state: &Self::State) -> usize;

    /// Every neighbor reachable in one move, none equal to `state`.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Check if the state has reached the goal.
    fn is_goal(&self, state: &Self::State) -> bool {
        self.cost(state) == 0
    }
}
