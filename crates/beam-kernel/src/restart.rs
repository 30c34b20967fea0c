//! Stagnation detection and restart.

use rand::Rng;

use crate::space::SearchSpace;

/// Outcome of checking a freshly selected beam against the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum BeamUpdate<S> {
    /// The selection differs from the previous beam and is adopted as is.
    Advanced(Vec<S>),
    /// The selection was stagnant; these are freshly drawn states.
    Restarted(Vec<S>),
}

impl<S> BeamUpdate<S> {
    pub fn is_restart(&self) -> bool {
        matches!(self, BeamUpdate::Restarted(_))
    }

    pub fn into_beam(self) -> Vec<S> {
        match self {
            BeamUpdate::Advanced(beam) | BeamUpdate::Restarted(beam) => beam,
        }
    }
}

/// Replaces a beam that stopped moving with `beam_width` random states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartPolicy {
    beam_width: usize,
}

impl RestartPolicy {
    pub fn new(beam_width: usize) -> Self {
        Self { beam_width }
    }

    /// Decide which beam the next iteration starts from.
    ///
    /// `selected` is stagnant when it equals `previous` element by element and
    /// in order. An empty selection counts as stagnant too, so the beam never
    /// runs dry.
    pub fn apply<P, R>(
        &self,
        space: &P,
        previous: &[P::State],
        selected: Vec<P::State>,
        rng: &mut R,
    ) -> BeamUpdate<P::State>
    where
        P: SearchSpace,
        R: Rng + ?Sized,
    {
        if selected.is_empty() || selected.as_slice() == previous {
            BeamUpdate::Restarted(random_beam(space, self.beam_width, rng))
        } else {
            BeamUpdate::Advanced(selected)
        }
    }
}

/// Draw `width` independent states from the space's initial distribution.
pub fn random_beam<P, R>(space: &P, width: usize, rng: &mut R) -> Vec<P::State>
where
    P: SearchSpace,
    R: Rng + ?Sized,
{
    (0..width).map(|_| space.random_state(rng)).collect()
}
