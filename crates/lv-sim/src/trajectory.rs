//! A completed, time-ordered run.

use std::ops::Index;

use lv_core::ParticleState;

/// The `N + 1` states of one run, in simulation-time order.
///
/// Read-only once built; produced by
/// [`LangevinIntegrator::collect_trajectory`][crate::LangevinIntegrator::collect_trajectory]
/// or by collecting the integrator directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    states: Vec<ParticleState>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[ParticleState] {
        &self.states
    }

    pub fn first(&self) -> Option<&ParticleState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&ParticleState> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticleState> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<ParticleState> {
        self.states
    }
}

impl FromIterator<ParticleState> for Trajectory {
    fn from_iter<I: IntoIterator<Item = ParticleState>>(iter: I) -> Self {
        Self { states: iter.into_iter().collect() }
    }
}

impl Index<usize> for Trajectory {
    type Output = ParticleState;

    fn index(&self, i: usize) -> &ParticleState {
        &self.states[i]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a ParticleState;
    type IntoIter = std::slice::Iter<'a, ParticleState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
