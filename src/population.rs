//! Functions and structs related to scoring, selecting from and breeding a whole generation.

use crate::{individual::Individual, random::roll, reproduce::reproduce};
use log::warn;
use rand::RngCore;

/// One generation of [Individual]s. Order is stable and meaningful: cumulative fitness is
/// accumulated in this order, and selection scans it front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    pub fn new(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// `size` unscored individuals of `len` random printable genes each
    pub fn random(size: usize, len: usize, rng: &mut impl RngCore) -> Self {
        Self::new((0..size).map(|_| Individual::random(len, rng)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn total_fitness(&self) -> f64 {
        self.members.iter().map(|ind| ind.fitness).sum()
    }

    /// Score every member against `target`, then [normalize](Population::normalize).
    /// Returns the total fitness of the generation.
    pub fn evaluate(&mut self, target: &[u8]) -> f64 {
        for ind in self.members.iter_mut() {
            ind.evaluate(target);
        }
        self.normalize();
        self.total_fitness()
    }

    /// Turn raw fitness into selection probabilities. Each member's normalized fitness is its
    /// share of the total, and its cumulative fitness the running sum of those shares in
    /// population order. A generation with no usable total (zero or non-finite) falls back to
    /// every member having an equal share.
    pub fn normalize(&mut self) {
        let total = self.total_fitness();
        let uniform = !(total.is_finite() && total > 0.);
        if uniform && !self.is_empty() {
            warn!(
                "total fitness {total} cannot be normalized, selecting uniformly from {} members",
                self.len()
            );
        }

        let share = 1. / self.len() as f64;
        let mut running = 0.;
        for ind in self.members.iter_mut() {
            ind.normalized = if uniform { share } else { ind.fitness / total };
            running += ind.normalized;
            ind.cumulative = running;
        }
    }

    /// The member with the greatest normalized fitness. Ties go to whoever comes first.
    pub fn fittest(&self) -> Option<&Individual> {
        self.members.iter().fold(None, |best, ind| match best {
            Some(best) if best.normalized >= ind.normalized => Some(best),
            _ => Some(ind),
        })
    }

    /// Roulette-wheel selection. Rolls once and returns the first member whose cumulative
    /// fitness reaches the roll, or the last member if rounding left the wheel short of 1.
    pub fn select(&self, rng: &mut impl RngCore) -> Option<&Individual> {
        let dice = roll(rng);
        self.members
            .iter()
            .find(|ind| ind.cumulative >= dice)
            .or_else(|| self.members.last())
    }

    /// Breed a successor generation of the same size. Both parents of every child are
    /// selected independently and may be the same member. Also reports whether any child is
    /// an exact copy of `target`.
    pub fn breed(
        &self,
        target: &[u8],
        mutation_rate: f64,
        rng: &mut impl RngCore,
    ) -> (Population, bool) {
        let mut found = false;
        let mut children = Vec::with_capacity(self.len());
        for _ in 0..self.len() {
            let (Some(l), Some(r)) = (self.select(rng), self.select(rng)) else {
                break;
            };
            let child = reproduce(l, r, mutation_rate, rng);
            found |= child.matches(target);
            children.push(child);
        }

        (Population::new(children), found)
    }
}
