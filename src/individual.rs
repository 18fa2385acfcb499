//! A single candidate phrase and the scores derived from it each generation.

use crate::{
    constants::{MONKE_FITNESS_INCREASE, MONKE_FITNESS_SCALE, MONKE_GENE_FITNESS_MAX},
    random::gene,
};
use core::fmt;
use rand::RngCore;

/// Score `genes` against `target`. Every position earns up to [MONKE_GENE_FITNESS_MAX], less a
/// penalty that grows with the byte distance between the gene and its target. Higher is better.
pub fn score(genes: &[u8], target: &[u8]) -> f64 {
    debug_assert_eq!(genes.len(), target.len(), "genes and target differ in length");
    genes
        .iter()
        .zip(target)
        .map(|(g, t)| {
            let delta = g.abs_diff(*t) as f64;
            MONKE_FITNESS_INCREASE * (MONKE_FITNESS_SCALE - delta / MONKE_FITNESS_SCALE)
        })
        .sum()
}

/// Best score a phrase of `len` genes can reach
#[inline]
pub fn score_max(len: usize) -> f64 {
    len as f64 * MONKE_GENE_FITNESS_MAX
}

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genes: Vec<u8>,
    pub fitness: f64,
    /// share of the generation's total fitness
    pub normalized: f64,
    /// running sum of `normalized` up to and including this individual
    pub cumulative: f64,
}

impl Individual {
    /// An unscored individual carrying `genes`
    pub fn new(genes: Vec<u8>) -> Self {
        Self {
            genes,
            fitness: 0.,
            normalized: 0.,
            cumulative: 0.,
        }
    }

    /// An unscored individual of `len` uniformly random printable genes
    pub fn random(len: usize, rng: &mut impl RngCore) -> Self {
        Self::new((0..len).map(|_| gene(rng)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    #[inline]
    pub fn matches(&self, target: &[u8]) -> bool {
        self.genes == target
    }

    /// Rescore against `target`, returning the new fitness. Derived selection scores are left
    /// for the population to recompute.
    pub fn evaluate(&mut self, target: &[u8]) -> f64 {
        self.fitness = score(&self.genes, target);
        self.fitness
    }

    /// Genes as text. Bytes that are not valid utf-8 on their own are shown as replacements.
    pub fn phrase(&self) -> String {
        String::from_utf8_lossy(&self.genes).into_owned()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genes: {} | fitness: {:>8.1}", self.phrase(), self.fitness)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, constants::MONKE_GENE_RANGE, random::WyRng};

    #[test]
    fn test_score_exact() {
        assert_f64_approx!(score(b"abc", b"abc"), 3. * MONKE_GENE_FITNESS_MAX);
        assert_f64_approx!(score(b"abc", b"abc"), score_max(3));
        assert_f64_approx!(score(b"", b""), 0.);
    }

    #[test]
    fn test_score_distance() {
        // 'a' -> 'b' is one step, 'a' -> '~' is 29 steps
        assert_f64_approx!(score(b"a", b"b"), 9.5 * (95. - 1. / 95.));
        assert_f64_approx!(score(b"a", b"~"), 9.5 * (95. - 29. / 95.));
        assert!(score(b"a", b"b") > score(b"a", b"~"));
        assert!(score(b"abc", b"abd") > score(b"abc", b"xyz"));
    }

    #[test]
    fn test_score_symmetric() {
        let mut rng = WyRng::seeded(5);
        for _ in 0..1000 {
            let l = Individual::random(12, &mut rng);
            let r = Individual::random(12, &mut rng);
            assert_f64_approx!(score(&l.genes, &r.genes), score(&r.genes, &l.genes));
        }
    }

    #[test]
    fn test_score_positive_for_printable() {
        // the furthest two printable genes can be apart still scores above zero
        let lo = [*MONKE_GENE_RANGE.start()];
        let hi = [*MONKE_GENE_RANGE.end()];
        assert!(score(&lo, &hi) > 0.);
    }

    #[test]
    fn test_random_individual() {
        let mut rng = WyRng::seeded(9);
        for len in [0, 1, 17] {
            let ind = Individual::random(len, &mut rng);
            assert_eq!(len, ind.len());
            assert!(ind.genes.iter().all(|g| MONKE_GENE_RANGE.contains(g)));
            assert_eq!(0., ind.fitness);
        }
    }

    #[test]
    fn test_evaluate() {
        let mut ind = Individual::new(b"hello".to_vec());
        let fit = ind.evaluate(b"hello");
        assert_f64_approx!(fit, score_max(5));
        assert_f64_approx!(ind.fitness, fit);
        assert!(ind.matches(b"hello"));
        assert!(!ind.matches(b"hellp"));
    }

    #[test]
    fn test_display() {
        let mut ind = Individual::new(b"abc".to_vec());
        ind.evaluate(b"abc");
        assert_eq!("Genes: abc | fitness:   2707.5", ind.to_string());
    }
}
