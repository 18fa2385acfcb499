//! Combining two parents into a child.

use crate::{
    individual::Individual,
    random::{gene, roll},
};
use rand::RngCore;

/// Build a child gene by gene. Each position rolls once: below `mutation_rate` the gene is a
/// fresh random printable, otherwise the remaining probability is split evenly between taking
/// `l`'s gene and taking `r`'s gene.
///
/// `mutation_rate` must lie in [0, 1]; settings reject anything else before a run starts.
pub fn crossover(l: &[u8], r: &[u8], mutation_rate: f64, rng: &mut impl RngCore) -> Vec<u8> {
    debug_assert_eq!(l.len(), r.len(), "parents differ in length");
    debug_assert!((0. ..=1.).contains(&mutation_rate));

    let pick_l = mutation_rate + (1. - mutation_rate) / 2.;
    l.iter()
        .zip(r)
        .map(|(l, r)| {
            let dice = roll(rng);
            if dice < mutation_rate {
                gene(rng)
            } else if dice < pick_l {
                *l
            } else {
                *r
            }
        })
        .collect()
}

/// An unscored child of `l` and `r`
pub fn reproduce(
    l: &Individual,
    r: &Individual,
    mutation_rate: f64,
    rng: &mut impl RngCore,
) -> Individual {
    Individual::new(crossover(&l.genes, &r.genes, mutation_rate, rng))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{constants::MONKE_GENE_RANGE, random::WyRng, rng_t};
    use rand::{rngs::StdRng, SeedableRng};

    rng_t!(no_mutation_inherits[R: WyRng | StdRng]() {
        let mut rng = R::seed_from_u64(1);
        let l = Individual::new(b"AAAAAAAAAAAAAAAAAAAA".to_vec());
        let r = Individual::new(b"zzzzzzzzzzzzzzzzzzzz".to_vec());
        for _ in 0..1000 {
            let child = reproduce(&l, &r, 0., &mut rng);
            assert_eq!(l.len(), child.len());
            assert!(child.genes.iter().all(|g| *g == b'A' || *g == b'z'));
        }
    });

    rng_t!(no_mutation_per_position[R: WyRng | StdRng]() {
        let mut rng = R::seed_from_u64(2);
        let l = b"The quick brown fox";
        let r = b"jumps over the lazy";
        for _ in 0..1000 {
            let child = crossover(l, r, 0., &mut rng);
            for (idx, g) in child.iter().enumerate() {
                assert!(*g == l[idx] || *g == r[idx], "{g} at {idx} from neither parent");
            }
        }
    });

    rng_t!(full_mutation_printable[R: WyRng | StdRng]() {
        let mut rng = R::seed_from_u64(3);
        // parents well outside the printable range, so any inherited gene would show
        let l = [0u8; 32];
        let r = [255u8; 32];
        for _ in 0..1000 {
            let child = crossover(&l, &r, 1., &mut rng);
            assert!(child.iter().all(|g| MONKE_GENE_RANGE.contains(g)));
        }
    });

    #[test]
    fn test_parent_split_even() {
        let mut rng = WyRng::seeded(4);
        let l = [b'l'; 100];
        let r = [b'r'; 100];
        let mut from_l = 0usize;
        let trials = 1000;
        for _ in 0..trials {
            from_l += crossover(&l, &r, 0., &mut rng)
                .iter()
                .filter(|g| **g == b'l')
                .count();
        }
        let share = from_l as f64 / (trials * 100) as f64;
        assert!((share - 0.5).abs() < 0.01, "left parent share {share}");
    }

    #[test]
    fn test_mutation_share() {
        let mut rng = WyRng::seeded(5);
        // 0 and 1 are not printable, so every printable gene is a mutation
        let l = [0u8; 100];
        let r = [1u8; 100];
        let rate = 0.25;
        let trials = 1000;
        let mut mutated = 0usize;
        for _ in 0..trials {
            mutated += crossover(&l, &r, rate, &mut rng)
                .iter()
                .filter(|g| **g > 1)
                .count();
        }
        let share = mutated as f64 / (trials * 100) as f64;
        assert!((share - rate).abs() < 0.01, "mutation share {share}");
    }

    #[test]
    fn test_child_unscored() {
        let mut rng = WyRng::seeded(6);
        let mut l = Individual::new(b"abc".to_vec());
        l.evaluate(b"abc");
        let child = reproduce(&l, &l, 0., &mut rng);
        assert_eq!(l.genes, child.genes);
        assert_eq!(0., child.fitness);
    }
}
