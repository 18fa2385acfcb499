//! The generational loop: evaluate, report, breed, repeat until the target phrase appears.

use crate::{
    constants::{
        MONKE_DEFAULT_MUTATION_RATE, MONKE_DEFAULT_POPULATION, MONKE_GENE_RANGE,
        MONKE_REPORT_INTERVAL,
    },
    error::ConfigError,
    individual::Individual,
    population::Population,
    random::{default_rng, WyRng},
};
use log::{debug, info};
use rand::RngCore;
use std::time::{Duration, Instant};

/// Everything that shapes a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub target: String,
    pub population_size: usize,
    /// per-gene chance of a random replacement instead of inheritance
    pub mutation_rate: f64,
    /// whether progress is reported while the run is underway
    pub printing: bool,
    /// `None` seeds from the clock
    pub seed: Option<u64>,
    /// `None` runs until the target is found, however long that takes
    pub max_generations: Option<usize>,
}

impl Settings {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            population_size: MONKE_DEFAULT_POPULATION,
            mutation_rate: MONKE_DEFAULT_MUTATION_RATE,
            printing: true,
            seed: None,
            max_generations: None,
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_printing(mut self, printing: bool) -> Self {
        self.printing = printing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if let Some((index, &byte)) = self
            .target
            .as_bytes()
            .iter()
            .enumerate()
            .find(|(_, byte)| !MONKE_GENE_RANGE.contains(*byte))
        {
            return Err(ConfigError::UnreachableTarget { index, byte });
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationCap);
        }
        Ok(())
    }
}

/// Observes the fittest member every [MONKE_REPORT_INTERVAL] generations
pub trait Hook {
    fn on_generation(&mut self, generation: usize, fittest: &Individual);
}

/// Reports nothing
impl Hook for () {
    fn on_generation(&mut self, _: usize, _: &Individual) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// some member of the final generation is the target
    Converged,
    /// the generation cap was reached first
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    /// the final generation, freshly scored
    pub population: Population,
    /// how many generations existed, counting the first random one
    pub generations: usize,
    pub halt: Halt,
    pub elapsed: Duration,
}

impl Outcome {
    #[inline]
    pub fn converged(&self) -> bool {
        self.halt == Halt::Converged
    }
}

pub struct Evolution<R: RngCore> {
    settings: Settings,
    rng: R,
    population: Population,
    generation: usize,
    found: bool,
    started: Instant,
}

impl Evolution<WyRng> {
    /// Start a run on [WyRng], seeded from `settings.seed` or the clock
    pub fn seeded(settings: Settings) -> Result<Self, ConfigError> {
        let rng = match settings.seed {
            Some(seed) => WyRng::seeded(seed),
            None => default_rng(),
        };
        Self::new(settings, rng)
    }
}

impl<R: RngCore> Evolution<R> {
    /// Validate `settings` and draw the first, random generation
    pub fn new(settings: Settings, mut rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;
        let started = Instant::now();
        let population = Population::random(
            settings.population_size,
            settings.target.len(),
            &mut rng,
        );

        Ok(Self {
            settings,
            rng,
            population,
            generation: 0,
            found: false,
            started,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// zero-based index of the current generation
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// whether the last breeding produced the target
    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Score and normalize the current generation, returning its total fitness
    pub fn evaluate(&mut self) -> f64 {
        self.population.evaluate(self.settings.target.as_bytes())
    }

    /// Replace the current generation with its offspring, returning whether any child is the
    /// target. Offspring are unscored until the next [evaluate](Evolution::evaluate).
    pub fn breed(&mut self) -> bool {
        let (next, found) = self.population.breed(
            self.settings.target.as_bytes(),
            self.settings.mutation_rate,
            &mut self.rng,
        );
        self.population = next;
        self.generation += 1;
        self.found = found;
        found
    }

    fn exhausted(&self) -> bool {
        self.settings
            .max_generations
            .is_some_and(|cap| self.generation >= cap)
    }

    /// Evolve until a child matches the target (or the cap is hit). A match is only noticed
    /// while breeding, so the generation holding it is evaluated once more before halting and
    /// the outcome always carries scored members.
    pub fn run(mut self, hook: &mut impl Hook) -> Outcome {
        let halt = loop {
            let total = self.evaluate();

            if self.found {
                info!("target found in generation {}", self.generation);
                break Halt::Converged;
            }

            if self.exhausted() {
                info!(
                    "gave up after {} generations without finding the target",
                    self.generation + 1
                );
                break Halt::Exhausted;
            }

            if let Some(fittest) = self.population.fittest() {
                debug!(
                    "generation {}: total fitness {total:.1}, fittest {:.1}",
                    self.generation, fittest.fitness
                );
                if self.generation % MONKE_REPORT_INTERVAL == 0 {
                    hook.on_generation(self.generation, fittest);
                }
            }

            self.breed();
        };

        Outcome {
            population: self.population,
            generations: self.generation + 1,
            halt,
            elapsed: self.started.elapsed(),
        }
    }
}
