//! Console output: the startup banner, progress lines while evolving, and the final results.

use crate::{
    individual::{score_max, Individual},
    scenario::{Hook, Outcome, Settings},
};
use core::fmt;
use serde::Serialize;

/// Echo of the settings a run starts with
pub struct Banner<'a>(pub &'a Settings);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Input phrase: \"{}\" length: {}", s.target, s.target.len())?;
        writeln!(f, "Population size: {}", s.population_size)?;
        writeln!(f, "Mutation chance: {}", s.mutation_rate)?;
        write!(f, "Printing mid execution: {}", s.printing)?;
        if let Some(seed) = s.seed {
            write!(f, "\nSeed: {seed}")?;
        }
        if let Some(cap) = s.max_generations {
            write!(f, "\nGeneration cap: {cap}")?;
        }
        Ok(())
    }
}

/// Prints the fittest member to stdout at each report point
#[derive(Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn line(generation: usize, fittest: &Individual) -> String {
        format!("Generation: {generation}. Fittest individual: {fittest}")
    }
}

impl Hook for Printer {
    fn on_generation(&mut self, generation: usize, fittest: &Individual) {
        println!("{}", Self::line(generation, fittest));
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Row {
    pub genes: String,
    pub fitness: f64,
    /// fitness as a fraction of the best possible score for the target
    pub normalized_against_max: f64,
    pub exact: bool,
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub target: String,
    pub population: Vec<Row>,
    pub elapsed_ms: f64,
    pub generations: usize,
    pub converged: bool,
}

impl Report {
    pub fn new(target: &str, outcome: &Outcome) -> Self {
        let max = score_max(target.len());
        Self {
            target: target.to_owned(),
            population: outcome
                .population
                .members()
                .iter()
                .map(|ind| Row {
                    genes: ind.phrase(),
                    fitness: ind.fitness,
                    normalized_against_max: ind.fitness / max,
                    exact: ind.matches(target.as_bytes()),
                })
                .collect(),
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.,
            generations: outcome.generations,
            converged: outcome.converged(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nRESULTS\n\nLast population")?;
        for row in &self.population {
            writeln!(
                f,
                "Genes: {} | fitness: {:>8.1} | Normalized against input: {:.3}{}",
                row.genes,
                row.fitness,
                row.normalized_against_max,
                if row.exact { " <<<<" } else { "" }
            )?;
        }
        if !self.converged {
            writeln!(f, "Target not found before the generation cap")?;
        }
        writeln!(f, "Execution time: {:.3}ms", self.elapsed_ms)?;
        write!(f, "Generations passed: {}", self.generations)
    }
}
