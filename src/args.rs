use crate::{
    constants::{MONKE_DEFAULT_MUTATION_RATE, MONKE_DEFAULT_POPULATION},
    scenario::Settings,
};
use clap::Parser;

/// Literal that turns off progress lines
pub const NOPRINT: &str = "-noprint";

/// Evolve a population of random strings until one of them spells the target phrase
#[derive(Parser, Debug)]
#[command(name = "monke", version)]
pub struct Args {
    /// Phrase to evolve toward. May itself start with a hyphen
    #[arg(allow_hyphen_values = true)]
    pub target: String,

    /// Individuals per generation
    #[arg(default_value_t = MONKE_DEFAULT_POPULATION)]
    pub population_size: usize,

    /// Chance, per gene, of a random replacement instead of inheritance
    #[arg(default_value_t = MONKE_DEFAULT_MUTATION_RATE, allow_negative_numbers = true)]
    pub mutation_rate: f64,

    /// Pass `-noprint` to silence the progress lines printed every fifth generation
    #[arg(allow_hyphen_values = true, value_parser = [NOPRINT])]
    pub noprint: Option<String>,

    /// Seed for the random source. Seeds from the clock when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many generations even if the target was not found
    #[arg(long)]
    pub max_generations: Option<usize>,

    /// Print the final results as json
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn printing(&self) -> bool {
        self.noprint.is_none()
    }

    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(self.target.clone())
            .with_population_size(self.population_size)
            .with_mutation_rate(self.mutation_rate)
            .with_printing(self.printing());
        settings.seed = self.seed;
        settings.max_generations = self.max_generations;
        settings
    }
}
