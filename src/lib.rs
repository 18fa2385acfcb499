pub mod args;
pub mod constants;
pub mod error;
pub mod individual;
mod macros;
pub mod population;
pub mod random;
pub mod report;
pub mod reproduce;
pub mod scenario;

pub use error::ConfigError;
pub use individual::{score, Individual};
pub use population::Population;
pub use random::WyRng;
pub use report::{Printer, Report};
pub use scenario::{Evolution, Halt, Hook, Outcome, Settings};
