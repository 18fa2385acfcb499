//! Centralized constants for monke evolution parameters.
//!
//! All tunable parameters are defined here with the `MONKE_` prefix.

use core::ops::RangeInclusive;

// ============================================================================
// Fitness Parameters
// ============================================================================

/// Score awarded per gene, scaled by how close the gene is to the target
pub const MONKE_FITNESS_INCREASE: f64 = 9.5;

/// Distance scale used when scoring a single gene
pub const MONKE_FITNESS_SCALE: f64 = 95.0;

/// Highest score a single gene can earn (an exact match)
pub const MONKE_GENE_FITNESS_MAX: f64 = MONKE_FITNESS_INCREASE * MONKE_FITNESS_SCALE;

// ============================================================================
// Gene Parameters
// ============================================================================

/// Printable ASCII, space through `~`. Random genes are drawn uniformly from here
pub const MONKE_GENE_RANGE: RangeInclusive<u8> = 32..=126;

// ============================================================================
// Run Parameters
// ============================================================================

/// Population size when none is given
pub const MONKE_DEFAULT_POPULATION: usize = 10;

/// Per-gene mutation chance when none is given
pub const MONKE_DEFAULT_MUTATION_RATE: f64 = 0.07;

/// Generations between progress reports
pub const MONKE_REPORT_INTERVAL: usize = 5;
