/// Error types shared across the crate.
pub mod error;

pub mod position;

/// Trait aliases and the heuristic seam.
pub mod traits;

#[cfg(test)]
pub(crate) mod data;
