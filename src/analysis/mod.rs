//! Verification of generated mazes

/// Passage graph checks: connectivity, edge count, wall symmetry
pub mod topology;
