/// Resumable recursive backtracker and one-call generation
pub mod generator;
/// Uniform choice sources for neighbor selection
pub mod selection;
