// Analyzer module: aggregates submodules for the two scoring pipelines.

pub mod engagement;
pub mod visibility;
