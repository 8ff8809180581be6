//! lagprep: resolve MOHID Lagrangian case definitions and index the input files
//! that cover the simulation time window.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{IndexOverrides, IndexRequest, index_case};
pub use app::commands::index::{IndexCaseOptions, IndexOutcome, Manifest, write_manifest};
pub use domain::{
    AppError, BracketPolicy, CandidateFile, CaseDefinition, IndexOptions, Placement, ResolvedCase,
    TimeWindow, TimestampSource, extract, load_case,
};
pub use domain::index::index;
