pub mod case;
pub mod diagnostics;
pub mod directory_set;
pub mod error;
pub mod index;
pub mod parameters;
pub mod settings;
pub mod time_window;

pub use case::{CaseDefinition, ExecutionParameter, InputDataDirectory, load_case};
pub use diagnostics::{Diagnostics, UnreadableEntryWarning};
pub use directory_set::DirectorySet;
pub use error::AppError;
pub use index::{BracketPolicy, CandidateFile, IndexOptions, Placement, TimestampSource};
pub use parameters::{ResolvedCase, extract};
pub use settings::{Settings, load_settings};
pub use time_window::{CASE_TIMESTAMP_FORMAT, TimeWindow};
