pub mod loader;
pub mod model;

pub use loader::{load_case, parse_case_content};
pub use model::{CaseDefinition, ExecutionParameter, InputDataDirectory};
