pub mod extractor;
pub mod table;

pub use extractor::{INPUT_DATA_DIR_PATH, ResolvedCase, extract};
pub use table::{PARAMETER_TABLE, ParameterKey, ParameterValue};
