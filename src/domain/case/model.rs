//! Case definition domain models.

use serde::Deserialize;

/// A named input data location declared under `casedef/inputData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDataDirectory {
    pub name: String,
    /// Optional `type` attribute (e.g. `hydrodynamic`), kept for reporting only.
    pub kind: Option<String>,
}

impl InputDataDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: None }
    }
}

/// A `key`/`value` pair declared under `execution/parameters`.
///
/// `value` is only required for recognized keys, so it stays optional here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParameter {
    pub key: String,
    pub value: Option<String>,
}

impl ExecutionParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: Some(value.into()) }
    }

    pub fn without_value(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: None }
    }
}

/// Parsed case definition. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseDefinition {
    input_directories: Vec<InputDataDirectory>,
    parameters: Vec<ExecutionParameter>,
}

impl CaseDefinition {
    pub fn new(
        input_directories: Vec<InputDataDirectory>,
        parameters: Vec<ExecutionParameter>,
    ) -> Self {
        Self { input_directories, parameters }
    }

    /// Input data directories in document order.
    pub fn input_directories(&self) -> &[InputDataDirectory] {
        &self.input_directories
    }

    /// Execution parameters in document order.
    pub fn parameters(&self) -> &[ExecutionParameter] {
        &self.parameters
    }
}

// Wire shape of the XML document. Every level is a list so repeated sections
// are merged the way a path query over the tree would merge them.

#[derive(Debug, Default, Deserialize)]
pub(super) struct CaseDocument {
    #[serde(default)]
    casedef: Vec<CaseDefSection>,
    #[serde(default)]
    execution: Vec<ExecutionSection>,
}

#[derive(Debug, Default, Deserialize)]
struct CaseDefSection {
    #[serde(rename = "inputData", default)]
    input_data: Vec<InputDataSection>,
}

#[derive(Debug, Default, Deserialize)]
struct InputDataSection {
    #[serde(rename = "inputDataDir", default)]
    dirs: Vec<InputDataDirElement>,
}

#[derive(Debug, Deserialize)]
struct InputDataDirElement {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type", default)]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExecutionSection {
    #[serde(default)]
    parameters: Vec<ParametersSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ParametersSection {
    #[serde(default)]
    parameter: Vec<ParameterElement>,
}

#[derive(Debug, Deserialize)]
struct ParameterElement {
    #[serde(rename = "@key", default)]
    key: Option<String>,
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

impl From<CaseDocument> for CaseDefinition {
    fn from(doc: CaseDocument) -> Self {
        let input_directories = doc
            .casedef
            .into_iter()
            .flat_map(|section| section.input_data)
            .flat_map(|section| section.dirs)
            .map(|dir| InputDataDirectory { name: dir.name, kind: dir.kind })
            .collect();

        let parameters = doc
            .execution
            .into_iter()
            .flat_map(|section| section.parameters)
            .flat_map(|section| section.parameter)
            .filter_map(|param| Some(ExecutionParameter { key: param.key?, value: param.value }))
            .collect();

        Self { input_directories, parameters }
    }
}
