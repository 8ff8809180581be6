use serde::Serialize;

/// Candidate entry that was skipped because it could not be read or dated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableEntryWarning {
    pub file: String,
    pub message: String,
}

/// Non-fatal findings collected while indexing.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<UnreadableEntryWarning>,
}

impl Diagnostics {
    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(UnreadableEntryWarning { file: file.into(), message: message.into() });
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[UnreadableEntryWarning] {
        &self.warnings
    }

    pub fn emit(&self) {
        for warning in &self.warnings {
            eprintln!("[WARN] {}: {}", warning.file, warning.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_warnings_in_order() {
        let mut diagnostics = Diagnostics::default();
        assert!(!diagnostics.has_warnings());

        diagnostics.push_warning("hydro/grid.nc", "no date found in file name");
        diagnostics.push_warning("hydro/broken", "permission denied");

        assert_eq!(diagnostics.warning_count(), 2);
        assert_eq!(diagnostics.warnings()[0].file, "hydro/grid.nc");
        assert_eq!(diagnostics.warnings()[1].message, "permission denied");
    }
}
