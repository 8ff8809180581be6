//! Shared testing utilities for lagprep CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated case directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding the case file and its data directories.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `lagprep` binary inside the root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lagprep").expect("Failed to locate lagprep binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Write `case.xml` declaring `dirs` and the given window literals.
    pub fn write_case(&self, dirs: &[&str], start: &str, end: &str) -> PathBuf {
        let entries: String =
            dirs.iter().map(|d| format!("      <inputDataDir name=\"{}\"/>\n", d)).collect();
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<case>
  <execution>
    <parameters>
      <parameter key="StartTime" value="{start}" comment="Date of initial instant"/>
      <parameter key="EndTime" value="{end}" comment="Date of final instant"/>
      <parameter key="Integrator" value="3"/>
    </parameters>
  </execution>
  <casedef>
    <inputData>
{entries}    </inputData>
  </casedef>
</case>
"#
        );
        self.write_file("case.xml", &content)
    }

    /// Write a file relative to the root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create empty data files under `dir` (relative to the root).
    pub fn data_files(&self, dir: &str, names: &[&str]) -> PathBuf {
        let dir_path = self.root().join(dir);
        fs::create_dir_all(&dir_path).expect("Failed to create data directory");
        for name in names {
            fs::write(dir_path.join(name), b"").expect("Failed to create data file");
        }
        dir_path
    }
}
