#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the chart-prep binary.
///
/// `RUST_LOG` is cleared so log output never leaks into stderr assertions.
#[macro_export]
macro_rules! chart_prep {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("chart-prep"));
        cmd.env_remove("RUST_LOG");
        cmd
    }};
}

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a project-local `.chart-prep.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".chart-prep.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const BASIC_CONFIG: &str = r#"
version = "1"

[format]
default = "number"
condensed_precision = 0

[domain]
clamp_at_zero = false

[output]
format = "text"
"#;

pub const JSON_OUTPUT_CONFIG: &str = r#"
version = "1"

[output]
format = "json"
"#;

/// Household income by county, with margins of error.
pub const COUNTY_ITEMS: &str = r#"[
    {"description": "Alameda County", "value": "112017", "moe": "1021"},
    {"description": "Alpine County", "value": "101125", "moe": "17442"},
    {"description": "Amador County", "value": "n/a"}
]"#;

/// A yearly series carried as time codes.
pub const YEARLY_ITEMS: &str = r#"[
    {"description": "Unemployment 2019", "value": 4.1, "date": "2019"},
    {"description": "Unemployment 2020", "value": 10.1, "date": "2020"},
    {"description": "Unemployment 2021", "value": 7.3, "date": "2021"}
]"#;
