#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
///
/// The user config directory is redirected so a developer's own
/// configuration never leaks into test runs.
#[macro_export]
macro_rules! style_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"));
        cmd.env_remove("STYLE_GUARD_LOG")
            .env_remove("NO_COLOR")
            .env("XDG_CONFIG_HOME", std::env::temp_dir().join("style-guard-tests-no-config"));
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.style-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A program that passes every rule.
pub const CLEAN_PROGRAM: &str = r#"// Entry point for the scoring demo.
public class Program
{
    // Highest score allowed.
    private const int MaxScore = 100;
    // Runs the demo.
    public static void Main(string[] args)
    {
        List<int> scores = new List<int>();
        foreach (int score in scores)
        {
            Print(score);
        }
    }


    // Adds the bonus to a score.
    private int AddBonus(int score)
    {
        return score + MaxScore;
    }
}
"#;

/// A program whose only problem is one magic number on line 8.
pub const MAGIC_NUMBER_PROGRAM: &str = r#"// Entry point.
public class Program
{
    // Runs the demo.
    public static void Main(string[] args)
    {
        List<int> scores = new List<int>();
        int bonus = 42;
        foreach (int score in scores)
        {
            Print(score + bonus);
        }
    }
}
"#;
