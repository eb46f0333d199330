use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the built binary
pub fn tackboard_binary() -> &'static str {
    env!("CARGO_BIN_EXE_tackboard")
}

/// Helper struct to run tackboard commands against an isolated data directory
pub struct TackboardTest {
    pub temp_dir: TempDir,
}

impl TackboardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TackboardTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(tackboard_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TACKBOARD_ROOT", self.temp_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("TACKBOARD_LOG")
            .output()
            .expect("Failed to execute tackboard command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        assert_eq!(output.status.code(), Some(1));
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    #[allow(dead_code)]
    pub fn board_path(&self) -> PathBuf {
        self.temp_dir.path().join("kanbanColumns.json")
    }

    /// Stored board blob parsed as JSON
    #[allow(dead_code)]
    pub fn board_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.board_path()).expect("Failed to read board file");
        serde_json::from_str(&raw).expect("Board file is not valid JSON")
    }

    /// Ids of the tasks in a column, in order
    #[allow(dead_code)]
    pub fn task_ids(&self, column: &str) -> Vec<String> {
        self.board_json()[column]["tasks"]
            .as_array()
            .map(|tasks| {
                tasks
                    .iter()
                    .filter_map(|t| t["id"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Add a task and return its id
    #[allow(dead_code)]
    pub fn add_task(&self, column: &str, title: &str) -> String {
        self.run_success(&["task", "add", column, "--title", title]);
        self.task_ids(column)
            .pop()
            .expect("task was not added")
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
    }
}
