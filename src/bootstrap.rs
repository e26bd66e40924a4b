use crate::process;
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Clones a repository with git's persistent credential store enabled
pub struct Bootstrap {
    repository: String,
    directory: PathBuf,
    git: PathBuf,
}

impl Bootstrap {
    pub fn new(repository: &str, directory: &Path) -> Self {
        Self {
            repository: repository.to_string(),
            directory: directory.to_path_buf(),
            git: PathBuf::from("git"),
        }
    }

    /// Use a specific git program instead of whatever PATH resolves
    pub fn with_git(mut self, program: &Path) -> Self {
        self.git = program.to_path_buf();
        self
    }

    /// Run the bootstrap sequence. Returns the exit code to report: 0 on
    /// success, otherwise the exit code of the failing git subprocess.
    pub fn run(&self) -> Result<i32> {
        which::which(&self.git)
            .context(format!("{} not found on PATH", self.git.display()))?;

        // 1. Switch git to the persistent credential store.
        let code = self.configure_credential_store()?;
        if code != 0 {
            return Ok(code);
        }

        // 2. Clone. Git may call the askpass responder during this step.
        let code = self.clone_repository()?;
        if code != 0 {
            return Ok(code);
        }

        // 3. List the clone target. Failures here are logged and ignored.
        self.list_directory();

        Ok(0)
    }

    fn configure_credential_store(&self) -> Result<i32> {
        info!("Configuring git credential.helper store");
        process::run_logged(
            Command::new(&self.git).args(["config", "--global", "credential.helper", "store"]),
        )
    }

    fn clone_repository(&self) -> Result<i32> {
        info!("Cloning {} into {}", self.repository, self.directory.display());

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb.set_message(format!("cloning {}", self.repository));

        let result = process::run_logged(
            Command::new(&self.git)
                .arg("clone")
                .arg(&self.repository)
                .arg(&self.directory),
        );

        pb.finish_and_clear();
        result
    }

    fn list_directory(&self) {
        if let Err(err) = process::run_logged(Command::new("ls").arg("-al").arg(&self.directory)) {
            warn!("Directory listing failed: {err:#}");
        }
    }
}
