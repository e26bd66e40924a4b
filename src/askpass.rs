use crate::config::AskpassConfig;
use eyre::{Context, Result};
use log::debug;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Which credential prompt an invocation is serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTurn {
    First,
    Subsequent,
}

/// Zero-byte file whose existence records that the first prompt was answered
pub struct Marker {
    path: PathBuf,
}

impl Marker {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report which turn this invocation is, without recording anything
    pub fn turn(&self) -> PromptTurn {
        if self.path.exists() {
            PromptTurn::Subsequent
        } else {
            PromptTurn::First
        }
    }

    /// Record that the first prompt was served. Creation is atomic; returns
    /// false if another invocation created the marker first.
    pub fn record_first(&self) -> Result<bool> {
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err).context(format!(
                "Failed to create marker file {}",
                self.path.display()
            )),
        }
    }
}

/// Answer one credential prompt: the first invocation of a session gets
/// prompt1 and sets the marker, every later one gets prompt2.
///
/// The prompt is resolved before the marker is touched, so a failed first
/// invocation leaves the session unconsumed.
pub fn respond(marker: &Marker, config: &AskpassConfig) -> Result<String> {
    match marker.turn() {
        PromptTurn::Subsequent => {
            debug!("Prompt 2 ({} present)", marker.path().display());
            Ok(config.prompt2()?.to_string())
        }
        PromptTurn::First => {
            let prompt = config.prompt1()?.to_string();
            if marker.record_first()? {
                debug!("Prompt 1 (created {})", marker.path().display());
                Ok(prompt)
            } else {
                // Another invocation won the marker race in between.
                debug!("Prompt 2 ({} appeared concurrently)", marker.path().display());
                Ok(config.prompt2()?.to_string())
            }
        }
    }
}
