//! Submission interface to the external engine binary.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::errors::{OpalError, Result};

/// Handle to the external engine binary. The engine owns all the physics;
/// this side only hands it a script and blocks until it is done.
pub struct Engine {
    command: String,
}

impl Engine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Runs the engine on `script`, blocking until its fixed step count
    /// finishes. Engine stdout and stderr are redirected to `log_path` for
    /// the duration of the call so the caller's console stays quiet; the
    /// file is truncated first.
    pub fn run(&self, script: &Path, log_path: &Path) -> Result<()> {
        let log_file = File::create(log_path).map_err(|e| OpalError::FileWrite {
            path: log_path.to_path_buf(),
            source: e,
        })?;
        let err_file = log_file.try_clone().map_err(|e| OpalError::FileWrite {
            path: log_path.to_path_buf(),
            source: e,
        })?;

        info!(
            "running '{}' on {}, output goes to {}",
            self.command,
            script.display(),
            log_path.display()
        );
        let status = Command::new(&self.command)
            .arg("-in")
            .arg(script)
            .arg("-log")
            .arg("none")
            .stdin(Stdio::null())
            .stdout(Stdio::from(log_file))
            .stderr(Stdio::from(err_file))
            .status()
            .map_err(|e| OpalError::EngineSpawn {
                command: self.command.clone(),
                source: e,
            })?;
        debug!("engine exited with {status}");

        if !status.success() {
            return Err(OpalError::EngineFailure {
                status,
                log: log_path.to_path_buf(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_engine_binary_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("in.md");
        std::fs::write(&script, "run 0\n").unwrap();

        let engine = Engine::new("opal-test-no-such-engine");
        let err = engine.run(&script, &dir.path().join("md.log")).unwrap_err();
        assert!(matches!(err, OpalError::EngineSpawn { .. }));
    }

    #[test]
    fn nonzero_exit_is_an_engine_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("in.md");
        std::fs::write(&script, "").unwrap();

        // `false` ignores its arguments and exits nonzero.
        let engine = Engine::new("false");
        let err = engine.run(&script, &dir.path().join("md.log")).unwrap_err();
        assert!(matches!(err, OpalError::EngineFailure { .. }));
    }
}
