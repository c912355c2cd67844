use log::debug;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::LaunchError;

/// Starts another program. The menu and the launcher only ever start things
/// through this, so tests can substitute a recorder.
pub trait ProcessSpawner {
    fn spawn(&mut self, program: &Path, args: &[String]) -> Result<(), LaunchError>;
}

/// Spawns real processes, detached from ours.
#[derive(Debug, Default)]
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn(&mut self, program: &Path, args: &[String]) -> Result<(), LaunchError> {
        spawn_detached(program, args)
    }
}

/// Spawn a process that keeps running after we exit. Its output is discarded
/// and it is never waited on. Failures are returned for the caller to report.
pub fn spawn_detached(program: &Path, args: &[String]) -> Result<(), LaunchError> {
    debug!("Spawning detached: {} {:?}", program.display(), args);

    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(child) => {
            debug!("Started {} (pid {})", program.display(), child.id());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(LaunchError::NotFound(program.to_path_buf()))
        }
        Err(source) => Err(LaunchError::Spawn {
            path: program.to_path_buf(),
            source,
        }),
    }
}
