use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::core::ShellState;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process-wide state (working directory,
/// environment, child processes) and puts the original directory back when
/// dropped.
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub fn acquire() -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let original = env::current_dir().unwrap_or_else(|_| env::temp_dir());
        Self {
            original,
            _lock: lock,
        }
    }

    /// A state that mirrors the current directory.
    pub fn state(&self) -> ShellState {
        ShellState::new(env::current_dir().expect("current dir"), true)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}
