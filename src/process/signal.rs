use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::SigId;

use super::ProcessError;

/// Keeps SIGINT from killing the shell.
///
/// The handler only raises a flag, so it is safe to re-enter. Discarding the
/// typed line and redrawing the prompt is left to the line editor.
pub struct SignalInterceptor {
    interrupted: Arc<AtomicBool>,
    id: SigId,
}

impl SignalInterceptor {
    pub fn install() -> Result<Self, ProcessError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let id = signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))
            .map_err(ProcessError::Signal)?;
        log::debug!("SIGINT interceptor installed");
        Ok(Self { interrupted, id })
    }

    /// Returns whether an interrupt arrived since the last call, clearing it.
    pub fn take_interrupt(&self) -> bool {
        self.interrupted.swap(false, Ordering::Relaxed)
    }
}

impl Drop for SignalInterceptor {
    fn drop(&mut self) {
        signal_hook::low_level::unregister(self.id);
    }
}
