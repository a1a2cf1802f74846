use std::io;
use std::process::ExitStatus;

use thiserror::Error;

pub mod launcher;
pub mod signal;

pub use launcher::Launcher;
pub use signal::SignalInterceptor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}: argument contains a NUL byte")]
    InvalidArgument(String),
    #[error("failed to install interrupt handler: {0}")]
    Signal(#[source] io::Error),
    #[error("fork failed: {0}")]
    ForkFailure(#[source] io::Error),
    #[error("{program}: cannot execute: {source}")]
    ExecFailure {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: {status}")]
    ChildFailure { program: String, status: ExitStatus },
    #[error("{program}: wait failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}
