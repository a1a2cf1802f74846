use std::io;
use std::process::{Command, Stdio};

use super::ProcessError;

/// Runs external programs and waits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    /// Runs `arguments[0]` with the rest as its arguments, verbatim, and blocks
    /// until it terminates. The program is looked up on `PATH`.
    pub fn launch(&self, arguments: &[String]) -> Result<(), ProcessError> {
        let Some((program, rest)) = arguments.split_first() else {
            return Err(ProcessError::InvalidArgument(String::new()));
        };
        if arguments.iter().any(|arg| arg.contains('\0')) {
            return Err(ProcessError::InvalidArgument(program.clone()));
        }

        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    ProcessError::ExecFailure {
                        program: program.clone(),
                        source,
                    }
                }
                _ => ProcessError::ForkFailure(source),
            })?;
        log::debug!("spawned {} as pid {}", program, child.id());

        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: program.clone(),
            source,
        })?;
        log::trace!("{} finished with {}", program, status);

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::ChildFailure {
                program: program.clone(),
                status,
            })
        }
    }
}
