use super::{Command, CommandError, Context};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Changes the process directory and keeps `ShellState` in step with it.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn home_dir() -> Result<PathBuf, CommandError> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(CommandError::HomeNotSet)
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let target = match args.get(1) {
            Some(arg) => {
                let candidate = ctx.state.working_directory().join(arg);
                if !candidate.is_dir() {
                    return Err(CommandError::NotADirectory(PathBuf::from(arg)));
                }
                fs::canonicalize(&candidate).map_err(|source| CommandError::ResolveFailed {
                    path: candidate,
                    source,
                })?
            }
            None => {
                let home = Self::home_dir()?;
                if home.is_absolute() {
                    home
                } else {
                    ctx.state.working_directory().join(home)
                }
            }
        };

        env::set_current_dir(&target).map_err(|source| CommandError::ChangeDir {
            path: target.clone(),
            source,
        })?;
        ctx.state.set_working_directory(target);
        Ok(())
    }
}
