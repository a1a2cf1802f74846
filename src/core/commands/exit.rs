use std::io::{self, Write};

use super::{leading_int, Command, CommandError, Context};

/// Releases the shell state and terminates the process.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }

    /// `exit N` uses N (truncated to `i32`), anything else means 0.
    pub fn status(args: &[String]) -> i32 {
        args.get(1).map_or(0, |arg| leading_int(arg) as i32)
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let status = Self::status(args);
        ctx.state.release();
        let _ = ctx.out.flush();
        let _ = io::stdout().flush();
        log::debug!("exiting with status {}", status);
        std::process::exit(status);
    }
}
