use std::io::Write;

use super::{Command, CommandError, Context};

/// `echo X` prints `X` and a newline, `echo -n X` prints `X` alone. Only the
/// first word after the command (or after `-n`) is printed.
#[derive(Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let first = args.get(1).map(String::as_str);
        if first == Some("-n") {
            let text = args.get(2).map(String::as_str).unwrap_or("");
            write!(ctx.out, "{}", text)?;
        } else {
            writeln!(ctx.out, "{}", first.unwrap_or(""))?;
        }
        Ok(())
    }
}
