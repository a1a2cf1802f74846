use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

mod cd;
mod echo;
mod exit;
mod mkdir;
mod sleep;
mod uname;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use mkdir::MkdirCommand;
pub use sleep::SleepCommand;
pub use uname::UnameCommand;

use super::ShellState;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("uname: {0}")]
    OsQuery(#[source] io::Error),
    #[error("cd: {}: Not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cd: {}: {source}", .path.display())]
    ResolveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cd: {}: {source}", .path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cd: HOME not set")]
    HomeNotSet,
    #[error("mkdir: cannot create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a builtin gets to work with besides its arguments.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    /// `args[0]` is the command name, as typed.
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Uname(UnameCommand),
    Echo(EchoCommand),
    Cd(CdCommand),
    Sleep(SleepCommand),
    Mkdir(MkdirCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        match self {
            CommandType::Uname(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Sleep(cmd) => cmd.execute(args, ctx),
            CommandType::Mkdir(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Name to handler table. Lookups are exact and case-sensitive.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("uname", CommandType::Uname(UnameCommand::new()));
        commands.insert("echo", CommandType::Echo(EchoCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("sleep", CommandType::Sleep(SleepCommand::new()));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(name)
    }

    #[cfg(test)]
    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

/// Integer prefix of `input` the way C's `atoi` reads it: leading blanks, an
/// optional sign, then digits. Anything unparsable is 0; overflow saturates.
pub(crate) fn leading_int(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
