use std::fs::DirBuilder;
use std::io::Write;
use std::os::unix::fs::DirBuilderExt;

use super::{Command, CommandError, Context};

const USAGE: &str = "usage: mkdir <directory>";

/// Creates exactly one directory with mode 0777 (the umask still applies).
#[derive(Clone)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let [_, name] = args else {
            writeln!(ctx.out, "{}", USAGE)?;
            return Ok(());
        };

        DirBuilder::new()
            .mode(0o777)
            .create(name)
            .map_err(|source| CommandError::CreateDir {
                path: name.clone(),
                source,
            })?;
        writeln!(ctx.out, "mkdir: created directory '{}'", name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShellState;
    use std::io;
    use std::path::PathBuf;

    fn run(args: &[&str]) -> (Result<(), CommandError>, String) {
        let mut state = ShellState::new(PathBuf::from("/"), false);
        let mut out = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let result = MkdirCommand::new().execute(
            &args,
            &mut Context {
                state: &mut state,
                out: &mut out,
            },
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_mkdir_creates_once() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let target = temp.path().join("made");
        let target_str = target.to_str().unwrap();

        let (result, out) = run(&["mkdir", target_str]);
        result?;
        assert!(target.is_dir());
        assert!(out.contains(target_str));

        let (result, out) = run(&["mkdir", target_str]);
        match result {
            Err(CommandError::CreateDir { path, source }) => {
                assert_eq!(path, target_str);
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_mkdir_usage() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let a = temp.path().join("a");
        let b = temp.path().join("b");

        let (result, out) = run(&["mkdir"]);
        result?;
        assert_eq!(out, format!("{}\n", USAGE));

        let (result, out) = run(&["mkdir", a.to_str().unwrap(), b.to_str().unwrap()]);
        result?;
        assert_eq!(out, format!("{}\n", USAGE));
        assert!(!a.exists());
        assert!(!b.exists());
        Ok(())
    }

    #[test]
    fn test_mkdir_missing_parent() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let target = temp.path().join("no/such/parent");

        let (result, _) = run(&["mkdir", target.to_str().unwrap()]);
        assert!(matches!(result, Err(CommandError::CreateDir { .. })));
        Ok(())
    }
}
