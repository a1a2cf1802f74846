use std::thread;
use std::time::Duration;

use super::{leading_int, Command, CommandError, Context};

/// `sleep N` blocks for N whole seconds; garbage and negatives mean 0.
#[derive(Clone)]
pub struct SleepCommand;

impl Default for SleepCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn duration(arg: &str) -> Duration {
        Duration::from_secs(u64::try_from(leading_int(arg)).unwrap_or(0))
    }
}

impl Command for SleepCommand {
    fn execute(&self, args: &[String], _ctx: &mut Context<'_>) -> Result<(), CommandError> {
        if let Some(arg) = args.get(1) {
            let duration = Self::duration(arg);
            log::debug!("sleeping for {:?}", duration);
            thread::sleep(duration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShellState;
    use std::path::PathBuf;
    use std::time::Instant;

    #[test]
    fn test_duration_parsing() {
        assert_eq!(SleepCommand::duration("2"), Duration::from_secs(2));
        assert_eq!(SleepCommand::duration("1s"), Duration::from_secs(1));
        assert_eq!(SleepCommand::duration("soon"), Duration::ZERO);
        assert_eq!(SleepCommand::duration("-5"), Duration::ZERO);
    }

    #[test]
    fn test_sleep_blocks() {
        let mut state = ShellState::new(PathBuf::from("/"), false);
        let mut out = Vec::new();
        let mut ctx = Context {
            state: &mut state,
            out: &mut out,
        };

        let start = Instant::now();
        SleepCommand::new()
            .execute(&["sleep".to_string(), "1".to_string()], &mut ctx)
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));

        let start = Instant::now();
        SleepCommand::new()
            .execute(&["sleep".to_string()], &mut ctx)
            .unwrap();
        SleepCommand::new()
            .execute(&["sleep".to_string(), "-3".to_string()], &mut ctx)
            .unwrap();
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(out.is_empty());
    }
}
