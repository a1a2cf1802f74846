use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Working directory and prompt shared by the engine and the builtins.
///
/// `working_directory` mirrors the process's current directory. Only `cd`
/// changes it, and only after the OS call succeeded.
#[derive(Debug)]
pub struct ShellState {
    working_directory: PathBuf,
    prompt: Option<String>,
    prompt_enabled: bool,
    released: bool,
}

impl ShellState {
    /// Caller guarantees `working_directory` is the process's current directory.
    pub fn new(working_directory: PathBuf, prompt_enabled: bool) -> Self {
        let mut state = Self {
            working_directory,
            prompt: None,
            prompt_enabled,
            released: false,
        };
        state.refresh_prompt();
        state
    }

    /// Startup state: `PWD` when it names the directory we are actually in,
    /// otherwise whatever the OS reports.
    pub fn from_env(prompt_enabled: bool) -> io::Result<Self> {
        let actual = env::current_dir()?;
        let working_directory = match env::var_os("PWD").map(PathBuf::from) {
            Some(pwd) if pwd.is_absolute() && same_directory(&pwd, &actual) => pwd,
            _ => actual,
        };
        log::debug!("initial working directory: {}", working_directory.display());
        Ok(Self::new(working_directory, prompt_enabled))
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Replaces the working directory. The previous value is dropped here.
    pub(crate) fn set_working_directory(&mut self, directory: PathBuf) {
        log::debug!(
            "working directory: {} -> {}",
            self.working_directory.display(),
            directory.display()
        );
        self.working_directory = directory;
    }

    pub fn refresh_prompt(&mut self) {
        if self.released {
            return;
        }
        self.prompt = self
            .prompt_enabled
            .then(|| render_prompt(&self.working_directory));
    }

    /// Drops the prompt and working directory. Returns `false` if they were
    /// already released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.prompt = None;
        drop(std::mem::take(&mut self.working_directory));
        self.released = true;
        log::debug!("shell state released");
        true
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

pub fn render_prompt(directory: &Path) -> String {
    format!("vush:{}$ ", directory.display())
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_follows_directory() {
        let mut state = ShellState::new(PathBuf::from("/tmp"), true);
        assert_eq!(state.prompt(), Some("vush:/tmp$ "));

        state.set_working_directory(PathBuf::from("/usr"));
        assert_eq!(state.prompt(), Some("vush:/tmp$ "));

        state.refresh_prompt();
        assert_eq!(state.prompt(), Some("vush:/usr$ "));
    }

    #[test]
    fn test_prompt_disabled() {
        let mut state = ShellState::new(PathBuf::from("/tmp"), false);
        state.refresh_prompt();
        assert_eq!(state.prompt(), None);
    }

    #[test]
    fn test_release_happens_once() {
        let mut state = ShellState::new(PathBuf::from("/tmp"), true);

        assert!(state.release());
        assert!(state.is_released());
        assert_eq!(state.prompt(), None);
        assert!(!state.release());

        state.refresh_prompt();
        assert_eq!(state.prompt(), None);
    }

    #[test]
    fn test_from_env_is_absolute() -> io::Result<()> {
        let _guard = crate::test_support::CwdGuard::acquire();
        let state = ShellState::from_env(true)?;
        assert!(state.working_directory().is_absolute());
        Ok(())
    }
}
