use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod parser;

use crate::{
    core::{ExecutionEngine, ShellState},
    error::ShellError,
    flags::Flags,
    process::SignalInterceptor,
};

const HISTORY_FILE: &str = ".vush_history";

/// The interactive loop: reads lines, parses them, and hands the trees to the
/// execution engine.
pub struct Shell {
    editor: DefaultEditor,
    state: ShellState,
    engine: ExecutionEngine,
    interceptor: SignalInterceptor,
    history_file: Option<PathBuf>,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let state = ShellState::from_env(!flags.is_set("no-prompt"))?;
        let interceptor = SignalInterceptor::install()?;
        let mut editor = DefaultEditor::new()?;

        let history_file = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
        if let Some(path) = history_file.as_deref().filter(|path| path.exists()) {
            if let Err(e) = editor.load_history(path) {
                log::warn!("couldn't load history from {}: {}", path.display(), e);
            }
        }

        let engine = ExecutionEngine::stdio().quiet(flags.is_set("quiet"));

        Ok(Shell {
            editor,
            state,
            engine,
            interceptor,
            history_file,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.state.prompt().unwrap_or_default().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.interceptor.take_interrupt();
                    self.remember(&line);

                    if let Some(tree) = parser::parse(&line) {
                        self.engine.execute(&tree, &mut self.state);
                    }

                    // A child killed by Ctrl-C leaves the cursor mid-line.
                    if self.interceptor.take_interrupt() {
                        println!();
                    }
                }
                // The editor already dropped the line and moved to a fresh one.
                Err(ReadlineError::Interrupted) => {
                    self.interceptor.take_interrupt();
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    self.state.release();
                    return Err(e.into());
                }
            }
        }

        self.state.release();
        Ok(())
    }

    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(e) = self.editor.add_history_entry(line) {
            self.warn(&format!("Couldn't add to history: {}", e));
        }
        // `exit` never returns here, so history is written as we go.
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
        if !self.flags.is_set("quiet") {
            eprintln!("Warning: {}", message);
        }
    }
}
