use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use super::ast::CommandNode;
use super::commands::{BuiltinRegistry, Command, Context};
use super::state::ShellState;
use crate::highlight::SyntaxHighlighter;
use crate::process::{Launcher, ProcessError};

/// Result of running a single `Command` node.
#[derive(Debug)]
pub enum ExecutionOutcome {
    Success,
    BuiltinHandled,
    ExternalFailed { reason: ProcessError },
}

/// Walks command trees, sending each command to a builtin or to the
/// [`Launcher`]. Failures are reported on the diagnostic stream and never
/// returned to the caller.
pub struct ExecutionEngine<O = Stdout, E = Stderr> {
    registry: BuiltinRegistry,
    launcher: Launcher,
    out: O,
    err: E,
    highlighter: SyntaxHighlighter,
    quiet: bool,
}

impl ExecutionEngine {
    /// Engine bound to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr()).with_highlighter(SyntaxHighlighter::new())
    }
}

impl<O: Write, E: Write> ExecutionEngine<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            registry: BuiltinRegistry::new(),
            launcher: Launcher::new(),
            out,
            err,
            highlighter: SyntaxHighlighter::plain(),
            quiet: false,
        }
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Suppresses diagnostics of failed commands. They are still logged.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    /// Runs `node` to completion and re-renders the prompt afterwards.
    pub fn execute(&mut self, node: &CommandNode, state: &mut ShellState) {
        self.walk(node, state);
        state.refresh_prompt();
    }

    fn walk(&mut self, node: &CommandNode, state: &mut ShellState) {
        match node {
            CommandNode::Command { program, arguments } => {
                if let ExecutionOutcome::ExternalFailed { reason } =
                    self.run_command(program, arguments, state)
                {
                    self.report(&reason);
                }
            }
            // Both sides always run; a failure on the left does not stop the right.
            CommandNode::Sequence { first, second } => {
                self.walk(first, state);
                self.walk(second, state);
            }
        }
    }

    pub fn run_command(
        &mut self,
        program: &str,
        arguments: &[String],
        state: &mut ShellState,
    ) -> ExecutionOutcome {
        if let Some(builtin) = self.registry.get(program) {
            log::debug!("builtin: {:?}", arguments);
            let mut ctx = Context {
                state,
                out: &mut self.out,
            };
            let result = builtin.execute(arguments, &mut ctx);
            let _ = self.out.flush();
            if let Err(e) = result {
                self.report(&e);
            }
            return ExecutionOutcome::BuiltinHandled;
        }

        log::debug!("external: {:?}", arguments);
        // Anything we buffered must hit the terminal before the child writes.
        let _ = self.out.flush();
        let launched = if arguments.is_empty() {
            self.launcher.launch(&[program.to_string()])
        } else {
            self.launcher.launch(arguments)
        };
        match launched {
            Ok(()) => ExecutionOutcome::Success,
            Err(reason) => ExecutionOutcome::ExternalFailed { reason },
        }
    }

    fn report(&mut self, error: &dyn Display) {
        log::info!("command failed: {}", error);
        if self.quiet {
            return;
        }
        let line = self.highlighter.highlight_error(&format!("vush: {}", error));
        let _ = writeln!(self.err, "{}", line);
        let _ = self.err.flush();
    }
}
