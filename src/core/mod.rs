pub mod ast;
pub mod commands;
pub mod engine;
pub mod state;

pub use ast::CommandNode;
pub use engine::{ExecutionEngine, ExecutionOutcome};
pub use state::ShellState;
