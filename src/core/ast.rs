/// A parsed command tree.
///
/// `Command::arguments` always starts with the program name, so a well-formed
/// `Command` carries at least one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandNode {
    Command {
        program: String,
        arguments: Vec<String>,
    },
    Sequence {
        first: Box<CommandNode>,
        second: Box<CommandNode>,
    },
}

impl CommandNode {
    /// Builds a `Command` node from its full argument vector.
    ///
    /// Returns `None` for an empty vector.
    pub fn command<I, S>(arguments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        let program = arguments.first()?.clone();
        Some(CommandNode::Command { program, arguments })
    }

    pub fn sequence(first: CommandNode, second: CommandNode) -> Self {
        CommandNode::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}
