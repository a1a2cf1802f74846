use crate::core::CommandNode;

pub const SEPARATOR: char = ';';

/// Turns one input line into a command tree.
///
/// Commands are separated by `;` and split on whitespace; there is no quoting.
/// `a; b; c` becomes `Sequence(a, Sequence(b, c))`. Returns `None` when the
/// line holds no command at all.
pub fn parse(line: &str) -> Option<CommandNode> {
    let mut commands: Vec<CommandNode> = line
        .split(SEPARATOR)
        .filter_map(|segment| CommandNode::command(segment.split_whitespace()))
        .collect();

    let mut tree = commands.pop()?;
    while let Some(previous) = commands.pop() {
        tree = CommandNode::sequence(previous, tree);
    }
    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(args: &[&str]) -> CommandNode {
        CommandNode::command(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_single_command() {
        assert_eq!(parse("  echo   hi  "), Some(cmd(&["echo", "hi"])));
    }

    #[test]
    fn test_sequence_nests_to_the_right() {
        assert_eq!(
            parse("echo a; echo b;echo c"),
            Some(CommandNode::sequence(
                cmd(&["echo", "a"]),
                CommandNode::sequence(cmd(&["echo", "b"]), cmd(&["echo", "c"])),
            ))
        );
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(parse(";; uname ;"), Some(cmd(&["uname"])));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \t"), None);
        assert_eq!(parse(" ; ;"), None);
    }
}
