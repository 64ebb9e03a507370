// AST (Abstract Syntax Tree) definitions for the robot command language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The three built-in robot actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Go,
    Right,
    Left,
}

impl Primitive {
    pub const ALL: [Primitive; 3] = [Primitive::Go, Primitive::Right, Primitive::Left];

    /// Look up a primitive by its exact (case-sensitive) source label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "go" => Some(Primitive::Go),
            "right" => Some(Primitive::Right),
            "left" => Some(Primitive::Left),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Primitive::Go => "go",
            Primitive::Right => "right",
            Primitive::Left => "left",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single command inside a command list.
///
/// Locations point at the command's keyword and are ignored by `==`, so a
/// tree read back from a rendered trace compares equal to the tree parsed
/// from source.
#[derive(Debug, Clone)]
pub enum Command {
    Repeat {
        count: u32,
        body: CommandList,
        location: SourceLocation,
    },
    Primitive {
        action: Primitive,
        location: SourceLocation,
    },
}

impl Command {
    pub fn location(&self) -> SourceLocation {
        match self {
            Command::Repeat { location, .. } | Command::Primitive { location, .. } => *location,
        }
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Command::Repeat { count: a, body: x, .. },
                Command::Repeat { count: b, body: y, .. },
            ) => a == b && x == y,
            (Command::Primitive { action: a, .. }, Command::Primitive { action: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Command {}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Repeat { count, body, .. } => write!(f, "repeat {} {}", count, body),
            Command::Primitive { action, .. } => write!(f, "{}", action),
        }
    }
}

/// Ordered commands terminated by `end` in the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    pub commands: Vec<Command>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Deepest `repeat` nesting below this list (0 when it holds only primitives).
    pub fn depth(&self) -> usize {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                Command::Repeat { body, .. } => body.depth() + 1,
                Command::Primitive { .. } => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cmd)?;
        }
        f.write_str("]")
    }
}

/// Root of the tree: `program <command list>`
#[derive(Debug, Clone)]
pub struct Program {
    pub body: CommandList,
    pub location: SourceLocation,
}

impl Program {
    pub fn new(body: CommandList, location: SourceLocation) -> Self {
        Program { body, location }
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for Program {}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[program {}]", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(action: Primitive) -> Command {
        Command::Primitive {
            action,
            location: SourceLocation::default(),
        }
    }

    #[test]
    fn test_render_empty_program() {
        let program = Program::new(CommandList::new(), SourceLocation::new(1, 1));
        assert_eq!(program.to_string(), "[program []]");
    }

    #[test]
    fn test_render_nested_repeat() {
        let inner = CommandList {
            commands: vec![prim(Primitive::Go), prim(Primitive::Right)],
        };
        let body = CommandList {
            commands: vec![Command::Repeat {
                count: 4,
                body: inner,
                location: SourceLocation::new(1, 9),
            }],
        };
        let program = Program::new(body, SourceLocation::new(1, 1));
        assert_eq!(program.to_string(), "[program [repeat 4 [go, right]]]");
        assert_eq!(program.body.depth(), 1);
    }

    #[test]
    fn test_equality_ignores_locations() {
        let a = Command::Primitive {
            action: Primitive::Left,
            location: SourceLocation::new(1, 1),
        };
        let b = Command::Primitive {
            action: Primitive::Left,
            location: SourceLocation::new(7, 3),
        };
        assert_eq!(a, b);
        assert_ne!(a, prim(Primitive::Right));
    }

    #[test]
    fn test_primitive_labels() {
        for p in Primitive::ALL {
            assert_eq!(Primitive::from_label(p.label()), Some(p));
        }
        assert_eq!(Primitive::from_label("Go"), None);
    }
}
