use serde::{Deserialize, Serialize};

/// Source position of a declaration (1-based line and column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Element kinds that can appear in a schema file or inside a declaration.
///
/// The set is closed: traversal code matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Message(Message),
    Service(Service),
    Rpc(Rpc),
    Field(Field),
    Enum(EnumDecl),
    Oneof(Oneof),
    Option(OptionDecl),
}

/// A composite-type declaration (`message Foo { ... }` or `extend Foo { ... }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Local, unqualified name.
    pub name: String,
    /// Raw leading comment text, including any comment markers.
    #[serde(default)]
    pub comment: Option<String>,
    /// True for `extend` blocks, which add fields to an existing type.
    #[serde(default)]
    pub is_extend: bool,
    pub position: Position,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A service declaration. Its children are visited but it never contributes
/// a segment to qualified names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rpc {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub response_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub position: Position,
    #[serde(default, rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub position: Position,
}

/// A `oneof` group. Its children are fields only, so traversal never
/// descends into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oneof {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDecl {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub value: String,
}

/// One parsed schema file, as handed over by the external parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Path of the original schema file, used when reporting failures.
    pub path: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Errors that can occur outside of the lint findings themselves.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor {path}: {source}")]
    Descriptor {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown lint ID: {0}")]
    UnknownLintId(String),
}
