use thiserror::Error;

/// Errors raised when resolving block kinds by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown block kind '{0}' (expected one of: entry, read, iterate, emit, branch)")]
    UnknownKind(String),
}

/// Errors that can occur while loading or validating a `CanvasConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid canvas config: {field} {message}")]
    Invalid { field: &'static str, message: String },
}

/// Errors that can occur while loading event scripts or parsing interactive commands.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not read script file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event script JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Empty command")]
    EmptyCommand,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Command '{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number '{value}' for argument '{argument}'")]
    InvalidNumber { argument: &'static str, value: String },

    #[error(transparent)]
    Template(#[from] TemplateError),
}
