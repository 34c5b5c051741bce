// Domain errors - Error types for the domain layer

use std::fmt;

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required step input is missing or malformed
    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },

    /// A host dependency (SDK, deploy directory, device tool) is unusable
    #[error("environment error: {0}")]
    Environment(String),

    /// An external process could not start or exited unsuccessfully
    #[error("execution error: {message}{}", format_output(.output))]
    Execution { message: String, output: String },

    /// A postcondition on the device or the produced files did not hold
    #[error("state error: {0}")]
    State(String),

    /// A local filesystem operation failed
    #[error("filesystem error: {0}")]
    Filesystem(String),
}

fn format_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(", output: {}", output)
    }
}

impl DomainError {
    /// Missing or empty input
    pub fn empty_input(field: &str) -> Self {
        DomainError::Validation {
            field: field.to_string(),
            message: "value must not be empty".to_string(),
        }
    }

    /// Execution failure with captured process output
    pub fn execution(message: impl Into<String>, output: impl Into<String>) -> Self {
        DomainError::Execution {
            message: message.into(),
            output: output.into(),
        }
    }

    /// Short kind name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "ValidationError",
            DomainError::Environment(_) => "EnvironmentError",
            DomainError::Execution { .. } => "ExecutionError",
            DomainError::State(_) => "StateError",
            DomainError::Filesystem(_) => "FilesystemError",
        }
    }
}

/// Stages of the stop-recording run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidateInputs,
    CheckCompatibility,
    StopRecording,
    VerifyStopped,
    PullVideo,
    RemoveDuplicateFrames,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ValidateInputs => "validate inputs",
            Stage::CheckCompatibility => "check compatibility",
            Stage::StopRecording => "stop recording",
            Stage::VerifyStopped => "verify recording stopped",
            Stage::PullVideo => "pull video",
            Stage::RemoveDuplicateFrames => "remove duplicate frames",
        };
        f.write_str(name)
    }
}

/// A domain error tagged with the stage it aborted
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: DomainError,
}

impl StageError {
    pub fn new(stage: Stage, source: DomainError) -> Self {
        Self { stage, source }
    }
}
