use cmdseq_core_types::schema::{OP_EXECUTE, OP_REGISTER, OP_RESOLVE, OP_VALIDATE};
use cmdseq_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CmdSeqError
pub type Result<T> = std::result::Result<T, CmdSeqError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// test assertions and process-level reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Registration
    InvalidDescriptor,
    DuplicateCommand,

    // Resolution
    UnknownCommand,

    // Order validation
    EmptyCommandSet,
    IndependenceConflict,
    InvalidOrder,

    // Execution
    ActionFailed,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDescriptor => "ERR_INVALID_DESCRIPTOR",
            ExErrorKind::DuplicateCommand => "ERR_DUPLICATE_COMMAND",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::EmptyCommandSet => "ERR_EMPTY_COMMAND_SET",
            ExErrorKind::IndependenceConflict => "ERR_INDEPENDENCE_CONFLICT",
            ExErrorKind::InvalidOrder => "ERR_INVALID_ORDER",
            ExErrorKind::ActionFailed => "ERR_ACTION_FAILED",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the failure happened before any action could run
    ///
    /// Everything except `ActionFailed` aborts a request before execution.
    pub fn is_pre_execution(&self) -> bool {
        !matches!(self, ExErrorKind::ActionFailed)
    }
}

/// Canonical structured error type
///
/// Carries the classification of a failure plus the context needed to
/// report it: the operation, the command involved, request correlation
/// and, for conflicts, the full list of offending commands.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            request_id: None,
            message: String::new(),
            source: None,
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the command name the error refers to
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.command = Some(name.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Add the names of every command involved in a conflict
    pub fn with_candidates(mut self, names: Vec<String>) -> Self {
        self.candidates = Some(names);
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Offending command names, if any (populated on IndependenceConflict)
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error returned by a command's own action
///
/// Actions are opaque to the core; this type only carries what the action
/// chose to report. The executor propagates it untouched as the `source` of
/// [`CmdSeqError::ActionFailed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for ActionError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Error taxonomy for registration, resolution, validation and execution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CmdSeqError {
    // ===== Registration Errors =====
    /// Descriptor cannot be registered (empty name)
    #[error("Invalid command descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// Name already registered and the registry rejects duplicates
    #[error("Command already registered: {name}")]
    DuplicateCommand { name: String },

    // ===== Resolution Errors =====
    /// Requested name is not in the registry
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    // ===== Validation Errors =====
    /// No command names were supplied
    #[error("No commands were specified")]
    EmptyCommandSet,

    /// Independent commands were requested together with others
    #[error(
        "The following commands are independent and cannot run together with others: {}",
        .commands.join(", ")
    )]
    IndependenceConflict { commands: Vec<String> },

    /// Priorities are not non-decreasing in request order
    #[error(
        "Invalid command order: '{before}' (priority {before_priority}) cannot run before '{after}' (priority {after_priority})"
    )]
    InvalidOrder {
        before: String,
        before_priority: i64,
        after: String,
        after_priority: i64,
    },

    // ===== Execution Errors =====
    /// A command's action reported a failure
    #[error("Command '{command}' failed: {source}")]
    ActionFailed {
        command: String,
        #[source]
        source: ActionError,
    },

    // ===== Internal Errors =====
    /// Invocation state machine was driven through an illegal transition
    #[error("Illegal invocation state transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },
}

impl CmdSeqError {
    /// Classification of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CmdSeqError::InvalidDescriptor { .. } => ExErrorKind::InvalidDescriptor,
            CmdSeqError::DuplicateCommand { .. } => ExErrorKind::DuplicateCommand,
            CmdSeqError::UnknownCommand { .. } => ExErrorKind::UnknownCommand,
            CmdSeqError::EmptyCommandSet => ExErrorKind::EmptyCommandSet,
            CmdSeqError::IndependenceConflict { .. } => ExErrorKind::IndependenceConflict,
            CmdSeqError::InvalidOrder { .. } => ExErrorKind::InvalidOrder,
            CmdSeqError::ActionFailed { .. } => ExErrorKind::ActionFailed,
            CmdSeqError::IllegalTransition { .. } => ExErrorKind::Internal,
        }
    }
}

impl From<CmdSeqError> for ExError {
    fn from(err: CmdSeqError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let base = ExError::new(kind).with_message(message);

        match err {
            CmdSeqError::InvalidDescriptor { .. } => base.with_op(OP_REGISTER),
            CmdSeqError::DuplicateCommand { name } => base.with_op(OP_REGISTER).with_command(name),
            CmdSeqError::UnknownCommand { name } => base.with_op(OP_RESOLVE).with_command(name),
            CmdSeqError::EmptyCommandSet => base.with_op(OP_VALIDATE),
            CmdSeqError::IndependenceConflict { commands } => {
                base.with_op(OP_VALIDATE).with_candidates(commands)
            }
            CmdSeqError::InvalidOrder { before, after, .. } => base
                .with_op(OP_VALIDATE)
                .with_command(after)
                .with_candidates(vec![before]),
            CmdSeqError::ActionFailed { command, source } => base
                .with_op(OP_EXECUTE)
                .with_command(command)
                .with_source(ExError::new(ExErrorKind::ActionFailed).with_message(source.message)),
            CmdSeqError::IllegalTransition { .. } => base,
        }
    }
}
