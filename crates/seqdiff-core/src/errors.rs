use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

// ========== Error Facility ==========

/// Classification of everything that can go wrong around a diff
///
/// The `code()` strings are what log consumers see in `err.code` and must
/// not change once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A byte or character that names none of the four tags
    InvalidTag,
    /// A span that does not fit the sequences it is applied to
    InvariantViolation,
    /// Options that cannot be parsed or fail validation
    InvalidConfig,
    /// The engine broke one of its own guarantees
    Internal,
}

impl ExErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTag => "ERR_INVALID_TAG",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Error value carried into logs and across crate boundaries
///
/// Wraps a kind with the operation that failed, a readable message and,
/// for engine defects, the error that exposed the defect.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
    cause: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            cause: None,
        }
    }

    /// Name the operation that failed, e.g. `diff.blocks`
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the lower-level error; exposed through [`std::error::Error::source`].
    pub fn with_source(mut self, cause: ExError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Shorthand for `self.kind().code()`
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for seqdiff operations
///
/// Diffing itself never fails; these variants cover tag conversion,
/// materialization of caller-supplied spans, and option loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Numeric tag value outside the four defined tags
    #[error("Invalid tag value: {value}")]
    InvalidTag { value: u8 },

    /// Character that is not one of `=`, `+`, `-`, `%`
    #[error("Invalid tag symbol: {symbol:?}")]
    InvalidSymbol { symbol: char },

    /// Span range is inverted or ends past its sequence
    #[error(
        "Span {span} does not fit sequences of length {a_len} and {b_len}"
    )]
    SpanOutOfBounds {
        span: String,
        a_len: usize,
        b_len: usize,
    },

    /// Diff options are malformed or out of range
    #[error("Invalid diff options: {reason}")]
    InvalidConfig { reason: String },
}

impl From<DiffError> for ExError {
    fn from(err: DiffError) -> Self {
        let message = err.to_string();
        match err {
            DiffError::InvalidTag { .. } | DiffError::InvalidSymbol { .. } => {
                ExError::new(ExErrorKind::InvalidTag)
                    .with_op("tag_conversion")
                    .with_message(message)
            }
            DiffError::SpanOutOfBounds { .. } => ExError::new(ExErrorKind::InvariantViolation)
                .with_op("block_for")
                .with_message(message),
            DiffError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_options")
                .with_message(message),
        }
    }
}
