//! Error types for geogrammar.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! A rule that simply does not match is never an error; only defects in the
//! rule corpus and in the analyzer's output are reported here.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout geogrammar.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for geogrammar operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed rule error.
    #[must_use]
    pub fn malformed_rule(rule: impl Into<String>, defect: RuleDefect) -> Self {
        Self::new(ErrorKind::MalformedRule {
            rule: rule.into(),
            defect,
        })
    }

    /// Creates an analyzer contract violation error.
    #[must_use]
    pub fn analyzer_contract(token: usize, violation: ContractViolation) -> Self {
        Self::new(ErrorKind::AnalyzerContract { token, violation })
    }

    /// Creates an unknown rule error.
    #[must_use]
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRule(name.into()))
    }

    /// Returns true if this error was raised while building a rule set.
    #[must_use]
    pub fn is_malformed_rule(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedRule { .. })
    }

    /// Returns true if this error signals a defect in the analyzer output.
    #[must_use]
    pub fn is_analyzer_contract(&self) -> bool {
        matches!(self.kind, ErrorKind::AnalyzerContract { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule failed validation when the rule set was built.
    #[error("malformed rule {rule}: {defect}")]
    MalformedRule {
        /// Name of the offending rule.
        rule: String,
        /// What is wrong with it.
        defect: RuleDefect,
    },

    /// The analyzer produced a token the matcher cannot consume.
    #[error("analyzer contract violated at token {token}: {violation}")]
    AnalyzerContract {
        /// Index of the offending token in the document.
        token: usize,
        /// What is wrong with it.
        violation: ContractViolation,
    },

    /// A rule was looked up by a name the rule set does not contain.
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// Structural defects detected while validating a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDefect {
    /// The rule (or one of its alternation branches) has no elements.
    Empty,
    /// An alternation was declared without branches.
    EmptyAlternation,
    /// Another rule with the same name was registered first.
    DuplicateName,
    /// A step writes into an attribute the entity type does not accept.
    UnknownAttribute {
        /// Label of the offending step.
        step: String,
        /// The attribute that has no sink.
        attribute: String,
        /// The entity type of the rule.
        entity: String,
    },
    /// A step asks to agree with a token outside the rule's reach.
    AgreementOutOfBounds {
        /// Label of the offending step.
        step: String,
        /// Human-readable form of the agreement reference.
        reference: String,
    },
}

impl fmt::Display for RuleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rule has no elements"),
            Self::EmptyAlternation => write!(f, "alternation has no branches"),
            Self::DuplicateName => write!(f, "rule name registered twice"),
            Self::UnknownAttribute {
                step,
                attribute,
                entity,
            } => write!(
                f,
                "step {step} writes attribute {attribute}, which {entity} does not accept"
            ),
            Self::AgreementOutOfBounds { step, reference } => {
                write!(f, "step {step} agrees with {reference}, outside the rule")
            }
        }
    }
}

/// Ways a token can break the analyzer contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The token carries no morphological analyses.
    NoAnalyses,
    /// An analysis has an empty lemma.
    EmptyLemma {
        /// Index of the analysis within the token.
        analysis: usize,
    },
    /// The token's surface text is empty.
    EmptySurface,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnalyses => write!(f, "token has no analyses"),
            Self::EmptyLemma { analysis } => write!(f, "analysis {analysis} has an empty lemma"),
            Self::EmptySurface => write!(f, "token has empty surface text"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Document the error was raised for.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        Ok(())
    }
}
