//! Rule steps and combinators.
//!
//! A rule is a [`Sequence`] of [`Element`]s. An element is either a single
//! [`Step`] (a predicate conjunction over one token) or an [`Alternation`] of
//! sub-sequences tried in declared order. Both carry a [`Quantifier`].
//!
//! Steps are immutable once built and shared through `Arc`, so the same step
//! template can appear in many rules.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use geogrammar_foundation::Token;

use crate::agreement::Agreement;
use crate::interpret::Normalization;
use crate::predicate::{Predicate, and};
use crate::sequence::Sequence;

// =============================================================================
// Quantifiers
// =============================================================================

/// How many times an element may match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Exactly once.
    #[default]
    Required,
    /// Zero or one time; skipped without advancing on failure.
    Optional,
    /// One or more times, greedy.
    Repeatable,
    /// Zero or more times, greedy.
    OptionalRepeatable,
}

impl Quantifier {
    /// Returns true if the element may match zero times.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::OptionalRepeatable)
    }

    /// Returns true if the element may match more than once.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Repeatable | Self::OptionalRepeatable)
    }

    /// Returns the quantifier with zero matches allowed.
    #[must_use]
    pub const fn optional(self) -> Self {
        if self.is_repeatable() {
            Self::OptionalRepeatable
        } else {
            Self::Optional
        }
    }

    /// Returns the quantifier with repetition allowed.
    #[must_use]
    pub const fn repeatable(self) -> Self {
        if self.is_optional() {
            Self::OptionalRepeatable
        } else {
            Self::Repeatable
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// An output slot of an entity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Attribute(&'static str);

impl Attribute {
    /// Creates an attribute.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// =============================================================================
// Steps
// =============================================================================

/// One token-level element of a rule.
///
/// Built fluently:
///
/// ```
/// use geogrammar_engine::{Agreement, Attribute, Step, gram};
/// use geogrammar_foundation::Grammeme;
///
/// const NAME: Attribute = Attribute::new("Name");
///
/// let step = Step::when([gram(Grammeme::ADJF)])
///     .agree(Agreement::PREVIOUS)
///     .optional()
///     .repeatable()
///     .attribute(NAME)
///     .inflected();
/// assert!(step.quantifier().is_repeatable());
/// ```
#[derive(Clone, Debug)]
pub struct Step {
    label: Option<&'static str>,
    predicate: Predicate,
    quantifier: Quantifier,
    agreement: Option<Agreement>,
    attribute: Option<Attribute>,
    normalization: Normalization,
}

impl Step {
    /// Creates a required step whose predicates must all hold on one analysis.
    pub fn when(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut predicates: Vec<Predicate> = predicates.into_iter().collect();
        let predicate = if predicates.len() == 1 {
            predicates.remove(0)
        } else {
            and(predicates)
        };
        Self {
            label: None,
            predicate,
            quantifier: Quantifier::Required,
            agreement: None,
            attribute: None,
            normalization: Normalization::Original,
        }
    }

    /// Names the step in diagnostics.
    #[must_use]
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Allows the step to be skipped.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.quantifier = self.quantifier.optional();
        self
    }

    /// Allows the step to match several consecutive tokens.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.quantifier = self.quantifier.repeatable();
        self
    }

    /// Requires the token to agree in gender, number and case with an
    /// earlier token of the match.
    #[must_use]
    pub fn agree(mut self, agreement: Agreement) -> Self {
        self.agreement = Some(agreement);
        self
    }

    /// Writes the step's text into `attribute`.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Sets the normalization mode.
    #[must_use]
    pub fn normalize(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Shorthand for [`Normalization::Inflected`].
    #[must_use]
    pub fn inflected(self) -> Self {
        self.normalize(Normalization::Inflected)
    }

    /// Shorthand for [`Normalization::Original`].
    #[must_use]
    pub fn original(self) -> Self {
        self.normalize(Normalization::Original)
    }

    /// Shorthand for [`Normalization::Canonical`].
    #[must_use]
    pub fn canonical(self) -> Self {
        self.normalize(Normalization::Canonical)
    }

    /// Returns the diagnostic label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.label
    }

    /// Returns the step predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns the quantifier.
    #[must_use]
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// Returns the agreement constraint.
    #[must_use]
    pub fn agreement(&self) -> Option<Agreement> {
        self.agreement
    }

    /// Returns the target attribute.
    #[must_use]
    pub fn target(&self) -> Option<Attribute> {
        self.attribute
    }

    /// Returns the normalization mode.
    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Returns the analyses of `token` this step accepts.
    #[must_use]
    pub fn viable(&self, token: &Token) -> Vec<usize> {
        self.predicate.viable(token)
    }

    /// Describes the step for diagnostics: its label, or its position.
    #[must_use]
    pub fn describe(&self, position: usize) -> String {
        self.label
            .map_or_else(|| format!("#{position}"), ToString::to_string)
    }
}

// =============================================================================
// Elements
// =============================================================================

/// Ordered choice between sub-sequences.
#[derive(Clone, Debug)]
pub struct Alternation {
    branches: Vec<Sequence>,
    quantifier: Quantifier,
}

impl Alternation {
    /// Creates a required alternation.
    pub fn new(branches: impl IntoIterator<Item = Sequence>) -> Self {
        Self {
            branches: branches.into_iter().collect(),
            quantifier: Quantifier::Required,
        }
    }

    /// Allows the alternation to be skipped.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.quantifier = self.quantifier.optional();
        self
    }

    /// Allows the alternation to match several times in a row.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.quantifier = self.quantifier.repeatable();
        self
    }

    /// Returns the branches in priority order.
    #[must_use]
    pub fn branches(&self) -> &[Sequence] {
        &self.branches
    }

    /// Returns the quantifier.
    #[must_use]
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }
}

/// One element of a rule sequence.
#[derive(Clone, Debug)]
pub enum Element {
    /// A single-token step.
    Step(Arc<Step>),
    /// An ordered choice between sub-sequences.
    Alternation(Arc<Alternation>),
}

impl Element {
    /// Returns the element's quantifier.
    #[must_use]
    pub fn quantifier(&self) -> Quantifier {
        match self {
            Self::Step(step) => step.quantifier(),
            Self::Alternation(alt) => alt.quantifier(),
        }
    }
}

impl From<Step> for Element {
    fn from(step: Step) -> Self {
        Self::Step(Arc::new(step))
    }
}

impl From<Arc<Step>> for Element {
    fn from(step: Arc<Step>) -> Self {
        Self::Step(step)
    }
}

impl From<Alternation> for Element {
    fn from(alt: Alternation) -> Self {
        Self::Alternation(Arc::new(alt))
    }
}

/// Builds a required alternation element from branches.
pub fn alternation(branches: impl IntoIterator<Item = Sequence>) -> Alternation {
    Alternation::new(branches)
}
