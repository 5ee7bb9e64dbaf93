//! Predicates, agreement resolution, rule algebra and matching for geogrammar.
//!
//! This crate provides:
//! - [`Predicate`] - Total tests over one token analysis
//! - [`AgreementState`] - Per-attempt gender/number/case constraint solving
//! - [`Step`], [`Alternation`], [`Sequence`] - Rule combinators and composition algebra
//! - [`RuleSet`] - Ordered, validated rule registry
//! - [`Matcher`] - Left-to-right, non-overlapping span discovery
//! - [`Interpreter`] - Normalization of matched spans into [`Entity`] records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agreement;
pub mod config;
pub mod interpret;
pub mod matcher;
pub mod predicate;
pub mod registry;
pub mod rule;
pub mod sequence;

pub use agreement::{Agreement, AgreementState, Candidate};
pub use config::{MatchStrategy, MatcherConfig};
pub use interpret::{Entity, Interpreter, Normalization};
pub use matcher::{Match, Matcher};
pub use predicate::{
    Comparison, Dictionary, Predicate, and, dictionary, eq, gram, gram_in, gram_not, gram_not_in,
    gt, gte, is_capitalized, length_eq, lt, lte, not, not_eq, or, surface_in,
};
pub use registry::{EntitySchema, Rule, RuleName, RuleSet, RuleSetBuilder};
pub use rule::{Alternation, Attribute, Element, Quantifier, Step, alternation};
pub use sequence::Sequence;
