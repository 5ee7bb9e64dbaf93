//! Core types for geogrammar.
//!
//! This crate provides:
//! - [`Token`] and [`Analysis`] - The input unit the matcher consumes
//! - [`Grammeme`], [`Gender`], [`Number`], [`Case`], [`Gnc`] - Morphological tags
//! - [`Inflector`] - The inflection collaborator used for normalization
//! - [`Error`] - Rich error types with context
//! - [`Tokenizer`] and [`Lexicon`] - A small reference analyzer for tests and demos

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod lexicon;
pub mod morph;
pub mod token;
pub mod tokenizer;

pub use error::{ContractViolation, Error, ErrorContext, ErrorKind, Result, RuleDefect};
pub use lexicon::Lexicon;
pub use morph::{Case, Gender, Gnc, Grammeme, Inflector, NoInflection, Number};
pub use token::{Analysis, Span, Token};
pub use tokenizer::{Segment, SegmentKind, Tokenizer};
