//! The token model.
//!
//! Tokens are produced by an external tokenizer and morphological analyzer
//! and are consumed read-only by the matcher. A token's analyses keep the
//! analyzer's enumeration order, which the agreement resolver relies on for
//! its tie-break.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ContractViolation, Error, Result};
use crate::morph::{Gnc, Grammeme};

/// Byte range of a token in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns the smallest span covering both.
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// One morphological reading of a token.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    lemma: String,
    grammemes: Vec<Grammeme>,
    gnc: Gnc,
}

impl Analysis {
    /// Creates an analysis, deriving gender, number and case from the tags.
    ///
    /// Repeated tags are dropped; the first occurrence keeps its position.
    pub fn new<G>(lemma: impl Into<String>, grammemes: impl IntoIterator<Item = G>) -> Self
    where
        G: Into<Grammeme>,
    {
        let mut tags: Vec<Grammeme> = Vec::new();
        for tag in grammemes {
            let tag = tag.into();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        let gnc = Gnc::from_grammemes(&tags);
        Self {
            lemma: lemma.into(),
            grammemes: tags,
            gnc,
        }
    }

    /// Returns the canonical form.
    #[must_use]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Returns the tags in analyzer order.
    #[must_use]
    pub fn grammemes(&self) -> &[Grammeme] {
        &self.grammemes
    }

    /// Returns true if the analysis carries the tag.
    #[must_use]
    pub fn has(&self, grammeme: &Grammeme) -> bool {
        self.grammemes.contains(grammeme)
    }

    /// Returns the gender/number/case triple.
    #[must_use]
    pub fn gnc(&self) -> Gnc {
        self.gnc
    }

    /// Returns the first part-of-speech tag, if any.
    #[must_use]
    pub fn part_of_speech(&self) -> Option<&Grammeme> {
        self.grammemes.iter().find(|g| g.is_part_of_speech())
    }
}

impl fmt::Debug for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.lemma)?;
        for (i, tag) in self.grammemes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tag}")?;
        }
        f.write_str("]")
    }
}

/// A token of input text with its candidate analyses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    text: String,
    span: Span,
    analyses: Vec<Analysis>,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span, analyses: Vec<Analysis>) -> Self {
        Self {
            text: text.into(),
            span,
            analyses,
        }
    }

    /// Returns the surface text as it appeared in the input.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the byte span in the source text.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the analyses in analyzer order.
    #[must_use]
    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    /// Returns one analysis by index.
    #[must_use]
    pub fn analysis(&self, index: usize) -> Option<&Analysis> {
        self.analyses.get(index)
    }

    /// Returns true if the surface text starts with an uppercase letter.
    #[must_use]
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Returns the surface length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Parses the surface text as a non-negative integer.
    ///
    /// Returns `None` for anything other than a run of ASCII digits.
    #[must_use]
    pub fn as_integer(&self) -> Option<u64> {
        if self.text.is_empty() || !self.text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.text.parse().ok()
    }

    /// Checks the analyzer contract for this token.
    ///
    /// # Errors
    /// Returns an analyzer contract error naming `index` when the token has no
    /// analyses, no surface text, or an analysis with an empty lemma.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::analyzer_contract(index, ContractViolation::EmptySurface));
        }
        if self.analyses.is_empty() {
            return Err(Error::analyzer_contract(index, ContractViolation::NoAnalyses));
        }
        if let Some(analysis) = self.analyses.iter().position(|a| a.lemma.is_empty()) {
            return Err(Error::analyzer_contract(
                index,
                ContractViolation::EmptyLemma { analysis },
            ));
        }
        Ok(())
    }
}
