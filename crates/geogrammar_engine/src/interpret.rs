//! Interpretation: folding a matched span into an entity.
//!
//! Every consumed token whose step declares an attribute contributes one
//! normalized string. Strings landing in the same attribute are joined in
//! step order. The entity is built only after the whole rule has matched, so
//! a failed attempt never leaves a partial entity behind.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use geogrammar_foundation::{Analysis, Inflector, Token};

use crate::config::MatcherConfig;
use crate::rule::{Attribute, Step};

/// How a step's token text is rewritten before it is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// The surface text, unchanged.
    #[default]
    Original,
    /// The resolved analysis inflected to the configured target case,
    /// keeping its gender and number.
    Inflected,
    /// The full word a dictionary assigns to an abbreviation (`ул` -> `улица`).
    Canonical,
}

/// The structured output of one match.
///
/// Attributes keep the order in which the rule first wrote them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Entity {
    kind: &'static str,
    attributes: Vec<(Attribute, String)>,
}

impl Entity {
    /// Creates an entity without attributes.
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    /// Returns the entity type name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the text of one attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, text)| text.as_str())
    }

    /// Returns true if the attribute is present.
    #[must_use]
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.get(attribute).is_some()
    }

    /// Iterates `(attribute, text)` pairs in first-written order.
    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.attributes.iter().map(|(a, text)| (*a, text.as_str()))
    }

    /// Returns the number of attributes present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attribute was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.kind)?;
        for (i, (attribute, text)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {attribute}: {text:?}")?;
        }
        f.write_str(" }")
    }
}

/// A token consumed by a step during a match attempt.
#[derive(Clone, Debug)]
pub(crate) struct Capture {
    /// Index of the token in the document
    pub(crate) token: usize,
    /// The step that consumed it
    pub(crate) step: Arc<Step>,
}

/// Builds entities from captures.
///
/// Texts written into the same attribute are joined with a single space when
/// their source tokens are separated by whitespace, and concatenated when the
/// tokens touch in the source text, so `1`, `-`, `я` rejoin as `1-я`.
pub struct Interpreter<'a, I: ?Sized> {
    inflector: &'a I,
    config: &'a MatcherConfig,
}

impl<'a, I: Inflector + ?Sized> Interpreter<'a, I> {
    /// Creates an interpreter over an inflector and configuration.
    #[must_use]
    pub fn new(inflector: &'a I, config: &'a MatcherConfig) -> Self {
        Self { inflector, config }
    }

    /// Normalizes one token under `step`'s mode, using its resolved analysis.
    #[must_use]
    pub fn normalize(&self, step: &Step, token: &Token, analysis: &Analysis) -> String {
        match step.normalization() {
            Normalization::Original => token.text().to_string(),
            Normalization::Inflected => {
                let target = analysis.gnc().with_case(self.config.target_case);
                match self.inflector.inflect(analysis, &target) {
                    Some(form) => self.recapitalize(token, form),
                    None => token.text().to_string(),
                }
            }
            Normalization::Canonical => {
                let word = step
                    .predicate()
                    .canonical(token, analysis)
                    .unwrap_or_else(|| analysis.lemma())
                    .to_string();
                self.recapitalize(token, word)
            }
        }
    }

    /// Builds the entity for a successful match.
    ///
    /// `chosen` holds the resolved analysis index of every capture, in
    /// capture order.
    pub(crate) fn build<'c>(
        &self,
        kind: &'static str,
        tokens: &[Token],
        captures: impl IntoIterator<Item = &'c Capture>,
        chosen: &[usize],
    ) -> Entity {
        let mut entity = Entity::new(kind);
        // Last token written into each attribute, parallel to entity.attributes.
        let mut last: Vec<usize> = Vec::new();

        for (capture, &analysis) in captures.into_iter().zip(chosen) {
            let Some(attribute) = capture.step.target() else {
                continue;
            };
            let token = &tokens[capture.token];
            let Some(reading) = token.analysis(analysis) else {
                continue;
            };
            let text = self.normalize(&capture.step, token, reading);

            match entity.attributes.iter().position(|(a, _)| *a == attribute) {
                Some(slot) => {
                    let previous = &tokens[last[slot]];
                    if previous.span().end < token.span().start {
                        entity.attributes[slot].1.push(' ');
                    }
                    entity.attributes[slot].1.push_str(&text);
                    last[slot] = capture.token;
                }
                None => {
                    entity.attributes.push((attribute, text));
                    last.push(capture.token);
                }
            }
        }
        entity
    }

    fn recapitalize(&self, token: &Token, form: String) -> String {
        if !(self.config.preserve_capitalization && token.is_capitalized()) {
            return form;
        }
        // An unchanged form keeps the surface casing (`Ханты-Мансийский`).
        if form.to_lowercase() == token.text().to_lowercase() {
            return token.text().to_string();
        }
        let mut chars = form.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => form,
        }
    }
}
