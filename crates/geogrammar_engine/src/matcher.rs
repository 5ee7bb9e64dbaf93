//! The matcher.
//!
//! Scans a document left to right. At every start position each rule is
//! attempted in priority order; the configured [`MatchStrategy`] picks the
//! winner, which consumes its span, and scanning resumes right after it.
//! Positions where nothing matches are skipped one token at a time.
//!
//! An attempt is a value: cursor, agreement state and captures. Optional
//! elements, alternation branches and repetitions are tried on clones, so a
//! failed path leaves nothing behind. Captures live in a persistent vector to
//! keep those clones cheap.

use std::ops::Range;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use geogrammar_foundation::{ErrorContext, Inflector, NoInflection, Result, Span, Token};
use im::Vector;
use tracing::{debug, trace, warn};

use crate::agreement::{AgreementState, Candidate};
use crate::config::{MatchStrategy, MatcherConfig};
use crate::interpret::{Capture, Entity, Interpreter};
use crate::registry::{Rule, RuleName, RuleSet};
use crate::rule::Element;
use crate::sequence::Sequence;

// =============================================================================
// Matches
// =============================================================================

/// One extracted entity and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Match {
    rule: RuleName,
    entity: Entity,
    tokens: Range<usize>,
    span: Span,
    resolved: Vec<(usize, usize)>,
    agreements: Vec<(usize, usize)>,
}

impl Match {
    /// Returns the name of the rule that matched.
    #[must_use]
    pub fn rule(&self) -> &RuleName {
        &self.rule
    }

    /// Returns the extracted entity.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the entity type name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.entity.kind()
    }

    /// Returns the matched token range, including skipped-over punctuation
    /// that steps consumed without an attribute.
    #[must_use]
    pub fn tokens(&self) -> Range<usize> {
        self.tokens.clone()
    }

    /// Returns the byte span in the source text.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `(token, analysis)` for every consumed token, in token order.
    #[must_use]
    pub fn resolved(&self) -> &[(usize, usize)] {
        &self.resolved
    }

    /// Returns the resolved analysis index of one token of the match.
    #[must_use]
    pub fn analysis_of(&self, token: usize) -> Option<usize> {
        self.resolved
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, a)| *a)
    }

    /// Returns the token pairs `(earlier, later)` required to agree.
    #[must_use]
    pub fn agreements(&self) -> &[(usize, usize)] {
        &self.agreements
    }
}

// =============================================================================
// Attempts
// =============================================================================

#[derive(Clone, Debug)]
struct Attempt {
    /// Next document token to consume
    cursor: usize,
    agreement: AgreementState,
    captures: Vector<Capture>,
}

impl Attempt {
    fn new(start: usize) -> Self {
        Self {
            cursor: start,
            agreement: AgreementState::new(),
            captures: Vector::new(),
        }
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// Runs a rule set over token streams.
///
/// A matcher holds only immutable data; one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct Matcher<I = NoInflection> {
    rules: RuleSet,
    inflector: I,
    config: MatcherConfig,
}

impl Matcher<NoInflection> {
    /// Creates a matcher whose inflected attributes keep their surface text.
    #[must_use]
    pub fn without_inflection(rules: RuleSet) -> Self {
        Self::new(rules, NoInflection)
    }
}

impl<I: Inflector> Matcher<I> {
    /// Creates a matcher with the default configuration.
    #[must_use]
    pub fn new(rules: RuleSet, inflector: I) -> Self {
        Self {
            rules,
            inflector,
            config: MatcherConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Finds all non-overlapping matches in one document.
    ///
    /// # Errors
    /// Returns an analyzer contract error if any token is unusable. The
    /// document is rejected as a whole; no matches are reported for it.
    pub fn find_all(&self, tokens: &[Token]) -> Result<Vec<Match>> {
        for (index, token) in tokens.iter().enumerate() {
            if let Err(err) = token.validate(index) {
                warn!(token = index, error = %err, "rejecting document");
                return Err(err);
            }
        }

        let mut matches = Vec::new();
        let mut start = 0;
        while start < tokens.len() {
            match self.match_at(tokens, start) {
                Some(found) => {
                    start = found.tokens.end;
                    matches.push(found);
                }
                None => start += 1,
            }
        }
        Ok(matches)
    }

    /// Matches several documents independently.
    ///
    /// A document that breaks the analyzer contract yields an `Err` in its
    /// slot; the others are still processed.
    pub fn find_batch(&self, documents: &[&[Token]]) -> Vec<Result<Vec<Match>>> {
        documents
            .iter()
            .enumerate()
            .map(|(index, tokens)| {
                self.find_all(tokens).map_err(|err| {
                    let context = ErrorContext::new().with_source(format!("document {index}"));
                    err.with_context(context)
                })
            })
            .collect()
    }

    /// Picks the winning rule at one start position and builds its match.
    fn match_at(&self, tokens: &[Token], start: usize) -> Option<Match> {
        let mut best: Option<(&Arc<Rule>, Attempt)> = None;

        for rule in &self.rules {
            trace!(rule = %rule.name(), start, "attempt");
            let Some(attempt) = self.match_sequence(tokens, rule.sequence(), Attempt::new(start))
            else {
                continue;
            };
            // A match must consume at least one token.
            if attempt.cursor == start {
                continue;
            }
            match self.config.strategy {
                MatchStrategy::FirstDeclared => {
                    best = Some((rule, attempt));
                    break;
                }
                MatchStrategy::Longest => {
                    if best.as_ref().is_none_or(|(_, b)| attempt.cursor > b.cursor) {
                        best = Some((rule, attempt));
                    }
                }
            }
        }

        let (rule, attempt) = best?;
        Some(self.finish(tokens, start, rule, &attempt))
    }

    fn finish(&self, tokens: &[Token], start: usize, rule: &Rule, attempt: &Attempt) -> Match {
        let chosen = attempt.agreement.resolve();
        let interpreter = Interpreter::new(&self.inflector, &self.config);
        let entity = interpreter.build(rule.schema().name(), tokens, &attempt.captures, &chosen);

        let token_of = |position: usize| attempt.captures[position].token;
        let resolved = attempt
            .captures
            .iter()
            .zip(&chosen)
            .map(|(capture, &analysis)| (capture.token, analysis))
            .collect();
        let agreements = attempt
            .agreement
            .links()
            .map(|(earlier, later)| (token_of(earlier), token_of(later)))
            .collect();

        let end = attempt.cursor;
        let span = tokens[start].span().cover(tokens[end - 1].span());
        debug!(rule = %rule.name(), start, end, entity = %entity, "match");

        Match {
            rule: rule.name().clone(),
            entity,
            tokens: start..end,
            span,
            resolved,
            agreements,
        }
    }

    fn match_sequence(
        &self,
        tokens: &[Token],
        sequence: &Sequence,
        attempt: Attempt,
    ) -> Option<Attempt> {
        sequence
            .iter()
            .try_fold(attempt, |attempt, element| self.match_element(tokens, element, attempt))
    }

    /// Applies an element with its quantifier.
    ///
    /// Repetition is greedy and never gives back repetitions: if a later
    /// element fails, fewer repetitions are not retried.
    fn match_element(
        &self,
        tokens: &[Token],
        element: &Element,
        attempt: Attempt,
    ) -> Option<Attempt> {
        let quantifier = element.quantifier();
        let Some(mut current) = self.match_once(tokens, element, &attempt) else {
            return quantifier.is_optional().then_some(attempt);
        };
        if quantifier.is_repeatable() {
            let mut count = 1;
            while count < self.config.max_repeat {
                let Some(next) = self.match_once(tokens, element, &current) else {
                    break;
                };
                if next.cursor == current.cursor {
                    break;
                }
                current = next;
                count += 1;
            }
        }
        Some(current)
    }

    fn match_once(
        &self,
        tokens: &[Token],
        element: &Element,
        attempt: &Attempt,
    ) -> Option<Attempt> {
        match element {
            Element::Step(step) => {
                let token = tokens.get(attempt.cursor)?;
                let viable = step.viable(token);
                let candidates = Candidate::from_viable(token, &viable);
                let agreement = attempt.agreement.admit(candidates, step.agreement())?;
                let mut captures = attempt.captures.clone();
                captures.push_back(Capture {
                    token: attempt.cursor,
                    step: Arc::clone(step),
                });
                Some(Attempt {
                    cursor: attempt.cursor + 1,
                    agreement,
                    captures,
                })
            }
            Element::Alternation(alt) => alt
                .branches()
                .iter()
                .find_map(|branch| self.match_sequence(tokens, branch, attempt.clone())),
        }
    }
}
