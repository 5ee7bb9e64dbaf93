//! Predicate library.
//!
//! Predicates are atomic boolean tests over one token. They are evaluated
//! against a `(token, analysis)` pair: morphological tests look at the
//! analysis, surface tests look at the token text and ignore the analysis.
//! A step's predicate therefore selects which of a token's analyses remain
//! viable, and the agreement resolver only ever chooses among those.
//!
//! Every predicate is total. A numeric comparison on a word, or a length test
//! on an empty token, simply fails.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use geogrammar_foundation::{Analysis, Grammeme, Token};

// =============================================================================
// Dictionaries
// =============================================================================

/// An immutable word set, optionally mapping each word to a canonical form.
///
/// Cloning is O(1); clones share the same table.
#[derive(Clone)]
pub struct Dictionary {
    name: &'static str,
    entries: Arc<BTreeMap<String, Option<String>>>,
}

impl Dictionary {
    /// Creates a plain word set.
    pub fn new<'a>(name: &'static str, words: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = words.into_iter().map(|w| (w.to_string(), None)).collect();
        Self {
            name,
            entries: Arc::new(entries),
        }
    }

    /// Creates a word set where every word expands to a canonical form.
    pub fn with_canonical<'a>(
        name: &'static str,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(w, c)| (w.to_string(), Some(c.to_string())))
            .collect();
        Self {
            name,
            entries: Arc::new(entries),
        }
    }

    /// Returns the dictionary name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the word is in the set.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Returns the canonical form registered for the word.
    #[must_use]
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.entries.get(word)?.as_deref()
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dictionary({}, {} words)", self.name, self.entries.len())
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Numeric comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

impl Comparison {
    fn holds(self, value: u64, bound: u64) -> bool {
        match self {
            Self::Gt => value > bound,
            Self::Gte => value >= bound,
            Self::Lt => value < bound,
            Self::Lte => value <= bound,
        }
    }
}

/// A test over one token.
#[derive(Clone, Debug)]
pub enum Predicate {
    /// The analysis carries the grammeme.
    Gram(Grammeme),
    /// The analysis carries at least one of the grammemes.
    GramIn(Vec<Grammeme>),
    /// The analysis lemma is in the dictionary.
    Lemma(Dictionary),
    /// The surface text is in the dictionary.
    Surface(Dictionary),
    /// The surface text equals the literal.
    Eq(Cow<'static, str>),
    /// The surface text is an integer satisfying the comparison.
    Compare(Comparison, u64),
    /// The surface text has exactly this many characters.
    LengthEq(usize),
    /// The surface text is (or is not) capitalized.
    Capitalized(bool),
    /// Every predicate holds. An empty conjunction always holds.
    And(Vec<Predicate>),
    /// At least one predicate holds.
    Or(Vec<Predicate>),
    /// The predicate does not hold.
    Not(Box<Predicate>),
}

impl Predicate {
    /// A predicate that accepts every analysis.
    #[must_use]
    pub fn always() -> Self {
        Self::And(Vec::new())
    }

    /// Evaluates the predicate for one analysis of a token.
    #[must_use]
    pub fn test(&self, token: &Token, analysis: &Analysis) -> bool {
        match self {
            Self::Gram(g) => analysis.has(g),
            Self::GramIn(gs) => gs.iter().any(|g| analysis.has(g)),
            Self::Lemma(dict) => dict.contains(analysis.lemma()),
            Self::Surface(dict) => dict.contains(token.text()),
            Self::Eq(literal) => token.text() == literal.as_ref(),
            Self::Compare(op, bound) => token.as_integer().is_some_and(|v| op.holds(v, *bound)),
            Self::LengthEq(n) => token.char_len() == *n,
            Self::Capitalized(expected) => token.is_capitalized() == *expected,
            Self::And(ps) => ps.iter().all(|p| p.test(token, analysis)),
            Self::Or(ps) => ps.iter().any(|p| p.test(token, analysis)),
            Self::Not(p) => !p.test(token, analysis),
        }
    }

    /// Returns the indices of the token's analyses that satisfy the predicate,
    /// in analyzer order.
    #[must_use]
    pub fn viable(&self, token: &Token) -> Vec<usize> {
        token
            .analyses()
            .iter()
            .enumerate()
            .filter(|(_, analysis)| self.test(token, analysis))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the canonical form a dictionary in this predicate assigns to
    /// the token, looking at the lemma for lemma dictionaries and at the
    /// surface for surface dictionaries. Negated branches are not searched.
    #[must_use]
    pub fn canonical<'a>(&'a self, token: &Token, analysis: &Analysis) -> Option<&'a str> {
        match self {
            Self::Lemma(dict) => dict.canonical(analysis.lemma()),
            Self::Surface(dict) => dict.canonical(token.text()),
            Self::And(ps) | Self::Or(ps) => ps.iter().find_map(|p| p.canonical(token, analysis)),
            _ => None,
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// The analysis carries `grammeme`.
#[must_use]
pub fn gram(grammeme: Grammeme) -> Predicate {
    Predicate::Gram(grammeme)
}

/// The analysis does not carry `grammeme`.
#[must_use]
pub fn gram_not(grammeme: Grammeme) -> Predicate {
    not(gram(grammeme))
}

/// The analysis carries any of `grammemes`.
pub fn gram_in(grammemes: impl IntoIterator<Item = Grammeme>) -> Predicate {
    Predicate::GramIn(grammemes.into_iter().collect())
}

/// The analysis carries none of `grammemes`.
pub fn gram_not_in(grammemes: impl IntoIterator<Item = Grammeme>) -> Predicate {
    not(gram_in(grammemes))
}

/// The analysis lemma is in `dict`.
#[must_use]
pub fn dictionary(dict: &Dictionary) -> Predicate {
    Predicate::Lemma(dict.clone())
}

/// The surface text is in `dict`.
#[must_use]
pub fn surface_in(dict: &Dictionary) -> Predicate {
    Predicate::Surface(dict.clone())
}

/// The surface text equals `literal`.
pub fn eq(literal: impl Into<Cow<'static, str>>) -> Predicate {
    Predicate::Eq(literal.into())
}

/// The surface text differs from `literal`.
pub fn not_eq(literal: impl Into<Cow<'static, str>>) -> Predicate {
    not(eq(literal))
}

/// The token is an integer `>= bound`.
#[must_use]
pub fn gte(bound: u64) -> Predicate {
    Predicate::Compare(Comparison::Gte, bound)
}

/// The token is an integer `> bound`.
#[must_use]
pub fn gt(bound: u64) -> Predicate {
    Predicate::Compare(Comparison::Gt, bound)
}

/// The token is an integer `<= bound`.
#[must_use]
pub fn lte(bound: u64) -> Predicate {
    Predicate::Compare(Comparison::Lte, bound)
}

/// The token is an integer `< bound`.
#[must_use]
pub fn lt(bound: u64) -> Predicate {
    Predicate::Compare(Comparison::Lt, bound)
}

/// The surface text has exactly `n` characters.
#[must_use]
pub fn length_eq(n: usize) -> Predicate {
    Predicate::LengthEq(n)
}

/// The surface text is capitalized (`true`) or not (`false`).
#[must_use]
pub fn is_capitalized(expected: bool) -> Predicate {
    Predicate::Capitalized(expected)
}

/// Every predicate holds.
pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::And(predicates.into_iter().collect())
}

/// At least one predicate holds.
pub fn or(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::Or(predicates.into_iter().collect())
}

/// The predicate does not hold.
#[must_use]
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}
