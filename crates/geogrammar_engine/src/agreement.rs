//! Gender/number/case agreement resolution.
//!
//! During one match attempt every consumed token contributes its viable
//! analyses. A step carrying an [`Agreement`] links its token to one earlier
//! token, so the links of an attempt always form a forest. Each token keeps
//! the candidates that still take part in some agreeing assignment of its
//! tree; admitting a token filters its candidates against its anchor and
//! prunes the rest of the tree until every surviving candidate is supported
//! across every link. Admission therefore never searches, and resolution picks,
//! in token order, the first surviving candidate that agrees with its anchor's
//! choice. That is the first consistent assignment in token order and, per
//! token, in analyzer order.
//!
//! The state is a persistent value. Trial paths (optional steps, alternation
//! branches, repetitions) work on cheap clones, and the whole state is dropped
//! when the attempt ends, so resolved choices never leak into other attempts.

use std::fmt;

use im::Vector;

use geogrammar_foundation::{Gnc, Token};

/// Which earlier token a step must agree with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Agreement {
    /// The token `n` positions back in the attempt (`1` = the previous token).
    Previous(usize),
    /// The `k`-th token consumed by the attempt (`0` = the first).
    Start(usize),
}

impl Agreement {
    /// Agree with the previous token.
    pub const PREVIOUS: Self = Self::Previous(1);

    /// Agree with the first token of the match.
    pub const FIRST: Self = Self::Start(0);

    /// Resolves the reference to an attempt-relative position, given the
    /// position of the token being admitted.
    #[must_use]
    pub fn anchor(self, position: usize) -> Option<usize> {
        match self {
            Self::Previous(0) => None,
            Self::Previous(n) => position.checked_sub(n),
            Self::Start(k) => (k < position).then_some(k),
        }
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous(n) => write!(f, "token -{n}"),
            Self::Start(k) => write!(f, "token {k} of the match"),
        }
    }
}

/// One viable analysis of a consumed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the analysis within its token.
    pub analysis: usize,
    /// Gender/number/case of that analysis.
    pub gnc: Gnc,
}

impl Candidate {
    /// Collects the candidates of `token` restricted to `viable` indices.
    #[must_use]
    pub fn from_viable(token: &Token, viable: &[usize]) -> Vec<Self> {
        viable
            .iter()
            .filter_map(|&i| {
                token.analysis(i).map(|a| Self {
                    analysis: i,
                    gnc: a.gnc(),
                })
            })
            .collect()
    }
}

/// Per-attempt agreement bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct AgreementState {
    /// Surviving candidates per consumed token, attempt-relative
    candidates: Vector<Vec<Candidate>>,
    /// The earlier token each consumed token agrees with
    anchors: Vector<Option<usize>>,
    /// The later tokens agreeing with each consumed token
    dependents: Vector<Vec<usize>>,
}

impl AgreementState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of consumed tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if no token has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the linked position pairs `(earlier, later)`.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.anchors
            .iter()
            .enumerate()
            .filter_map(|(later, &anchor)| anchor.map(|earlier| (earlier, later)))
    }

    /// Admits the next consumed token.
    ///
    /// Returns the extended state, or `None` when the token has no viable
    /// candidates, the reference points outside the attempt, or none of its
    /// candidates agrees with a surviving candidate of the anchor. `None` is
    /// an ordinary mismatch.
    #[must_use]
    pub fn admit(&self, candidates: Vec<Candidate>, constraint: Option<Agreement>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        let position = self.len();
        let mut next = self.clone();
        let Some(constraint) = constraint else {
            next.push(candidates, None);
            return Some(next);
        };

        let anchor = constraint.anchor(position)?;
        let supported: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| next.supported(candidate, anchor))
            .collect();
        if supported.is_empty() {
            return None;
        }
        next.push(supported, Some(anchor));
        if let Some(dependents) = next.dependents.get_mut(anchor) {
            dependents.push(position);
        }
        next.propagate(position)?;
        Some(next)
    }

    /// Chooses one analysis per consumed token.
    ///
    /// Anchors precede their dependents, so walking in token order always
    /// sees the anchor's choice first. Tokens without an anchor take their
    /// first surviving candidate.
    #[must_use]
    pub fn resolve(&self) -> Vec<usize> {
        let mut chosen: Vec<Option<Candidate>> = Vec::with_capacity(self.len());
        for (candidates, &anchor) in self.candidates.iter().zip(self.anchors.iter()) {
            let parent = anchor.and_then(|a| chosen[a]);
            let pick = candidates
                .iter()
                .find(|c| parent.is_none_or(|p| c.gnc.agrees(&p.gnc)))
                .or_else(|| candidates.first())
                .copied();
            chosen.push(pick);
        }
        chosen
            .into_iter()
            .map(|c| c.map_or(0, |c| c.analysis))
            .collect()
    }

    fn push(&mut self, candidates: Vec<Candidate>, anchor: Option<usize>) {
        self.candidates.push_back(candidates);
        self.anchors.push_back(anchor);
        self.dependents.push_back(Vec::new());
    }

    fn supported(&self, candidate: &Candidate, neighbour: usize) -> bool {
        self.candidates[neighbour]
            .iter()
            .any(|other| candidate.gnc.agrees(&other.gnc))
    }

    /// Re-checks the neighbours of `changed` until every surviving candidate
    /// has support across each of its links.
    fn propagate(&mut self, changed: usize) -> Option<()> {
        let mut pending = vec![changed];
        while let Some(position) = pending.pop() {
            let anchor: Option<usize> = self.anchors[position];
            let neighbours: Vec<usize> = anchor
                .into_iter()
                .chain(self.dependents[position].iter().copied())
                .collect();
            for neighbour in neighbours {
                if self.prune(neighbour, position)? {
                    pending.push(neighbour);
                }
            }
        }
        Some(())
    }

    /// Drops the candidates of `position` without support in `neighbour`.
    /// Returns whether anything was dropped, or `None` if nothing survives.
    fn prune(&mut self, position: usize, neighbour: usize) -> Option<bool> {
        let current = &self.candidates[position];
        let kept: Vec<Candidate> = current
            .iter()
            .filter(|c| self.supported(c, neighbour))
            .copied()
            .collect();
        if kept.is_empty() {
            return None;
        }
        if kept.len() == current.len() {
            return Some(false);
        }
        self.candidates[position] = kept;
        Some(true)
    }
}
