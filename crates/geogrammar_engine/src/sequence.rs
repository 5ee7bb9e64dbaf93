//! Rule composition algebra.
//!
//! New rules are built from fragments of existing ones: prefix and suffix
//! slices, the last element, concatenation. A [`Sequence`] is backed by a
//! persistent vector, so every derived sequence shares its elements (and the
//! `Arc`ed steps inside them) with the sequences it was cut from.

use std::ops::{Add, Bound, RangeBounds};

use im::Vector;

use crate::rule::{Alternation, Element, Step};

/// An immutable, structurally shared sequence of rule elements.
#[derive(Clone, Debug, Default)]
pub struct Sequence(Vector<Element>);

impl Sequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns one element by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    /// Iterates the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.0.iter()
    }

    /// Returns the elements in `range`.
    ///
    /// Bounds past the end are clamped and an inverted range yields an empty
    /// sequence, so `slice(1..)` of a one-element sequence is empty rather than
    /// a panic.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let len = self.0.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .clamp(start, len);
        let mut elements = self.0.clone();
        Self(elements.slice(start..end))
    }

    /// Returns a sequence holding only the last element.
    #[must_use]
    pub fn last(&self) -> Self {
        self.slice(self.len().saturating_sub(1)..)
    }

    /// Returns the sequence without its last element.
    #[must_use]
    pub fn without_last(&self) -> Self {
        self.slice(..self.len().saturating_sub(1))
    }

    /// Returns `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = self.0.clone();
        elements.append(other.0.clone());
        Self(elements)
    }

    /// Appends one element.
    #[must_use]
    pub fn then(&self, element: impl Into<Element>) -> Self {
        let mut elements = self.0.clone();
        elements.push_back(element.into());
        Self(elements)
    }
}

impl From<Element> for Sequence {
    fn from(element: Element) -> Self {
        Self(Vector::unit(element))
    }
}

impl From<Step> for Sequence {
    fn from(step: Step) -> Self {
        Self::from(Element::from(step))
    }
}

impl From<Alternation> for Sequence {
    fn from(alt: Alternation) -> Self {
        Self::from(Element::from(alt))
    }
}

impl From<&Sequence> for Sequence {
    fn from(sequence: &Sequence) -> Self {
        sequence.clone()
    }
}

impl FromIterator<Element> for Sequence {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = im::vector::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for Sequence {
    type Output = Sequence;

    fn add(self, rhs: Sequence) -> Sequence {
        self.concat(&rhs)
    }
}

impl Add<&Sequence> for Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.concat(rhs)
    }
}

impl Add<&Sequence> for &Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.concat(rhs)
    }
}

/// Builds a [`Sequence`](crate::Sequence) from steps, alternations and other
/// sequences, concatenated in order.
///
/// ```
/// use geogrammar_engine::{Sequence, Step, eq, seq};
///
/// let dot = Step::when([eq(".")]).optional();
/// let comma = Sequence::from(Step::when([eq(",")]));
/// let rule = seq![Step::when([eq("ул")]), dot, &comma];
/// assert_eq!(rule.len(), 3);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($part:expr),+ $(,)?) => {{
        let mut sequence = $crate::Sequence::new();
        $(
            sequence = sequence.concat(&$crate::Sequence::from($part));
        )+
        sequence
    }};
}
