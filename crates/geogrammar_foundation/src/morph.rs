//! Morphological tags.
//!
//! Grammemes follow the OpenCorpora tag set (`ADJF`, `NOUN`, `gent`, `masc`, ...).
//! Gender, number and case are additionally parsed out of an analysis' tags so
//! the agreement resolver can compare them without string matching.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::Analysis;

/// A single morphological tag.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grammeme(Cow<'static, str>);

impl Grammeme {
    /// Full adjective.
    pub const ADJF: Self = Self::from_static("ADJF");
    /// Noun.
    pub const NOUN: Self = Self::from_static("NOUN");
    /// Integer number token.
    pub const INT: Self = Self::from_static("INT");
    /// Number token.
    pub const NUMBER: Self = Self::from_static("NUMBER");
    /// Punctuation.
    pub const PUNCT: Self = Self::from_static("PUNCT");
    /// Quote character.
    pub const QUOTE: Self = Self::from_static("QUOTE");
    /// Latin-script word.
    pub const LATN: Self = Self::from_static("LATN");
    /// Word unknown to the analyzer.
    pub const UNKN: Self = Self::from_static("UNKN");
    /// Abbreviation.
    pub const ABBR: Self = Self::from_static("Abbr");
    /// Toponym.
    pub const GEOX: Self = Self::from_static("Geox");
    /// Possible adjective.
    pub const ADJX: Self = Self::from_static("Adjx");
    /// Genitive case.
    pub const GENT: Self = Self::from_static("gent");

    /// Parts of speech, in the order the reference lexicon reports them.
    pub const PARTS_OF_SPEECH: &'static [&'static str] = &[
        "NOUN", "ADJF", "ADJS", "COMP", "VERB", "INFN", "PRTF", "PRTS", "GRND", "NUMR", "ADVB",
        "NPRO", "PRED", "PREP", "CONJ", "PRCL", "INTJ", "INT", "PUNCT",
    ];

    /// Creates a grammeme from a static string.
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Creates a grammeme from any string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this grammeme names a part of speech.
    #[must_use]
    pub fn is_part_of_speech(&self) -> bool {
        Self::PARTS_OF_SPEECH.contains(&self.as_str())
    }
}

impl fmt::Debug for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Grammeme {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for Grammeme {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

// =============================================================================
// Gender / Number / Case
// =============================================================================

/// Grammatical gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// `masc`
    Masculine,
    /// `femn`
    Feminine,
    /// `neut`
    Neuter,
    /// `Ms-f`, agrees with both masculine and feminine.
    Common,
}

impl Gender {
    /// Parses a gender grammeme.
    #[must_use]
    pub fn from_grammeme(tag: &str) -> Option<Self> {
        match tag {
            "masc" => Some(Self::Masculine),
            "femn" => Some(Self::Feminine),
            "neut" => Some(Self::Neuter),
            "Ms-f" => Some(Self::Common),
            _ => None,
        }
    }

    /// Returns the grammeme for this gender.
    #[must_use]
    pub const fn grammeme(self) -> &'static str {
        match self {
            Self::Masculine => "masc",
            Self::Feminine => "femn",
            Self::Neuter => "neut",
            Self::Common => "Ms-f",
        }
    }

    /// Returns true if the two genders may appear in one agreeing phrase.
    #[must_use]
    pub fn agrees(self, other: Self) -> bool {
        self == other
            || matches!(
                (self, other),
                (Self::Common, Self::Masculine | Self::Feminine)
                    | (Self::Masculine | Self::Feminine, Self::Common)
            )
    }
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// `sing`
    Singular,
    /// `plur`
    Plural,
}

impl Number {
    /// Parses a number grammeme.
    #[must_use]
    pub fn from_grammeme(tag: &str) -> Option<Self> {
        match tag {
            "sing" => Some(Self::Singular),
            "plur" => Some(Self::Plural),
            _ => None,
        }
    }

    /// Returns the grammeme for this number.
    #[must_use]
    pub const fn grammeme(self) -> &'static str {
        match self {
            Self::Singular => "sing",
            Self::Plural => "plur",
        }
    }
}

/// Grammatical case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Case {
    /// `nomn`
    Nominative,
    /// `gent`
    Genitive,
    /// `datv`
    Dative,
    /// `accs`
    Accusative,
    /// `ablt`
    Instrumental,
    /// `loct`
    Prepositional,
    /// `voct`
    Vocative,
    /// `gen2`
    SecondGenitive,
    /// `acc2`
    SecondAccusative,
    /// `loc2`
    SecondPrepositional,
}

impl Case {
    /// Parses a case grammeme.
    #[must_use]
    pub fn from_grammeme(tag: &str) -> Option<Self> {
        match tag {
            "nomn" => Some(Self::Nominative),
            "gent" => Some(Self::Genitive),
            "datv" => Some(Self::Dative),
            "accs" => Some(Self::Accusative),
            "ablt" => Some(Self::Instrumental),
            "loct" => Some(Self::Prepositional),
            "voct" => Some(Self::Vocative),
            "gen2" => Some(Self::SecondGenitive),
            "acc2" => Some(Self::SecondAccusative),
            "loc2" => Some(Self::SecondPrepositional),
            _ => None,
        }
    }

    /// Returns the grammeme for this case.
    #[must_use]
    pub const fn grammeme(self) -> &'static str {
        match self {
            Self::Nominative => "nomn",
            Self::Genitive => "gent",
            Self::Dative => "datv",
            Self::Accusative => "accs",
            Self::Instrumental => "ablt",
            Self::Prepositional => "loct",
            Self::Vocative => "voct",
            Self::SecondGenitive => "gen2",
            Self::SecondAccusative => "acc2",
            Self::SecondPrepositional => "loc2",
        }
    }
}

/// Gender, number and case of one analysis.
///
/// Each component is optional: plural adjectives carry no gender, numbers and
/// punctuation carry nothing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gnc {
    /// Grammatical gender.
    pub gender: Option<Gender>,
    /// Grammatical number.
    pub number: Option<Number>,
    /// Grammatical case.
    pub case: Option<Case>,
}

impl Gnc {
    /// Creates a fully specified triple.
    #[must_use]
    pub const fn new(gender: Gender, number: Number, case: Case) -> Self {
        Self {
            gender: Some(gender),
            number: Some(number),
            case: Some(case),
        }
    }

    /// Collects gender, number and case out of a tag list.
    ///
    /// When a tag list names the same category twice the first tag wins.
    pub fn from_grammemes<'a>(tags: impl IntoIterator<Item = &'a Grammeme>) -> Self {
        let mut gnc = Self::default();
        for tag in tags {
            let tag = tag.as_str();
            if gnc.gender.is_none() {
                gnc.gender = Gender::from_grammeme(tag);
            }
            if gnc.number.is_none() {
                gnc.number = Number::from_grammeme(tag);
            }
            if gnc.case.is_none() {
                gnc.case = Case::from_grammeme(tag);
            }
        }
        gnc
    }

    /// Returns the same triple with the case replaced.
    #[must_use]
    pub const fn with_case(self, case: Case) -> Self {
        Self {
            case: Some(case),
            ..self
        }
    }

    /// Returns true if `self` and `other` agree in gender, number and case.
    ///
    /// Components missing on either side do not constrain. Plural neutralises
    /// gender.
    #[must_use]
    pub fn agrees(&self, other: &Self) -> bool {
        let number = match (self.number, other.number) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        let case = match (self.case, other.case) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        let plural = self.number == Some(Number::Plural) || other.number == Some(Number::Plural);
        let gender = plural
            || match (self.gender, other.gender) {
                (Some(a), Some(b)) => a.agrees(b),
                _ => true,
            };
        number && case && gender
    }
}

impl fmt::Display for Gnc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.gender.map(Gender::grammeme),
            self.number.map(Number::grammeme),
            self.case.map(Case::grammeme),
        ];
        let mut first = true;
        for part in parts.into_iter().flatten() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Inflection collaborator
// =============================================================================

/// Produces inflected word forms.
///
/// Implemented by the external morphological analyzer. Returning `None` means
/// the analyzer has no form for the requested grammemes; callers fall back to
/// the surface text.
pub trait Inflector {
    /// Inflects the word described by `analysis` into the `target` triple.
    fn inflect(&self, analysis: &Analysis, target: &Gnc) -> Option<String>;
}

/// An inflector that knows no forms.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInflection;

impl Inflector for NoInflection {
    fn inflect(&self, _analysis: &Analysis, _target: &Gnc) -> Option<String> {
        None
    }
}

impl<T: Inflector + ?Sized> Inflector for &T {
    fn inflect(&self, analysis: &Analysis, target: &Gnc) -> Option<String> {
        (**self).inflect(analysis, target)
    }
}
