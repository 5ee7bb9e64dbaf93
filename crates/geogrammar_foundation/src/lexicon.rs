//! A table-driven reference analyzer.
//!
//! `Lexicon` maps word forms to analyses and lemmas back to their forms. It
//! stands in for a real morphological analyzer in tests, benchmarks and
//! demos: it produces [`Token`]s from raw text and implements [`Inflector`]
//! over the forms it was given.

use std::collections::BTreeMap;

use crate::morph::{Gnc, Grammeme, Inflector};
use crate::token::{Analysis, Span, Token};
use crate::tokenizer::{SegmentKind, Tokenizer};

/// A registered word form.
#[derive(Clone, Debug)]
struct Form {
    text: String,
    analysis: Analysis,
}

/// In-memory word form table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// Lowercased surface form -> analyses, in registration order
    forms: BTreeMap<String, Vec<Analysis>>,
    /// Lemma -> every form registered for it
    paradigms: BTreeMap<String, Vec<Form>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one reading of a word form.
    ///
    /// Registering several readings of the same form keeps their order; that
    /// order is the enumeration order reported to the matcher.
    pub fn add(&mut self, form: &str, lemma: &str, grammemes: &[&str]) {
        let analysis = Analysis::new(lemma, grammemes.iter().map(|g| Grammeme::new(*g)));
        let key = form.to_lowercase();
        self.forms.entry(key.clone()).or_default().push(analysis.clone());
        self.paradigms
            .entry(lemma.to_string())
            .or_default()
            .push(Form {
                text: key,
                analysis,
            });
    }

    /// Builder form of [`Lexicon::add`].
    #[must_use]
    pub fn with(mut self, form: &str, lemma: &str, grammemes: &[&str]) -> Self {
        self.add(form, lemma, grammemes);
        self
    }

    /// Returns the analyses of a word form, ignoring case.
    #[must_use]
    pub fn lookup(&self, form: &str) -> Option<&[Analysis]> {
        self.forms.get(&form.to_lowercase()).map(Vec::as_slice)
    }

    /// Returns the number of distinct word forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Returns true if no forms are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Tokenizes and analyzes raw text.
    ///
    /// - Numbers get a single `INT` analysis
    /// - Punctuation gets a single `PUNCT` analysis
    /// - Unknown words get a single `UNKN` analysis (plus `LATN` for Latin script)
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        Tokenizer::segment(text)
            .into_iter()
            .map(|segment| {
                let analyses = match segment.kind {
                    SegmentKind::Number => {
                        vec![Analysis::new(segment.text, [Grammeme::INT, Grammeme::NUMBER])]
                    }
                    SegmentKind::Punct => vec![Analysis::new(segment.text, [Grammeme::PUNCT])],
                    SegmentKind::Word => self
                        .lookup(segment.text)
                        .map(<[Analysis]>::to_vec)
                        .unwrap_or_else(|| vec![Self::unknown(segment.text)]),
                };
                Token::new(
                    segment.text,
                    Span::new(segment.start, segment.end()),
                    analyses,
                )
            })
            .collect()
    }

    fn unknown(word: &str) -> Analysis {
        let mut tags = vec![Grammeme::UNKN];
        if word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            tags.push(Grammeme::LATN);
        }
        Analysis::new(word.to_lowercase(), tags)
    }
}

impl Inflector for Lexicon {
    /// Finds a registered form of the same lemma and part of speech whose
    /// gender, number and case equal `target`.
    fn inflect(&self, analysis: &Analysis, target: &Gnc) -> Option<String> {
        let pos = analysis.part_of_speech();
        self.paradigms
            .get(analysis.lemma())?
            .iter()
            .find(|form| form.analysis.part_of_speech() == pos && form.analysis.gnc() == *target)
            .map(|form| form.text.clone())
    }
}
