//! Integration tests for the tokenizer and reference lexicon
//!
//! Tests segmentation, analysis lookup and inflection.

use geogrammar::foundation::{Case, Gender, Gnc, Grammeme, Inflector, Number, Tokenizer};

use crate::support::{lexicon, tokens};

fn texts(input: &str) -> Vec<&str> {
    Tokenizer::segment(input).into_iter().map(|s| s.text).collect()
}

// =============================================================================
// Segmentation
// =============================================================================

#[test]
fn segment_address() {
    assert_eq!(
        texts("ул. Садовая, д. 7 литер А"),
        vec!["ул", ".", "Садовая", ",", "д", ".", "7", "литер", "А"]
    );
}

#[test]
fn segment_ordinal_prefix_splits_digits_from_suffix() {
    assert_eq!(texts("1-я Новорублевская"), vec!["1", "-", "я", "Новорублевская"]);
}

#[test]
fn segment_keeps_hyphenated_words() {
    assert_eq!(texts("Ханты-Мансийский АО"), vec!["Ханты-Мансийский", "АО"]);
}

// =============================================================================
// Analysis
// =============================================================================

#[test]
fn analyze_keeps_every_reading_in_order() {
    let tokens = tokens("Центрального федерального округа");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].analyses().len(), 2);
    assert_eq!(tokens[2].analyses()[0].gnc().case, Some(Case::Genitive));
    assert_eq!(tokens[2].analyses()[1].gnc().case, Some(Case::Nominative));
    assert!(tokens[0].is_capitalized());
    assert_eq!(tokens[0].text(), "Центрального");
    assert_eq!(tokens[0].analyses()[0].lemma(), "центральный");
}

#[test]
fn analyze_marks_numbers_and_unknown_words() {
    let tokens = tokens("дом 7 литер А");
    assert_eq!(tokens[1].as_integer(), Some(7));
    assert!(tokens[1].analyses()[0].has(&Grammeme::INT));
    assert!(tokens[3].analyses()[0].has(&Grammeme::UNKN));
    assert!(!tokens[3].analyses()[0].has(&Grammeme::LATN));
    assert_eq!(tokens[3].char_len(), 1);
}

#[test]
fn analyze_spans_are_byte_offsets() {
    let tokens = tokens("1-я улица");
    assert_eq!(tokens[0].span().end, tokens[1].span().start);
    assert_eq!(tokens[1].span().end, tokens[2].span().start);
    assert!(tokens[2].span().end < tokens[3].span().start);
}

// =============================================================================
// Inflection
// =============================================================================

#[test]
fn inflect_genitive_to_nominative() {
    let lex = lexicon();
    let tokens = lex.analyze("центрального округа");
    let target = Gnc::new(Gender::Masculine, Number::Singular, Case::Nominative);
    assert_eq!(
        lex.inflect(&tokens[0].analyses()[0], &target),
        Some("центральный".to_string())
    );
    assert_eq!(
        lex.inflect(&tokens[1].analyses()[0], &target),
        Some("округ".to_string())
    );
}

#[test]
fn inflect_plural_ignores_gender() {
    let lex = lexicon();
    let tokens = lex.analyze("красных");
    let target = tokens[0].analyses()[0].gnc().with_case(Case::Nominative);
    assert_eq!(target.gender, None);
    assert_eq!(
        lex.inflect(&tokens[0].analyses()[0], &target),
        Some("красные".to_string())
    );
}

#[test]
fn inflect_unknown_form_is_none() {
    let lex = lexicon();
    let tokens = lex.analyze("лет");
    let target = Gnc::new(Gender::Masculine, Number::Plural, Case::Nominative);
    assert_eq!(lex.inflect(&tokens[0].analyses()[0], &target), None);
}
