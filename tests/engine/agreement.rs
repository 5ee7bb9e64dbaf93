//! Integration tests for agreement resolution
//!
//! Tests candidate admission, group solving and deterministic tie-breaks.

use geogrammar::engine::{
    Agreement, AgreementState, Attribute, Candidate, Dictionary, EntitySchema, Matcher, RuleSet,
    Step, dictionary, gram, seq,
};
use geogrammar::foundation::{Case, Grammeme, Lexicon, Number, Token};

use crate::support::tokens;

fn all(token: &Token) -> Vec<Candidate> {
    let viable: Vec<usize> = (0..token.analyses().len()).collect();
    Candidate::from_viable(token, &viable)
}

fn admit_all(tokens: &[Token], constraint: Option<Agreement>) -> Option<AgreementState> {
    tokens.iter().try_fold(AgreementState::new(), |state, token| {
        let constraint = if state.is_empty() { None } else { constraint };
        state.admit(all(token), constraint)
    })
}

#[test]
fn chain_resolves_to_genitive_reading() {
    let tokens = tokens("Центрального федерального округа");
    let state = admit_all(&tokens, Some(Agreement::PREVIOUS)).unwrap();
    let chosen = state.resolve();
    let case = tokens[2].analyses()[chosen[2]].gnc().case;
    assert_eq!(case, Some(Case::Genitive));
    assert_eq!(state.links().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

#[test]
fn first_consistent_assignment_wins() {
    // Both adjective readings agree; the masculine one is listed first.
    let tokens = tokens("центрального округа");
    let chosen = admit_all(&tokens, Some(Agreement::PREVIOUS)).unwrap().resolve();
    assert_eq!(chosen, vec![0, 0]);
}

#[test]
fn plural_pair_agrees_without_gender() {
    let tokens = tokens("Красных Десантников");
    let state = admit_all(&tokens, Some(Agreement::PREVIOUS)).unwrap();
    let chosen = state.resolve();
    assert_eq!(
        tokens[1].analyses()[chosen[1]].gnc().number,
        Some(Number::Plural)
    );
}

#[test]
fn disagreeing_pair_is_rejected() {
    let tokens = tokens("Зеленый улица");
    assert!(admit_all(&tokens, Some(Agreement::PREVIOUS)).is_none());
    assert!(admit_all(&tokens, None).is_some());
}

#[test]
fn restricting_candidates_changes_the_outcome() {
    // Only the nominative plural reading of "округа" is offered.
    let tokens = tokens("центрального округа");
    let nominative: Vec<usize> = tokens[1]
        .analyses()
        .iter()
        .enumerate()
        .filter(|(_, a)| a.has(&Grammeme::new("nomn")))
        .map(|(i, _)| i)
        .collect();
    let state = AgreementState::new().admit(all(&tokens[0]), None).unwrap();
    let candidates = Candidate::from_viable(&tokens[1], &nominative);
    assert!(state.admit(candidates, Some(Agreement::PREVIOUS)).is_none());
}

#[test]
fn predicate_viability_feeds_candidates() {
    let districts = Dictionary::new("district", ["округ"]);
    let tokens = tokens("округа");
    let viable = dictionary(&districts).viable(&tokens[0]);
    assert_eq!(viable, vec![0, 1]);
    let genitive = gram(Grammeme::GENT).viable(&tokens[0]);
    assert_eq!(genitive, vec![0]);
}

#[test]
fn references_outside_the_attempt_fail() {
    let tokens = tokens("улица");
    let state = AgreementState::new();
    assert!(state.admit(all(&tokens[0]), Some(Agreement::PREVIOUS)).is_none());
    assert!(state.admit(all(&tokens[0]), Some(Agreement::Previous(0))).is_none());
    assert_eq!(Agreement::FIRST.anchor(0), None);
    assert_eq!(Agreement::FIRST.anchor(3), Some(0));
    assert_eq!(Agreement::Previous(2).anchor(3), Some(1));
}

// =============================================================================
// Long Chains
// =============================================================================

const NAME: Attribute = Attribute::new("Name");
const CHAIN: EntitySchema = EntitySchema::new("Chain", &[NAME]);

fn twin_readings() -> Lexicon {
    Lexicon::new()
        .with("x", "a", &["ADJF", "masc", "sing", "nomn"])
        .with("x", "b", &["ADJF", "masc", "sing", "nomn"])
        .with("улица", "улица", &["NOUN", "inan", "femn", "sing", "nomn"])
        .with("дом", "дом", &["NOUN", "inan", "masc", "sing", "nomn"])
}

fn chain_matcher() -> Matcher<Lexicon> {
    let rules = RuleSet::builder()
        .add(
            "Chain",
            CHAIN,
            seq![
                Step::when([gram(Grammeme::ADJF)]).attribute(NAME),
                Step::when([gram(Grammeme::ADJF)])
                    .agree(Agreement::PREVIOUS)
                    .optional()
                    .repeatable(),
                Step::when([gram(Grammeme::NOUN)]).agree(Agreement::PREVIOUS),
            ],
        )
        .build()
        .unwrap();
    Matcher::new(rules, twin_readings())
}

fn chain_text(adjectives: usize, noun: &str) -> String {
    let mut words = vec!["x"; adjectives];
    words.push(noun);
    words.join(" ")
}

#[test]
fn disagreeing_noun_after_long_ambiguous_chain() {
    let matcher = chain_matcher();
    let tokens = twin_readings().analyze(&chain_text(60, "улица"));
    assert!(matcher.find_all(&tokens).unwrap().is_empty());
}

#[test]
fn agreeing_noun_after_long_ambiguous_chain() {
    let matcher = chain_matcher();
    let tokens = twin_readings().analyze(&chain_text(60, "дом"));
    let matches = matcher.find_all(&tokens).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].tokens(), 0..61);
    assert!(matches[0].resolved().iter().all(|&(_, analysis)| analysis == 0));
}
