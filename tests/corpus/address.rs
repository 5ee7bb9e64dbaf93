//! Integration tests for the address family

use geogrammar::corpus::schema::{
    HOUSE_NUMBER, HOUSE_NUMBER_DESCRIPTOR, HOUSE_NUMBER_LETTER, STREET_DESCRIPTOR, STREET_NAME,
};

use crate::support::{extract, extract_one, extract_with, lexicon};

// =============================================================================
// Streets
// =============================================================================

#[test]
fn abbreviated_descriptor_is_expanded() {
    let found = extract_one("ул. Садовая");
    assert_eq!(found.rule().as_str(), "AdjShort");
    assert_eq!(found.kind(), "Address");
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
    assert_eq!(found.entity().get(STREET_NAME), Some("Садовая"));
}

#[test]
fn abbreviated_descriptor_without_dot() {
    let found = extract_one("ул Садовая");
    assert_eq!(found.rule().as_str(), "AdjShort");
    assert_eq!(found.tokens(), 0..2);
}

#[test]
fn optional_dot_does_not_change_the_entity() {
    let with_dot = extract_one("ул. Садовая");
    let without_dot = extract_one("ул Садовая");
    assert_eq!(with_dot.rule(), without_dot.rule());
    assert_eq!(with_dot.entity(), without_dot.entity());
}

#[test]
fn surface_only_abbreviation() {
    let found = extract_one("пер. Садовый");
    assert_eq!(found.rule().as_str(), "AdjShort");
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("переулок"));
    assert_eq!(found.entity().get(STREET_NAME), Some("Садовый"));
}

#[test]
fn adjective_before_descriptor() {
    let found = extract_one("Садовая улица");
    assert_eq!(found.rule().as_str(), "AdjFull");
    assert_eq!(
        found.entity().to_string(),
        r#"Address { Street_Name: "Садовая", Street_Descriptor: "улица" }"#
    );
}

#[test]
fn adjective_after_descriptor() {
    let found = extract_one("улица Садовая");
    assert_eq!(found.rule().as_str(), "AdjFullReversed");
    assert_eq!(found.entity().get(STREET_NAME), Some("Садовая"));
}

#[test]
fn adjective_gender_mismatch_is_rejected() {
    assert!(extract("Зеленый улица").is_empty());
}

#[test]
fn adjective_and_genitive_noun() {
    let found = extract_one("улица Красных Десантников");
    assert_eq!(found.rule().as_str(), "AdjNounFull");
    assert_eq!(found.entity().get(STREET_NAME), Some("Красные Десантники"));
}

#[test]
fn genitive_name_keeps_original_text() {
    let found = extract_one("улица Карла Маркса");
    assert_eq!(found.rule().as_str(), "GentFullReversed");
    assert_eq!(found.entity().get(STREET_NAME), Some("Карла Маркса"));
}

#[test]
fn genitive_name_with_initial() {
    let lexicon = lexicon().with("к", "к", &["NOUN", "Abbr", "Init"]);
    let matches = extract_with(lexicon, "улица К. Маркса");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].rule().as_str(), "GentFullReversedWithShortcut");
    assert_eq!(matches[0].entity().get(STREET_NAME), Some("К Маркса"));
}

#[test]
fn numeric_prefix_before_genitive_chain() {
    let found = extract_one("проспект 50 лет октября");
    assert_eq!(found.rule().as_str(), "GentFullReversedWithNumericPrefix");
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("проспект"));
    assert_eq!(found.entity().get(STREET_NAME), Some("50 лет октября"));
}

#[test]
fn ordinal_prefix_joins_without_spaces() {
    let found = extract_one("1-я Новорублевская улица");
    assert_eq!(found.rule().as_str(), "AdjFullWithNumericPart");
    assert_eq!(found.entity().get(STREET_NAME), Some("1-я Новорублевская"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

// =============================================================================
// Composed Streets
// =============================================================================

#[test]
fn adjective_before_short_descriptor() {
    let found = extract_one("Садовая ул.");
    assert_eq!(found.rule().as_str(), "AdjShortReversed");
    assert_eq!(found.tokens(), 0..3);
    assert_eq!(found.entity().get(STREET_NAME), Some("Садовая"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn short_descriptor_with_adjective_and_genitive_noun() {
    let found = extract_one("ул. Красных Десантников");
    assert_eq!(found.rule().as_str(), "AdjNounShort");
    assert_eq!(found.entity().get(STREET_NAME), Some("Красные Десантники"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn short_descriptor_before_genitive_name() {
    let found = extract_one("пр. Маршала Жукова");
    assert_eq!(found.rule().as_str(), "GentShortReversed");
    assert_eq!(found.tokens(), 0..4);
    assert_eq!(found.entity().get(STREET_NAME), Some("Маршала Жукова"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("проспект"));
}

#[test]
fn short_descriptor_before_initial_and_name() {
    let lexicon = lexicon().with("к", "к", &["NOUN", "Abbr", "Init"]);
    let matches = extract_with(lexicon, "пр. К. Маркса");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].rule().as_str(), "GentShortReversedWithShortcut");
    assert_eq!(matches[0].entity().get(STREET_NAME), Some("К Маркса"));
    assert_eq!(matches[0].entity().get(STREET_DESCRIPTOR), Some("проспект"));
}

#[test]
fn short_descriptor_before_two_initials_and_name() {
    let lexicon = lexicon()
        .with("пл", "пл", &["NOUN", "inan", "femn", "Abbr", "sing", "nomn"])
        .with("в", "в", &["NOUN", "Abbr", "Init"])
        .with("и", "и", &["NOUN", "Abbr", "Init"]);
    let matches = extract_with(lexicon, "пл. В. И. Ленина");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].rule().as_str(),
        "GentShortReversedWithExtendedShortcut"
    );
    assert_eq!(matches[0].tokens(), 0..7);
    assert_eq!(matches[0].entity().get(STREET_NAME), Some("В И Ленина"));
    assert_eq!(matches[0].entity().get(STREET_DESCRIPTOR), Some("площадь"));
}

#[test]
fn genitive_name_before_full_descriptor() {
    let found = extract_one("Николая Ершова улица");
    assert_eq!(found.rule().as_str(), "GentFull");
    assert_eq!(found.entity().get(STREET_NAME), Some("Николая Ершова"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn genitive_name_before_short_descriptor() {
    let found = extract_one("Обуховской Обороны пр-кт");
    assert_eq!(found.rule().as_str(), "GentShort");
    assert_eq!(found.tokens(), 0..3);
    assert_eq!(found.entity().get(STREET_NAME), Some("Обуховской Обороны"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("проспект"));
}

#[test]
fn descriptor_before_ordinal_and_adjective() {
    let found = extract_one("улица 1-я Новорублевская");
    assert_eq!(found.rule().as_str(), "AdjFullReversedWithNumericPart");
    assert_eq!(found.tokens(), 0..5);
    assert_eq!(found.entity().get(STREET_NAME), Some("1-я Новорублевская"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn ordinal_and_adjective_before_short_descriptor() {
    let found = extract_one("1-я Новорублевская ул.");
    assert_eq!(found.rule().as_str(), "AdjShortWithNumericPart");
    assert_eq!(found.tokens(), 0..6);
    assert_eq!(found.entity().get(STREET_NAME), Some("1-я Новорублевская"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn short_descriptor_before_ordinal_and_adjective() {
    let found = extract_one("ул. 1-я Промышленная");
    assert_eq!(found.rule().as_str(), "AdjShortReversedWithNumericPart");
    assert_eq!(found.tokens(), 0..6);
    assert_eq!(found.entity().get(STREET_NAME), Some("1-я Промышленная"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

#[test]
fn short_descriptor_before_numeric_prefix() {
    let found = extract_one("пр. 50 лет Октября");
    assert_eq!(found.rule().as_str(), "GentShortReversedWithNumericPrefix");
    assert_eq!(found.tokens(), 0..5);
    assert_eq!(found.entity().get(STREET_NAME), Some("50 лет Октября"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("проспект"));
}

#[test]
fn ordinal_split_by_full_descriptor() {
    let found = extract_one("2-ой проезд Перова Поля");
    assert_eq!(found.rule().as_str(), "GentNumericSplittedByFullDescriptor");
    assert_eq!(found.tokens(), 0..6);
    assert_eq!(found.entity().get(STREET_NAME), Some("2-ой Перова Поля"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("проезд"));
}

#[test]
fn ordinal_split_by_short_descriptor() {
    let found = extract_one("7-я ул. Текстильщиков");
    assert_eq!(found.rule().as_str(), "GentNumericSplittedByShortDescriptor");
    assert_eq!(found.tokens(), 0..6);
    assert_eq!(found.entity().get(STREET_NAME), Some("7-я Текстильщиков"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
}

// =============================================================================
// Houses
// =============================================================================

#[test]
fn street_with_house_number() {
    let found = extract_one("Зеленая улица, дом 7");
    assert_eq!(found.rule().as_str(), "AdjFullWithHn");
    assert_eq!(found.tokens(), 0..5);
    assert_eq!(found.entity().get(STREET_NAME), Some("Зеленая"));
    assert_eq!(found.entity().get(STREET_DESCRIPTOR), Some("улица"));
    assert_eq!(found.entity().get(HOUSE_NUMBER_DESCRIPTOR), Some("дом"));
    assert_eq!(found.entity().get(HOUSE_NUMBER), Some("7"));
}

#[test]
fn abbreviated_house_descriptor() {
    let found = extract_one("ул. Садовая, д. 7");
    assert_eq!(found.rule().as_str(), "AdjShortWithHn");
    assert_eq!(found.entity().get(HOUSE_NUMBER_DESCRIPTOR), Some("д"));
    assert_eq!(found.entity().get(HOUSE_NUMBER), Some("7"));
}

#[test]
fn bare_house_number() {
    let found = extract_one("Садовая улица 12");
    assert_eq!(found.rule().as_str(), "AdjFullWithHn");
    assert!(!found.entity().contains(HOUSE_NUMBER_DESCRIPTOR));
    assert_eq!(found.entity().get(HOUSE_NUMBER), Some("12"));
}

#[test]
fn house_number_with_letter() {
    let found = extract_one("Садовая улица, дом 7 литер А");
    assert_eq!(found.rule().as_str(), "AdjFullWithHnAndLetter");
    assert_eq!(found.entity().get(HOUSE_NUMBER_LETTER), Some("А"));
    assert_eq!(found.tokens(), 0..7);
}

#[test]
fn house_number_with_bare_letter() {
    let found = extract_one("улица Садовая, д 7 Б");
    assert_eq!(found.rule().as_str(), "AdjFullReversedWithHnAndLetter");
    assert_eq!(found.entity().get(HOUSE_NUMBER_LETTER), Some("Б"));
}

#[test]
fn composed_street_with_house_number() {
    let found = extract_one("Обуховской Обороны пр-кт, д. 5");
    assert_eq!(found.rule().as_str(), "GentShortWithHn");
    assert_eq!(found.tokens(), 0..7);
    assert_eq!(found.entity().get(STREET_NAME), Some("Обуховской Обороны"));
    assert_eq!(found.entity().get(HOUSE_NUMBER_DESCRIPTOR), Some("д"));
    assert_eq!(found.entity().get(HOUSE_NUMBER), Some("5"));
}

#[test]
fn zero_is_not_a_house_number() {
    let found = extract_one("Садовая улица, дом 0");
    assert_eq!(found.rule().as_str(), "AdjFull");
    assert_eq!(found.tokens(), 0..2);
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn addresses_and_locations_together() {
    let matches = extract("Москва, ул. Садовая, д. 7 и Центрального федерального округа");
    let kinds: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.kind(), m.rule().as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Location", "Object"),
            ("Address", "AdjShortWithHn"),
            ("Location", "FederalDistrict"),
        ]
    );
}
