//! Address rules: street names with full or abbreviated descriptors, numeric
//! parts, and optional house numbers and letters.
//!
//! Most rules are assembled from fragments of others by slicing and
//! concatenation, so one step template is shared by many rules.

use geogrammar_engine::{
    Agreement, Predicate, RuleSet, Sequence, Step, alternation, dictionary, eq, gram, gram_not,
    gram_not_in, gte, is_capitalized, length_eq, or, seq, surface_in,
};
use geogrammar_foundation::{Grammeme, Result};

use crate::dictionaries::{
    HOUSE, HOUSE_SHORT, LETTER, SHORT_STREET_DESCRIPTOR, SHORT_STREET_DESCRIPTOR_SURFACE,
    STREET_DESCRIPTOR,
};
use crate::schema::{
    ADDRESS, HOUSE_NUMBER, HOUSE_NUMBER_DESCRIPTOR, HOUSE_NUMBER_LETTER,
    STREET_DESCRIPTOR as DESCRIPTOR, STREET_NAME,
};

/// Street rules without house numbers, in priority order.
pub const STREET_RULES: &[&str] = &[
    "AdjFull",
    "AdjFullReversed",
    "AdjShort",
    "AdjShortReversed",
    "AdjNounFull",
    "AdjNounShort",
    "GentFullReversed",
    "GentFullReversedWithShortcut",
    "GentFullReversedWithExtendedShortcut",
    "GentShortReversed",
    "GentShortReversedWithShortcut",
    "GentShortReversedWithExtendedShortcut",
    "GentFull",
    "GentShort",
    "AdjFullWithNumericPart",
    "AdjFullReversedWithNumericPart",
    "AdjShortWithNumericPart",
    "AdjShortReversedWithNumericPart",
    "GentFullReversedWithNumericPrefix",
    "GentShortReversedWithNumericPrefix",
    "GentNumericSplittedByFullDescriptor",
    "GentNumericSplittedByShortDescriptor",
];

/// Street rules extended with a house number, in priority order. Each name
/// is registered twice more, with the `WithHn` and `WithHnAndLetter` suffixes.
pub const HOUSE_RULES: &[&str] = &[
    "AdjFull",
    "AdjFullReversed",
    "AdjShort",
    "AdjShortReversed",
    "AdjNounFull",
    "AdjNounShort",
    "GentFull",
    "GentFullReversed",
    "GentFullReversedWithShortcut",
    "GentFullReversedWithExtendedShortcut",
    "GentShort",
    "GentShortReversed",
    "GentShortReversedWithShortcut",
    "GentShortReversedWithExtendedShortcut",
    "AdjFullWithNumericPart",
    "AdjFullReversedWithNumericPart",
    "AdjShortWithNumericPart",
    "AdjShortReversedWithNumericPart",
    "GentFullReversedWithNumericPrefix",
    "GentShortReversedWithNumericPrefix",
    "GentNumericSplittedByFullDescriptor",
    "GentNumericSplittedByShortDescriptor",
];

// =============================================================================
// Shared fragments
// =============================================================================

fn optional_dot() -> Step {
    Step::when([eq(".")]).label("dot").optional()
}

fn positive_integer() -> Vec<Predicate> {
    vec![gram(Grammeme::INT), gte(1)]
}

fn not_abbreviated(tag: Grammeme) -> Vec<Predicate> {
    vec![gram(tag), gram_not(Grammeme::ABBR)]
}

/// `ул.`, `пр-кт`, `пер.`
fn short_descriptor() -> Sequence {
    seq![
        Step::when([or([
            dictionary(&SHORT_STREET_DESCRIPTOR),
            surface_in(&SHORT_STREET_DESCRIPTOR_SURFACE),
        ])])
        .label("short descriptor")
        .attribute(DESCRIPTOR)
        .canonical(),
        optional_dot(),
    ]
}

/// `1-я`, `10-й`, `100500-ой`
fn numeric_part() -> Sequence {
    seq![
        Step::when(positive_integer())
            .label("ordinal number")
            .attribute(STREET_NAME),
        Step::when([eq("-")]).label("hyphen").attribute(STREET_NAME),
        Step::when([gram_not_in(
            [
                "PUNCT",
                "QUOTE",
                "LATN",
                "NUMBER",
                "PHONE",
                "EMAIL",
                "RANGE",
                "END-OF-LINE",
            ]
            .map(Grammeme::from_static),
        )])
        .label("ordinal suffix")
        .attribute(STREET_NAME),
    ]
}

/// `дом 7`, `д. 7`, `7`
fn house_number() -> Sequence {
    let full = seq![
        Step::when([dictionary(&HOUSE)])
            .label("house")
            .attribute(HOUSE_NUMBER_DESCRIPTOR)
            .inflected(),
        Step::when(positive_integer())
            .label("house number")
            .attribute(HOUSE_NUMBER),
    ];
    let short = seq![
        Step::when([dictionary(&HOUSE_SHORT)])
            .label("short house")
            .attribute(HOUSE_NUMBER_DESCRIPTOR),
        optional_dot(),
        full.last(),
    ];
    seq![alternation([
        seq![alternation([short, full.clone()])],
        full.last(),
    ])]
}

/// `литер А`, `лит. А`, `А`
fn house_letter() -> Sequence {
    let full = seq![
        Step::when([dictionary(&LETTER)]).label("letter"),
        Step::when([is_capitalized(true), length_eq(1)])
            .label("house letter")
            .attribute(HOUSE_NUMBER_LETTER),
    ];
    let short = seq![
        Step::when([or([eq("лит"), eq("л")])]).label("short letter"),
        optional_dot(),
        full.last(),
    ];
    let only_letter = full.last();
    seq![alternation([
        seq![alternation([full, short])],
        only_letter,
    ])]
}

// =============================================================================
// Rule family
// =============================================================================

/// Builds the address family.
///
/// # Errors
/// Returns a malformed rule error if a rule fails validation.
#[allow(clippy::similar_names)]
pub fn address_rules() -> Result<RuleSet> {
    let short = short_descriptor();
    let numeric = numeric_part();
    let numeric_without_suffix = numeric.slice(..1);
    let comma = seq![Step::when([eq(",")]).label("comma").optional()];
    let house = house_number();
    let letter = house_letter();

    // Садовая улица
    let adj_full = seq![
        Step::when(not_abbreviated(Grammeme::ADJF))
            .label("adjective")
            .attribute(STREET_NAME)
            .inflected(),
        Step::when(not_abbreviated(Grammeme::ADJF))
            .label("more adjectives")
            .agree(Agreement::PREVIOUS)
            .optional()
            .repeatable()
            .attribute(STREET_NAME)
            .inflected(),
        Step::when([dictionary(&STREET_DESCRIPTOR)])
            .label("descriptor")
            .agree(Agreement::PREVIOUS)
            .attribute(DESCRIPTOR)
            .inflected(),
    ];

    // улица Садовая
    let adj_full_reversed = seq![
        Step::when([dictionary(&STREET_DESCRIPTOR)])
            .label("descriptor")
            .attribute(DESCRIPTOR)
            .inflected(),
        Step::when(not_abbreviated(Grammeme::ADJF))
            .label("adjectives")
            .agree(Agreement::PREVIOUS)
            .repeatable()
            .attribute(STREET_NAME)
            .inflected(),
    ];

    // ул. Садовая
    let adj_short = &short + &adj_full.slice(..2);

    // Садовая ул.
    let adj_short_reversed = &adj_full.slice(..2) + &short;

    // улица Красных Десантников
    let adj_noun_full = adj_full_reversed.slice(..1)
        + adj_full.slice(..2)
        + seq![
            Step::when(not_abbreviated(Grammeme::GENT))
                .label("genitive nouns")
                .agree(Agreement::PREVIOUS)
                .repeatable()
                .attribute(STREET_NAME)
                .inflected(),
        ];

    // ул. Красных Десантников
    let adj_noun_short = &adj_short + &adj_noun_full.last();

    // улица Карла Маркса
    let gent_full_reversed = adj_full_reversed.slice(..1)
        + seq![
            Step::when(not_abbreviated(Grammeme::GENT))
                .label("genitive")
                .attribute(STREET_NAME),
            Step::when(not_abbreviated(Grammeme::GENT))
                .label("more genitives")
                .agree(Agreement::PREVIOUS)
                .optional()
                .repeatable()
                .attribute(STREET_NAME),
        ];

    // улица К. Маркса
    let gent_full_reversed_with_shortcut = gent_full_reversed.slice(..1)
        + seq![
            Step::when([gram(Grammeme::ABBR)])
                .label("initial")
                .attribute(STREET_NAME),
            Step::when([eq(".")]).label("initial dot"),
        ]
        + gent_full_reversed.slice(1..);

    // улица В. В. Ленина
    let gent_full_reversed_with_extended_shortcut = gent_full_reversed_with_shortcut.slice(..3)
        + gent_full_reversed_with_shortcut.slice(1..3)
        + gent_full_reversed_with_shortcut.slice(3..);

    // пр. Маршала Жукова
    let gent_short_reversed = &short + &gent_full_reversed.slice(1..);

    // пр. К. Маркса
    let gent_short_reversed_with_shortcut = &short + &gent_full_reversed_with_shortcut.slice(1..);

    // пл. В. В. Ленина
    let gent_short_reversed_with_extended_shortcut =
        &short + &gent_full_reversed_with_extended_shortcut.slice(1..);

    // Николая Ершова улица
    let gent_full = gent_full_reversed.slice(1..) + gent_full_reversed.slice(..1);

    // Обуховской Обороны пр-кт
    let gent_short = &gent_short_reversed.slice(2..) + &short;

    // 1-я Новорублевская улица
    let adj_full_with_numeric_part = &numeric + &adj_full;

    // улица 1-я Новорублевская
    let adj_full_reversed_with_numeric_part =
        adj_full_reversed.slice(..1) + adj_full_with_numeric_part.without_last();

    // 1-я Новорублевская ул.
    let adj_short_with_numeric_part = adj_full_with_numeric_part.without_last() + &short;

    // ул. 1-я Промышленная
    let adj_short_reversed_with_numeric_part = &short + &adj_full_with_numeric_part.without_last();

    // проспект 50 лет Октября
    let gent_full_reversed_with_numeric_prefix = gent_full_reversed.slice(..1)
        + &numeric_without_suffix
        + gent_full_reversed.slice(1..2)
        + gent_full_reversed.slice(1..);

    // пр-т. 50 лет Советской власти
    let gent_short_reversed_with_numeric_prefix = gent_short_reversed.slice(..2)
        + &numeric_without_suffix
        + gent_full_reversed.slice(1..2)
        + gent_full_reversed.slice(1..);

    // 2-ой проезд Перова Поля
    let gent_numeric_splitted_by_full_descriptor = &numeric + &gent_full_reversed;

    // 7-я ул. Текстильщиков
    let gent_numeric_splitted_by_short_descriptor = &numeric + &gent_short_reversed;

    let streets = [
        adj_full,
        adj_full_reversed,
        adj_short,
        adj_short_reversed,
        adj_noun_full,
        adj_noun_short,
        gent_full_reversed,
        gent_full_reversed_with_shortcut,
        gent_full_reversed_with_extended_shortcut,
        gent_short_reversed,
        gent_short_reversed_with_shortcut,
        gent_short_reversed_with_extended_shortcut,
        gent_full,
        gent_short,
        adj_full_with_numeric_part,
        adj_full_reversed_with_numeric_part,
        adj_short_with_numeric_part,
        adj_short_reversed_with_numeric_part,
        gent_full_reversed_with_numeric_prefix,
        gent_short_reversed_with_numeric_prefix,
        gent_numeric_splitted_by_full_descriptor,
        gent_numeric_splitted_by_short_descriptor,
    ];
    let street = |name: &str| {
        STREET_RULES
            .iter()
            .position(|n| *n == name)
            .map(|i| &streets[i])
    };

    let mut builder = RuleSet::builder();
    for (name, body) in STREET_RULES.iter().zip(&streets) {
        builder = builder.add(name, ADDRESS, body.clone());
    }
    for &name in HOUSE_RULES {
        if let Some(body) = street(name) {
            builder = builder.add(&format!("{name}WithHn"), ADDRESS, body + &comma + &house);
        }
    }
    for &name in HOUSE_RULES {
        if let Some(body) = street(name) {
            builder = builder.add(
                &format!("{name}WithHnAndLetter"),
                ADDRESS,
                body + &comma + &house + &letter,
            );
        }
    }
    builder.build()
}
