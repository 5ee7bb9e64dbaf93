//! Location rules: federal and autonomous districts, regions, federations and
//! single-word toponyms.

use geogrammar_engine::{Agreement, RuleSet, Step, dictionary, eq, gram, is_capitalized, seq};
use geogrammar_foundation::{Grammeme, Result};

use crate::dictionaries::{
    AUTONOMOUS, COMPLEX_OBJECT_PREFIX, DISTRICT, FEDERAL, FEDERAL_DISTRICT, FEDERATION,
    PARTIAL_OBJECT_PREFIX, REGION_TYPE, STATE,
};
use crate::schema::{DESCRIPTOR, LOCATION, NAME};

/// Rule names in priority order.
pub const RULES: &[&str] = &[
    "FederalDistrict",
    "FederalDistrictAbbr",
    "AutonomousDistrict",
    "AutonomousDistrictAbbr",
    "Region",
    "ComplexObject",
    "PartialObject",
    "AdjfFederation",
    "AdjxFederation",
    "Object",
];

fn adjective_name() -> Step {
    Step::when([gram(Grammeme::ADJF)])
        .label("name")
        .attribute(NAME)
        .inflected()
}

fn agreeing_descriptor(step: Step) -> Step {
    step.agree(Agreement::PREVIOUS)
        .attribute(DESCRIPTOR)
        .inflected()
}

fn toponym() -> Step {
    Step::when([gram(Grammeme::NOUN), gram(Grammeme::GEOX)])
        .label("toponym")
        .agree(Agreement::PREVIOUS)
        .attribute(NAME)
        .inflected()
}

/// Builds the location family.
///
/// # Errors
/// Returns a malformed rule error if a rule fails validation.
pub fn location_rules() -> Result<RuleSet> {
    let district_name = Step::when([gram(Grammeme::ADJF), dictionary(&FEDERAL_DISTRICT)])
        .label("district name")
        .attribute(NAME)
        .inflected();
    let district = agreeing_descriptor(Step::when([dictionary(&DISTRICT)]).label("district"));

    // Центральный федеральный округ
    let federal_district = seq![
        district_name.clone(),
        agreeing_descriptor(Step::when([dictionary(&FEDERAL)]).label("federal")),
        district.clone(),
    ];

    // Центральный ФО
    let federal_district_abbr = seq![district_name, Step::when([eq("ФО")]).attribute(DESCRIPTOR)];

    // Ханты-Мансийский автономный округ
    let autonomous_district = seq![
        adjective_name(),
        agreeing_descriptor(Step::when([dictionary(&AUTONOMOUS)]).label("autonomous")),
        district,
    ];

    // Ямало-Ненецкий АО
    let autonomous_district_abbr = seq![
        adjective_name(),
        Step::when([eq("АО")]).attribute(DESCRIPTOR),
    ];

    // Московская область
    let region = seq![
        adjective_name(),
        agreeing_descriptor(Step::when([dictionary(&REGION_TYPE)]).label("region type")),
    ];

    // Нижний Новгород
    let complex_object = seq![
        Step::when([gram(Grammeme::ADJF), dictionary(&COMPLEX_OBJECT_PREFIX)])
            .label("prefix")
            .attribute(NAME)
            .inflected(),
        toponym(),
    ];

    // север Москвы
    let partial_object = seq![
        Step::when([gram(Grammeme::NOUN), dictionary(&PARTIAL_OBJECT_PREFIX)])
            .label("direction")
            .attribute(NAME)
            .inflected(),
        toponym(),
    ];

    // Донецкая народная республика, Российская Федерация
    let adjf_federation = seq![
        Step::when([gram(Grammeme::ADJF), is_capitalized(true)])
            .label("name")
            .attribute(NAME)
            .inflected(),
        Step::when([gram(Grammeme::ADJF)])
            .label("more names")
            .agree(Agreement::PREVIOUS)
            .optional()
            .repeatable()
            .attribute(NAME)
            .inflected(),
        Step::when([dictionary(&FEDERATION)])
            .label("federation")
            .agree(Agreement::FIRST)
            .attribute(DESCRIPTOR)
            .inflected(),
    ];

    // Соединенные Штаты Америки
    let adjx_federation = seq![
        Step::when([gram(Grammeme::ADJX), is_capitalized(true)])
            .label("name")
            .attribute(NAME)
            .inflected(),
        Step::when([gram(Grammeme::ADJX)])
            .label("more names")
            .agree(Agreement::PREVIOUS)
            .optional()
            .repeatable()
            .attribute(NAME)
            .inflected(),
        Step::when([dictionary(&STATE)])
            .label("state")
            .agree(Agreement::FIRST)
            .attribute(NAME)
            .inflected(),
        Step::when([gram(Grammeme::GENT)])
            .label("owner")
            .optional()
            .attribute(NAME)
            .inflected(),
    ];

    // Москва
    let object = seq![
        Step::when([is_capitalized(true), gram(Grammeme::GEOX)])
            .label("toponym")
            .attribute(NAME)
            .inflected(),
    ];

    let bodies = [
        federal_district,
        federal_district_abbr,
        autonomous_district,
        autonomous_district_abbr,
        region,
        complex_object,
        partial_object,
        adjf_federation,
        adjx_federation,
        object,
    ];

    RULES
        .iter()
        .zip(bodies)
        .fold(RuleSet::builder(), |builder, (name, body)| {
            builder.add(name, LOCATION, body)
        })
        .build()
}
