//! Word lists used by the rule families.
//!
//! Lemma dictionaries are matched against the analyzer's lemma. Several of
//! the short street descriptors are listed under the lemma a Russian analyzer
//! actually assigns to the abbreviation (`пр-кт` -> `пр-том`, `б-р` -> `б-литр`),
//! not under the abbreviation itself.

use std::sync::LazyLock;

use geogrammar_engine::Dictionary;

/// Federal district names.
pub static FEDERAL_DISTRICT: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new(
        "federal_district",
        [
            "центральный",
            "северо-западный",
            "южный",
            "северо-кавказский",
            "приволжский",
            "уральский",
            "сибирский",
            "дальневосточный",
        ],
    )
});

/// `федеральный`
pub static FEDERAL: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("federal", ["федеральный"]));

/// `автономный`
pub static AUTONOMOUS: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("autonomous", ["автономный"]));

/// `округ`
pub static DISTRICT: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("district", ["округ"]));

/// Kinds of administrative region.
pub static REGION_TYPE: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new("region_type", ["край", "район", "область", "губерния", "уезд"])
});

/// Adjectives that prefix a toponym (`Нижний Новгород`).
pub static COMPLEX_OBJECT_PREFIX: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new(
        "complex_object_prefix",
        [
            "северный",
            "северо-западный",
            "северо-восточный",
            "южный",
            "юго-западный",
            "юго-восточный",
            "западный",
            "восточный",
            "верхний",
            "вышний",
            "нижний",
            "великий",
            "дальний",
        ],
    )
});

/// Cardinal directions that prefix a toponym (`север Москвы`).
pub static PARTIAL_OBJECT_PREFIX: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new(
        "partial_object_prefix",
        [
            "север",
            "северо-восток",
            "северо-запад",
            "юг",
            "юго-восток",
            "юго-запад",
            "запад",
            "восток",
        ],
    )
});

/// Nouns closing an adjective federation name.
pub static FEDERATION: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new("federation", ["федерация", "республика", "империя"])
});

/// Nouns closing a possible-adjective federation name.
pub static STATE: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("state", ["штат", "эмират"]));

/// Full street kinds.
pub static STREET_DESCRIPTOR: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::new(
        "street_descriptor",
        [
            "улица",
            "площадь",
            "проспект",
            "проезд",
            "бульвар",
            "набережная",
            "шоссе",
            "вал",
            "аллея",
            "переулок",
            "тупик",
            "тракт",
            "дорога",
        ],
    )
});

/// Abbreviated street kinds, by lemma, with their full form.
pub static SHORT_STREET_DESCRIPTOR: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::with_canonical(
        "short_street_descriptor",
        [
            ("ул", "улица"),
            ("пр", "проспект"),
            ("проспа", "проспект"),
            ("пр-том", "проспект"),
            ("площадь", "площадь"),
            ("пл", "площадь"),
            ("пр-кт", "проспект"),
            ("пр-далее", "проезд"),
            ("б-литр", "бульвар"),
            ("б-р", "бульвар"),
            ("бул", "бульвар"),
            ("наб", "набережная"),
            ("ш", "шоссе"),
            ("тупой", "тупик"),
            ("дора", "дорога"),
        ],
    )
});

/// Abbreviated street kinds whose lemma is unusable, by surface form.
pub static SHORT_STREET_DESCRIPTOR_SURFACE: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::with_canonical(
        "short_street_descriptor_surface",
        [("пер", "переулок"), ("н", "набережная")],
    )
});

/// `дом`
pub static HOUSE: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::new("house", ["дом"]));

/// The lemma analyzers assign to the house abbreviation `д`.
pub static HOUSE_SHORT: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("house_short", ["далее"]));

/// `литер`
pub static LETTER: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::new("letter", ["литер"]));
