//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use geogrammar::engine::{Match, Matcher};
use geogrammar::foundation::{Lexicon, Token};

/// A small Russian lexicon covering every word the integration tests use.
pub fn lexicon() -> Lexicon {
    Lexicon::new()
        // Districts
        .with("центрального", "центральный", &["ADJF", "Qual", "masc", "sing", "gent"])
        .with("центрального", "центральный", &["ADJF", "Qual", "neut", "sing", "gent"])
        .with("центральный", "центральный", &["ADJF", "Qual", "masc", "sing", "nomn"])
        .with("федерального", "федеральный", &["ADJF", "masc", "sing", "gent"])
        .with("федерального", "федеральный", &["ADJF", "neut", "sing", "gent"])
        .with("федеральный", "федеральный", &["ADJF", "masc", "sing", "nomn"])
        .with("округа", "округ", &["NOUN", "inan", "masc", "sing", "gent"])
        .with("округа", "округ", &["NOUN", "inan", "masc", "plur", "nomn"])
        .with("округ", "округ", &["NOUN", "inan", "masc", "sing", "nomn"])
        .with("ханты-мансийский", "ханты-мансийский", &["ADJF", "masc", "sing", "nomn"])
        .with("автономный", "автономный", &["ADJF", "masc", "sing", "nomn"])
        .with("ямало-ненецкий", "ямало-ненецкий", &["ADJF", "masc", "sing", "nomn"])
        // Regions and toponyms
        .with("московская", "московский", &["ADJF", "Geox", "femn", "sing", "nomn"])
        .with("московской", "московский", &["ADJF", "Geox", "femn", "sing", "gent"])
        .with("московский", "московский", &["ADJF", "Geox", "masc", "sing", "nomn"])
        .with("область", "область", &["NOUN", "inan", "femn", "sing", "nomn"])
        .with("области", "область", &["NOUN", "inan", "femn", "sing", "gent"])
        .with("нижний", "нижний", &["ADJF", "masc", "sing", "nomn"])
        .with("новгород", "новгород", &["NOUN", "inan", "masc", "Geox", "sing", "nomn"])
        .with("москва", "москва", &["NOUN", "inan", "femn", "Sgtm", "Geox", "sing", "nomn"])
        .with("москвы", "москва", &["NOUN", "inan", "femn", "Sgtm", "Geox", "sing", "gent"])
        .with("российская", "российский", &["ADJF", "femn", "sing", "nomn"])
        .with("российский", "российский", &["ADJF", "masc", "sing", "nomn"])
        .with("федерация", "федерация", &["NOUN", "inan", "femn", "sing", "nomn"])
        .with("новгорода", "новгород", &["NOUN", "inan", "masc", "Geox", "sing", "gent"])
        .with("север", "север", &["NOUN", "inan", "masc", "sing", "nomn"])
        .with("севера", "север", &["NOUN", "inan", "masc", "sing", "gent"])
        .with("соединенные", "соединенный", &["ADJF", "Adjx", "plur", "nomn"])
        .with("штаты", "штат", &["NOUN", "inan", "masc", "plur", "nomn"])
        .with("америки", "америка", &["NOUN", "inan", "femn", "Sgtm", "Geox", "sing", "gent"])
        // Streets
        .with("улица", "улица", &["NOUN", "inan", "femn", "sing", "nomn"])
        .with("ул", "ул", &["NOUN", "inan", "femn", "Fixd", "Abbr", "sing", "nomn"])
        .with("проспект", "проспект", &["NOUN", "inan", "masc", "sing", "nomn"])
        .with("пр", "пр", &["NOUN", "inan", "masc", "Abbr", "sing", "nomn"])
        .with("пр-кт", "пр-кт", &["NOUN", "inan", "masc", "Abbr", "sing", "nomn"])
        .with("проезд", "проезд", &["NOUN", "inan", "masc", "sing", "nomn"])
        .with("промышленная", "промышленный", &["ADJF", "femn", "sing", "nomn"])
        .with("садовая", "садовый", &["ADJF", "femn", "sing", "nomn"])
        .with("садовый", "садовый", &["ADJF", "masc", "sing", "nomn"])
        .with("зеленая", "зеленый", &["ADJF", "Qual", "femn", "sing", "nomn"])
        .with("зеленый", "зеленый", &["ADJF", "Qual", "masc", "sing", "nomn"])
        .with("новорублевская", "новорублевский", &["ADJF", "femn", "sing", "nomn"])
        .with("новорублевский", "новорублевский", &["ADJF", "masc", "sing", "nomn"])
        .with("красных", "красный", &["ADJF", "Qual", "plur", "gent"])
        .with("красные", "красный", &["ADJF", "Qual", "plur", "nomn"])
        .with("десантников", "десантник", &["NOUN", "anim", "masc", "plur", "gent"])
        .with("десантники", "десантник", &["NOUN", "anim", "masc", "plur", "nomn"])
        .with("карла", "карл", &["NOUN", "anim", "masc", "Name", "sing", "gent"])
        .with("маркса", "маркс", &["NOUN", "anim", "masc", "Surn", "sing", "gent"])
        .with("лет", "год", &["NOUN", "inan", "masc", "plur", "gent"])
        .with("октября", "октябрь", &["NOUN", "inan", "masc", "sing", "gent"])
        .with("маршала", "маршал", &["NOUN", "anim", "masc", "sing", "gent"])
        .with("жукова", "жуков", &["NOUN", "anim", "masc", "Surn", "sing", "gent"])
        .with("николая", "николай", &["NOUN", "anim", "masc", "Name", "sing", "gent"])
        .with("ершова", "ершов", &["NOUN", "anim", "masc", "Surn", "sing", "gent"])
        .with("ленина", "ленин", &["NOUN", "anim", "masc", "Surn", "sing", "gent"])
        .with("обуховской", "обуховский", &["ADJF", "femn", "sing", "gent"])
        .with("обороны", "оборона", &["NOUN", "inan", "femn", "sing", "gent"])
        .with("перова", "перово", &["NOUN", "inan", "neut", "sing", "gent"])
        .with("поля", "поле", &["NOUN", "inan", "neut", "sing", "gent"])
        .with("текстильщиков", "текстильщик", &["NOUN", "anim", "masc", "plur", "gent"])
        // Houses
        .with("дом", "дом", &["NOUN", "inan", "masc", "sing", "nomn"])
        .with("д", "далее", &["ADVB", "Abbr"])
        .with("литер", "литер", &["NOUN", "inan", "masc", "sing", "nomn"])
}

/// Analyzes `text` with [`lexicon`].
pub fn tokens(text: &str) -> Vec<Token> {
    lexicon().analyze(text)
}

/// Runs the full corpus over `text`.
pub fn extract(text: &str) -> Vec<Match> {
    extract_with(lexicon(), text)
}

/// Runs the full corpus over `text` analyzed with `lexicon`.
pub fn extract_with(lexicon: Lexicon, text: &str) -> Vec<Match> {
    let tokens = lexicon.analyze(text);
    let rules = geogrammar::corpus::corpus().unwrap().clone();
    Matcher::new(rules, lexicon).find_all(&tokens).unwrap()
}

/// Runs the full corpus over `text` and expects exactly one match.
pub fn extract_one(text: &str) -> Match {
    let mut matches = extract(text);
    assert_eq!(matches.len(), 1, "expected one match in {text:?}: {matches:?}");
    matches.remove(0)
}
