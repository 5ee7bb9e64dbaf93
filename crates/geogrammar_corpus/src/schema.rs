//! Entity types produced by the corpus.

use geogrammar_engine::{Attribute, EntitySchema};

/// Place name.
pub const NAME: Attribute = Attribute::new("Name");
/// Kind of place (`федеральный округ`, `область`, `республика`).
pub const DESCRIPTOR: Attribute = Attribute::new("Descriptor");

/// Street name.
pub const STREET_NAME: Attribute = Attribute::new("Street_Name");
/// Street kind (`улица`, `проспект`).
pub const STREET_DESCRIPTOR: Attribute = Attribute::new("Street_Descriptor");
/// The word introducing a house number (`дом`, `д`).
pub const HOUSE_NUMBER_DESCRIPTOR: Attribute = Attribute::new("House_Number_Descriptor");
/// House number.
pub const HOUSE_NUMBER: Attribute = Attribute::new("House_Number");
/// House letter (`литер А`).
pub const HOUSE_NUMBER_LETTER: Attribute = Attribute::new("House_Number_Letter");

/// Regions, districts, federations and single-word toponyms.
pub const LOCATION: EntitySchema = EntitySchema::new("Location", &[NAME, DESCRIPTOR]);

/// Streets, optionally with house number and letter.
pub const ADDRESS: EntitySchema = EntitySchema::new(
    "Address",
    &[
        STREET_NAME,
        STREET_DESCRIPTOR,
        HOUSE_NUMBER_DESCRIPTOR,
        HOUSE_NUMBER,
        HOUSE_NUMBER_LETTER,
    ],
);
