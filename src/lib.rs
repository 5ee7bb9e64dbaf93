//! Geogrammar - Agreement-aware token grammar matcher
//!
//! This crate re-exports all layers of the geogrammar system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: geogrammar_corpus     - Location and address rule families
//! Layer 1: geogrammar_engine     - Predicates, agreement, rule algebra, matcher
//! Layer 0: geogrammar_foundation - Tokens, analyses, grammemes, errors
//! ```
//!
//! # Example
//!
//! ```
//! use geogrammar::engine::Matcher;
//! use geogrammar::foundation::Lexicon;
//!
//! let lexicon = Lexicon::new()
//!     .with("улица", "улица", &["NOUN", "inan", "femn", "sing", "nomn"])
//!     .with("садовая", "садовый", &["ADJF", "femn", "sing", "nomn"]);
//! let tokens = lexicon.analyze("Садовая улица");
//!
//! let rules = geogrammar::corpus::corpus().unwrap().clone();
//! let matcher = Matcher::new(rules, lexicon);
//! let matches = matcher.find_all(&tokens).unwrap();
//!
//! assert_eq!(matches[0].rule().as_str(), "AdjFull");
//! assert_eq!(matches[0].entity().to_string(), r#"Address { Street_Name: "Садовая", Street_Descriptor: "улица" }"#);
//! ```

pub use geogrammar_corpus as corpus;
pub use geogrammar_engine as engine;
pub use geogrammar_foundation as foundation;
