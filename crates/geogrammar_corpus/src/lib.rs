//! Russian location and street address rules for geogrammar.
//!
//! This crate provides:
//! - [`location_rules`] - Federal and autonomous districts, regions, federations, toponyms
//! - [`address_rules`] - Streets with optional house number and letter
//! - [`corpus`] - Both families merged into one shared rule set
//! - [`dictionaries`] - The word lists the rules consult
//! - [`schema`] - The `Location` and `Address` entity types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod dictionaries;
pub mod location;
pub mod schema;

use std::sync::LazyLock;

use geogrammar_engine::RuleSet;
use geogrammar_foundation::{Error, Result};
use tracing::debug;

pub use address::address_rules;
pub use location::location_rules;
pub use schema::{ADDRESS, LOCATION};

static CORPUS: LazyLock<Result<RuleSet>> = LazyLock::new(|| {
    let rules = location_rules()?.merge(&address_rules()?)?;
    debug!(rules = rules.len(), "corpus built");
    Ok(rules)
});

/// Returns the location family followed by the address family.
///
/// The set is built once per process.
///
/// # Errors
/// Returns the build error if either family fails validation.
pub fn corpus() -> std::result::Result<&'static RuleSet, &'static Error> {
    CORPUS.as_ref()
}
