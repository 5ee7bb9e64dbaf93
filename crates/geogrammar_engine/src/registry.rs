//! Rule registry and validation.
//!
//! A [`RuleSet`] is the ordered, immutable list of named rules the matcher
//! runs. Declaration order is the rule priority and is kept as an explicit,
//! inspectable list. Rules are validated when the set is built, so a
//! malformed corpus fails before any document is matched.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use geogrammar_foundation::{Error, Result, RuleDefect};
use tracing::debug;

use crate::agreement::Agreement;
use crate::rule::{Attribute, Element, Step};
use crate::sequence::Sequence;

// =============================================================================
// Entity schemas
// =============================================================================

/// The attribute sink of one entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntitySchema {
    name: &'static str,
    attributes: &'static [Attribute],
}

impl EntitySchema {
    /// Declares an entity type and the attributes it accepts.
    #[must_use]
    pub const fn new(name: &'static str, attributes: &'static [Attribute]) -> Self {
        Self { name, attributes }
    }

    /// Returns the entity type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accepted attributes.
    #[must_use]
    pub const fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Returns true if the entity type has a slot for `attribute`.
    #[must_use]
    pub fn accepts(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Stable identifier of a rule.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RuleName(Arc<str>);

impl RuleName {
    /// Creates a rule name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the name text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, validated rule.
#[derive(Debug)]
pub struct Rule {
    name: RuleName,
    schema: EntitySchema,
    sequence: Sequence,
}

impl Rule {
    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &RuleName {
        &self.name
    }

    /// Returns the entity type the rule produces.
    #[must_use]
    pub fn schema(&self) -> EntitySchema {
        self.schema
    }

    /// Returns the rule body.
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

/// An ordered set of validated rules.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Arc<Rule>>,
}

impl RuleSet {
    /// Starts building a rule set.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Iterates rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Rule>> {
        self.rules.iter()
    }

    /// Returns the rule names in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&RuleName> {
        self.rules.iter().map(|r| &r.name).collect()
    }

    /// Looks a rule up by name.
    ///
    /// # Errors
    /// Returns an unknown rule error if no rule has that name.
    pub fn get(&self, name: &str) -> Result<&Arc<Rule>> {
        self.rules
            .iter()
            .find(|r| r.name.as_str() == name)
            .ok_or_else(|| Error::unknown_rule(name))
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Appends another family after this one, keeping both orders.
    ///
    /// # Errors
    /// Returns a malformed rule error if a name appears in both sets.
    pub fn merge(mut self, other: &RuleSet) -> Result<RuleSet> {
        for rule in &other.rules {
            if self.rules.iter().any(|r| r.name == rule.name) {
                return Err(Error::malformed_rule(
                    rule.name.as_str(),
                    RuleDefect::DuplicateName,
                ));
            }
            self.rules.push(Arc::clone(rule));
        }
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Arc<Rule>;
    type IntoIter = std::slice::Iter<'a, Arc<Rule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// =============================================================================
// Builder & validation
// =============================================================================

/// Collects rule declarations, then validates them in one pass.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    pending: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Declares a rule. Declaration order is priority order.
    #[must_use]
    pub fn add(mut self, name: &str, schema: EntitySchema, sequence: Sequence) -> Self {
        self.pending.push(Rule {
            name: RuleName::new(name),
            schema,
            sequence,
        });
        self
    }

    /// Validates every declared rule and freezes the set.
    ///
    /// # Errors
    /// Returns a malformed rule error naming the first offending rule.
    pub fn build(self) -> Result<RuleSet> {
        let mut rules: Vec<Arc<Rule>> = Vec::with_capacity(self.pending.len());
        for rule in self.pending {
            if rules.iter().any(|r| r.name == rule.name) {
                return Err(Error::malformed_rule(
                    rule.name.as_str(),
                    RuleDefect::DuplicateName,
                ));
            }
            Validator::new(&rule)
                .sequence(&rule.sequence, Reach::START)
                .map_err(|defect| Error::malformed_rule(rule.name.as_str(), defect))?;
            rules.push(Arc::new(rule));
        }
        debug!(rules = rules.len(), "rule set built");
        Ok(RuleSet { rules })
    }
}

/// How many tokens may have been consumed before an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Reach {
    min: usize,
    /// `None` once a repeatable element has been passed
    max: Option<usize>,
}

impl Reach {
    const START: Self = Self {
        min: 0,
        max: Some(0),
    };

    fn allows(self, needed: usize) -> bool {
        self.max.is_none_or(|max| max >= needed)
    }

    fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: match (self.max, other.max) {
                (Some(a), Some(b)) => Some(a.max(b)),
                _ => None,
            },
        }
    }
}

struct Validator<'a> {
    rule: &'a Rule,
    position: usize,
}

impl<'a> Validator<'a> {
    fn new(rule: &'a Rule) -> Self {
        Self { rule, position: 0 }
    }

    fn sequence(
        &mut self,
        sequence: &Sequence,
        mut reach: Reach,
    ) -> std::result::Result<Reach, RuleDefect> {
        if sequence.is_empty() {
            return Err(RuleDefect::Empty);
        }
        for element in sequence {
            reach = self.element(element, reach)?;
        }
        Ok(reach)
    }

    fn element(
        &mut self,
        element: &Element,
        before: Reach,
    ) -> std::result::Result<Reach, RuleDefect> {
        let quantifier = element.quantifier();
        let once = match element {
            Element::Step(step) => {
                self.step(step, before)?;
                self.position += 1;
                Reach {
                    min: before.min + 1,
                    max: before.max.map(|m| m + 1),
                }
            }
            Element::Alternation(alt) => {
                let mut branches = alt.branches().iter();
                let Some(first) = branches.next() else {
                    return Err(RuleDefect::EmptyAlternation);
                };
                let mut after = self.sequence(first, before)?;
                for branch in branches {
                    after = after.union(self.sequence(branch, before)?);
                }
                after
            }
        };
        let max = if quantifier.is_repeatable() { None } else { once.max };
        let min = if quantifier.is_optional() { before.min } else { once.min };
        Ok(Reach { min, max })
    }

    fn step(&self, step: &Step, before: Reach) -> std::result::Result<(), RuleDefect> {
        if let Some(attribute) = step.target() {
            if !self.rule.schema.accepts(attribute) {
                return Err(RuleDefect::UnknownAttribute {
                    step: step.describe(self.position),
                    attribute: attribute.to_string(),
                    entity: self.rule.schema.name().to_string(),
                });
            }
        }
        if let Some(agreement) = step.agreement() {
            // Later repetitions of a repeatable step see every earlier repetition.
            let before = if step.quantifier().is_repeatable() {
                Reach { max: None, ..before }
            } else {
                before
            };
            let in_bounds = match agreement {
                Agreement::Previous(0) => false,
                Agreement::Previous(n) => before.allows(n),
                Agreement::Start(k) => before.allows(k + 1),
            };
            if !in_bounds {
                return Err(RuleDefect::AgreementOutOfBounds {
                    step: step.describe(self.position),
                    reference: agreement.to_string(),
                });
            }
        }
        Ok(())
    }
}
