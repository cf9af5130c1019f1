//! Query predicates handed to the search layer.
//!
//! A [`Criterion`] is one clause of a content filter. Combining it with other
//! clauses is up to the caller; the logical variants exist so that callers and
//! in-memory search backends share a single representation.

use crate::location::id::LocationId;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    In,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operator::Eq => write!(f, "="),
            Operator::In => write!(f, "IN"),
        }
    }
}

/// Selects content with at least one location among `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIdCriterion {
    operator: Operator,
    values: NonEmpty<LocationId>,
}

impl LocationIdCriterion {
    /// A single value yields an equality clause, several a membership clause.
    pub fn new(values: NonEmpty<LocationId>) -> Self {
        let operator = if values.len() == 1 {
            Operator::Eq
        } else {
            Operator::In
        };

        LocationIdCriterion { operator, values }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn values(&self) -> &NonEmpty<LocationId> {
        &self.values
    }

    pub fn matches(&self, locations: &[LocationId]) -> bool {
        locations
            .iter()
            .any(|location| self.values.iter().any(|value| value == location))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    LocationId(LocationIdCriterion),
    LogicalAnd(Vec<Criterion>),
    LogicalOr(Vec<Criterion>),
    LogicalNot(Box<Criterion>),
}

impl Criterion {
    pub fn location_id(values: NonEmpty<LocationId>) -> Self {
        Criterion::LocationId(LocationIdCriterion::new(values))
    }

    pub fn and(self, other: Criterion) -> Self {
        match self {
            Criterion::LogicalAnd(mut clauses) => {
                clauses.push(other);
                Criterion::LogicalAnd(clauses)
            }
            clause => Criterion::LogicalAnd(vec![clause, other]),
        }
    }

    pub fn or(self, other: Criterion) -> Self {
        match self {
            Criterion::LogicalOr(mut clauses) => {
                clauses.push(other);
                Criterion::LogicalOr(clauses)
            }
            clause => Criterion::LogicalOr(vec![clause, other]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Criterion::LogicalNot(Box::new(self))
    }

    /// Evaluate the predicate against the locations of one content item.
    pub fn matches(&self, locations: &[LocationId]) -> bool {
        match self {
            Criterion::LocationId(clause) => clause.matches(locations),
            Criterion::LogicalAnd(clauses) => clauses.iter().all(|c| c.matches(locations)),
            Criterion::LogicalOr(clauses) => clauses.iter().any(|c| c.matches(locations)),
            Criterion::LogicalNot(clause) => !clause.matches(locations),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn join(f: &mut fmt::Formatter, clauses: &[Criterion], sep: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, clause) in clauses.iter().enumerate() {
                if i > 0 {
                    write!(f, " {sep} ")?;
                }
                write!(f, "{clause}")?;
            }
            write!(f, ")")
        }

        match self {
            Criterion::LocationId(clause) => match clause.operator {
                Operator::Eq => write!(f, "location_id = {}", clause.values.head),
                Operator::In => {
                    write!(f, "location_id IN [")?;
                    for (i, id) in clause.values.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{id}")?;
                    }
                    write!(f, "]")
                }
            },
            Criterion::LogicalAnd(clauses) => join(f, clauses, "AND"),
            Criterion::LogicalOr(clauses) => join(f, clauses, "OR"),
            Criterion::LogicalNot(clause) => write!(f, "NOT {clause}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonempty::nonempty;

    #[test]
    fn test_single_value_is_equality() {
        let criterion = LocationIdCriterion::new(nonempty![LocationId(3)]);
        assert_eq!(criterion.operator(), Operator::Eq);
        assert!(criterion.matches(&[LocationId(1), LocationId(3)]));
        assert!(!criterion.matches(&[LocationId(4)]));
        assert!(!criterion.matches(&[]));
    }

    #[test]
    fn test_several_values_is_membership() {
        let criterion = LocationIdCriterion::new(nonempty![LocationId(3), LocationId(4)]);
        assert_eq!(criterion.operator(), Operator::In);
        assert!(criterion.matches(&[LocationId(4)]));
    }

    #[test]
    fn test_composition() {
        let in_three = Criterion::location_id(nonempty![LocationId(3)]);
        let in_four = Criterion::location_id(nonempty![LocationId(4)]);

        let both = in_three.clone().and(in_four.clone());
        assert!(both.matches(&[LocationId(3), LocationId(4)]));
        assert!(!both.matches(&[LocationId(3)]));

        let either = in_three.clone().or(in_four);
        assert!(either.matches(&[LocationId(4)]));

        assert!(in_three.not().matches(&[LocationId(9)]));
    }

    #[test]
    fn test_display() {
        let criterion = Criterion::location_id(nonempty![LocationId(3), LocationId(4)])
            .and(Criterion::location_id(nonempty![LocationId(7)]).not());
        assert_eq!(
            criterion.to_string(),
            "(location_id IN [3, 4] AND NOT location_id = 7)"
        );
    }
}
