//!
//! Dialect-independent filter conditions.
//!
//! A [Criteria] is a binary tree of conjunctions, disjunctions and leaf
//! comparisons over entity properties:
//!
//! ```text
//!            OR
//!          /    \
//!       AND      c
//!      /   \
//!     a     b
//! ```
//!
//! The tree knows nothing about SQL. Renderers implement [visit::CriteriaVisitor]
//! and walk the tree themselves, see [render::SqlRenderer] for one that
//! produces a WHERE clause plus bound parameters for a given [database::Database].
//!
//! ```
//! use criteria::property;
//!
//! let adults = property("Person", "age").greater_or_equal_to(18);
//! let named_a = property("Person", "name").to_lower_case().like("a%");
//!
//! let criteria = adults.and(named_a);
//! assert_eq!(
//!     criteria.to_string(),
//!     "(Person.age GREATER_THAN_OR_EQUAL 18 AND Person.name LIKE 'a%')"
//! );
//! ```
//!

#![forbid(unsafe_code)]

pub use criteria_macros::*;

pub mod builder;
pub mod criteria;
pub mod database;
pub mod operand;
pub mod operator;
pub mod prelude;
pub mod render;
pub mod value;
pub mod visit;

mod format;

pub use crate::criteria::{And, Comparison, ComparisonValue, Criteria, Or};
pub use operand::Operand;
pub use operator::Operator;
pub use value::Value;

/// A named entity whose properties can be used as operands.
///
/// Usually implemented through the [entity] attribute macro.
pub trait Entity {
    const NAME: &'static str;
}

/// Create an operand referring to `property_name` of `entity_name`.
///
/// Neither name is checked against any schema.
pub fn property(entity_name: impl Into<String>, property_name: impl Into<String>) -> Operand {
    Operand::new(entity_name, property_name)
}

/// The composite node kinds, used for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    And,
    Or,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::And => f.write_str("AND"),
            NodeKind::Or => f.write_str("OR"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("Malformed {node} composition: missing operand")]
    MalformedComposition { node: NodeKind },

    #[error("Invalid value for operator {operator}: got {shape}")]
    InvalidOperatorValue {
        operator: Operator,
        shape: &'static str,
    },

    #[error("Render error: {0}")]
    Render(String),
}

pub type CriteriaResult<T> = Result<T, CriteriaError>;
