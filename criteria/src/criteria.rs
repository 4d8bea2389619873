//!
//! The predicate tree.
//!

use crate::operand::Operand;
use crate::operator::Operator;
use crate::value::Value;
use crate::visit::CriteriaVisitor;
use crate::{CriteriaError, CriteriaResult, NodeKind};

///
/// A filter condition: a conjunction, a disjunction or a leaf comparison.
///
/// The tree is interpreted exactly as built. `a.and(b).or(c)` is
/// `Or(And(a, b), c)`, nothing is flattened or reordered.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Criteria {
    And(And),
    Or(Or),
    Comparison(Comparison),
}

impl Criteria {
    /// Dispatch to the visitor handler for this node.
    ///
    /// The visitor is responsible for recursing into children.
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: CriteriaVisitor + ?Sized,
    {
        match self {
            Criteria::And(and) => visitor.visit_and(and),
            Criteria::Or(or) => visitor.visit_or(or),
            Criteria::Comparison(comparison) => visitor.visit_comparison(comparison),
        }
    }

    pub fn and(self, other: Criteria) -> Criteria {
        Criteria::And(And::new(self, other))
    }

    pub fn or(self, other: Criteria) -> Criteria {
        Criteria::Or(Or::new(self, other))
    }

    /// Conjunction of all given criteria, nested to the left:
    /// `[a, b, c]` becomes `((a AND b) AND c)`.
    pub fn all_of(criteria: impl IntoIterator<Item = Criteria>) -> CriteriaResult<Criteria> {
        fold(NodeKind::And, criteria, Criteria::and)
    }

    /// Disjunction of all given criteria, nested to the left.
    pub fn any_of(criteria: impl IntoIterator<Item = Criteria>) -> CriteriaResult<Criteria> {
        fold(NodeKind::Or, criteria, Criteria::or)
    }
}

fn fold(
    node: NodeKind,
    criteria: impl IntoIterator<Item = Criteria>,
    combine: fn(Criteria, Criteria) -> Criteria,
) -> CriteriaResult<Criteria> {
    let mut iter = criteria.into_iter();
    let first = iter.next().ok_or_else(|| {
        tracing::debug!(%node, "rejected composition of an empty list");
        CriteriaError::MalformedComposition { node }
    })?;

    Ok(iter.fold(first, combine))
}

fn required(node: NodeKind, child: Option<Criteria>) -> CriteriaResult<Box<Criteria>> {
    match child {
        Some(child) => Ok(Box::new(child)),
        None => {
            tracing::debug!(%node, "rejected composition with a missing child");
            Err(CriteriaError::MalformedComposition { node })
        }
    }
}

/// Logical conjunction of two criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct And {
    left: Box<Criteria>,
    right: Box<Criteria>,
}

impl And {
    pub fn new(left: Criteria, right: Criteria) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build from children that may be missing, e.g. decoded from user input.
    pub fn try_new(left: Option<Criteria>, right: Option<Criteria>) -> CriteriaResult<Self> {
        Ok(Self {
            left: required(NodeKind::And, left)?,
            right: required(NodeKind::And, right)?,
        })
    }

    pub fn left(&self) -> &Criteria {
        &self.left
    }

    pub fn right(&self) -> &Criteria {
        &self.right
    }
}

/// Logical disjunction of two criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct Or {
    left: Box<Criteria>,
    right: Box<Criteria>,
}

impl Or {
    pub fn new(left: Criteria, right: Criteria) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn try_new(left: Option<Criteria>, right: Option<Criteria>) -> CriteriaResult<Self> {
        Ok(Self {
            left: required(NodeKind::Or, left)?,
            right: required(NodeKind::Or, right)?,
        })
    }

    pub fn left(&self) -> &Criteria {
        &self.left
    }

    pub fn right(&self) -> &Criteria {
        &self.right
    }
}

impl From<And> for Criteria {
    fn from(and: And) -> Self {
        Criteria::And(and)
    }
}

impl From<Or> for Criteria {
    fn from(or: Or) -> Self {
        Criteria::Or(or)
    }
}

impl From<Comparison> for Criteria {
    fn from(comparison: Comparison) -> Self {
        Criteria::Comparison(comparison)
    }
}

/// Right hand side of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum ComparisonValue {
    /// Only for `IS_NULL` and `IS_NOT_NULL`.
    None,
    Value(Value),
    /// Column to column comparison.
    Property(Operand),
    /// Only for `IN` and `NOT_IN`.
    List(Vec<Value>),
}

impl ComparisonValue {
    pub fn is_none(&self) -> bool {
        matches!(self, ComparisonValue::None)
    }

    fn shape(&self) -> &'static str {
        match self {
            ComparisonValue::None => "no value",
            ComparisonValue::Value(_) => "a single value",
            ComparisonValue::Property(_) => "a property",
            ComparisonValue::List(_) => "a list",
        }
    }

    fn fits(&self, operator: Operator) -> bool {
        match self {
            ComparisonValue::None => operator.is_unary(),
            ComparisonValue::List(_) => operator.is_collection(),
            ComparisonValue::Value(_) | ComparisonValue::Property(_) => {
                !operator.is_unary() && !operator.is_collection()
            }
        }
    }
}

/// Leaf comparison of an operand against a value, another operand or nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    left: Operand,
    operator: Operator,
    value: ComparisonValue,
}

impl Comparison {
    /// Build a comparison where the operator is only known at runtime.
    ///
    /// Prefer the comparison methods on [Operand], which cannot pair an
    /// operator with the wrong kind of value.
    pub fn new(left: Operand, operator: Operator, value: ComparisonValue) -> CriteriaResult<Self> {
        if !value.fits(operator) {
            tracing::debug!(
                %operator,
                shape = value.shape(),
                "rejected comparison with invalid value"
            );
            return Err(CriteriaError::InvalidOperatorValue {
                operator,
                shape: value.shape(),
            });
        }

        Ok(Self::typed(left, operator, value))
    }

    /// The caller guarantees that `value` fits `operator`.
    pub(crate) fn typed(left: Operand, operator: Operator, value: ComparisonValue) -> Self {
        debug_assert!(value.fits(operator));
        Self {
            left,
            operator,
            value,
        }
    }

    pub fn left(&self) -> &Operand {
        &self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &ComparisonValue {
        &self.value
    }
}
