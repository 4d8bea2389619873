//!
//! Interpretation of criteria trees.
//!

use crate::criteria::{And, Comparison, Or};

///
/// One handler per [Criteria](crate::Criteria) variant.
///
/// A visitor is driven by [Criteria::accept](crate::Criteria::accept) and owns its
/// recursion: a handler for a composite node decides whether, and in which order,
/// to call `accept` on the children.
///
/// ```
/// use criteria::visit::CriteriaVisitor;
/// use criteria::{property, And, Comparison, Or};
///
/// /// Counts leaf comparisons.
/// struct Leaves;
///
/// impl CriteriaVisitor for Leaves {
///     type Output = usize;
///
///     fn visit_and(&mut self, and: &And) -> usize {
///         and.left().accept(self) + and.right().accept(self)
///     }
///
///     fn visit_or(&mut self, or: &Or) -> usize {
///         or.left().accept(self) + or.right().accept(self)
///     }
///
///     fn visit_comparison(&mut self, _: &Comparison) -> usize {
///         1
///     }
/// }
///
/// let criteria = property("E", "a").is(1).or(property("E", "b").is_null().and(property("E", "c").is(2)));
/// assert_eq!(criteria.accept(&mut Leaves), 3);
/// ```
///
pub trait CriteriaVisitor {
    type Output;

    fn visit_and(&mut self, and: &And) -> Self::Output;

    fn visit_or(&mut self, or: &Or) -> Self::Output;

    fn visit_comparison(&mut self, comparison: &Comparison) -> Self::Output;
}
