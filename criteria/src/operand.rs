//!
//! Property operands and their transform chain.
//!

use std::collections::VecDeque;

use crate::criteria::{Comparison, ComparisonValue, Criteria};
use crate::database::SqlFunction;
use crate::operator::Operator;
use crate::value::Value;

///
/// A reference to one property of one entity, plus the functions
/// to apply to its value before comparing it.
///
/// Transforms are recorded by _front insertion_: the transform requested last
/// becomes the first element of [Operand::transforms], and is applied first.
///
/// ```
/// use criteria::database::SqlFunction;
/// use criteria::property;
///
/// let operand = property("Event", "start").date_to_year().to_upper_case();
/// assert_eq!(operand.transforms(), vec![SqlFunction::Upper, SqlFunction::Year]);
/// ```
///
/// Every chaining method consumes the operand and hands the same value back,
/// and every comparison method consumes it into the resulting [Criteria].
/// An operand that is part of a tree can no longer have its transforms changed.
///
/// Comparison constructors only accept the value shape that is legal for
/// their operator, so e.g. a set membership test against a single literal
/// does not compile:
///
/// ```compile_fail
/// criteria::property("Person", "id").is_in(5);
/// ```
///
/// ```compile_fail
/// criteria::property("Person", "id").is_null(5);
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operand {
    entity_name: String,
    property_name: String,
    transforms: VecDeque<SqlFunction>,
}

impl Operand {
    pub fn new(entity_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            property_name: property_name.into(),
            transforms: VecDeque::new(),
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The transforms to apply, innermost first.
    pub fn transforms(&self) -> Vec<SqlFunction> {
        self.transforms.iter().copied().collect()
    }

    fn apply(mut self, function: SqlFunction) -> Self {
        self.transforms.push_front(function);
        self
    }

    pub fn to_upper_case(self) -> Self {
        self.apply(SqlFunction::Upper)
    }

    pub fn to_lower_case(self) -> Self {
        self.apply(SqlFunction::Lower)
    }

    /// ISO day of week, monday is 1.
    pub fn date_to_iso_day_of_week(self) -> Self {
        self.apply(SqlFunction::IsoDayOfWeek)
    }

    pub fn date_to_day_of_month(self) -> Self {
        self.apply(SqlFunction::DayOfMonth)
    }

    pub fn date_to_day_of_year(self) -> Self {
        self.apply(SqlFunction::DayOfYear)
    }

    pub fn date_to_month(self) -> Self {
        self.apply(SqlFunction::Month)
    }

    pub fn date_to_year(self) -> Self {
        self.apply(SqlFunction::Year)
    }

    pub fn date_to_iso_week(self) -> Self {
        self.apply(SqlFunction::IsoWeek)
    }

    pub fn time_to_hour(self) -> Self {
        self.apply(SqlFunction::Hour)
    }

    pub fn time_to_minute(self) -> Self {
        self.apply(SqlFunction::Minute)
    }

    pub fn time_to_second(self) -> Self {
        self.apply(SqlFunction::Second)
    }

    fn compare(self, operator: Operator, value: ComparisonValue) -> Criteria {
        Criteria::Comparison(Comparison::typed(self, operator, value))
    }

    fn compare_value(self, operator: Operator, value: impl Into<Value>) -> Criteria {
        self.compare(operator, ComparisonValue::Value(value.into()))
    }

    fn compare_property(self, operator: Operator, other: Operand) -> Criteria {
        self.compare(operator, ComparisonValue::Property(other))
    }

    fn compare_list<V>(self, operator: Operator, values: &[V]) -> Criteria
    where
        V: Clone + Into<Value>,
    {
        let values = values.iter().cloned().map(Into::into).collect();
        self.compare(operator, ComparisonValue::List(values))
    }

    pub fn is(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::Equals, value)
    }

    pub fn is_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::Equals, other)
    }

    pub fn is_not(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::NotEquals, value)
    }

    pub fn is_not_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::NotEquals, other)
    }

    pub fn greater_than(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::GreaterThan, value)
    }

    pub fn greater_than_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::GreaterThan, other)
    }

    pub fn greater_or_equal_to(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::GreaterThanOrEqual, value)
    }

    pub fn greater_or_equal_to_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::GreaterThanOrEqual, other)
    }

    pub fn less_than(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::LessThan, value)
    }

    pub fn less_than_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::LessThan, other)
    }

    pub fn less_or_equal_to(self, value: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::LessThanOrEqual, value)
    }

    pub fn less_or_equal_to_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::LessThanOrEqual, other)
    }

    pub fn is_null(self) -> Criteria {
        self.compare(Operator::IsNull, ComparisonValue::None)
    }

    pub fn is_not_null(self) -> Criteria {
        self.compare(Operator::IsNotNull, ComparisonValue::None)
    }

    pub fn like(self, pattern: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::Like, pattern)
    }

    pub fn like_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::Like, other)
    }

    pub fn not_like(self, pattern: impl Into<Value>) -> Criteria {
        self.compare_value(Operator::NotLike, pattern)
    }

    pub fn not_like_property(self, other: Operand) -> Criteria {
        self.compare_property(Operator::NotLike, other)
    }

    /// Set membership. The values are copied into the comparison.
    pub fn is_in<V>(self, values: &[V]) -> Criteria
    where
        V: Clone + Into<Value>,
    {
        self.compare_list(Operator::In, values)
    }

    pub fn not_in<V>(self, values: &[V]) -> Criteria
    where
        V: Clone + Into<Value>,
    {
        self.compare_list(Operator::NotIn, values)
    }
}
