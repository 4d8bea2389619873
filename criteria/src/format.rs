//!
//! Human readable dumps of criteria trees. This is not SQL.
//!

use std::fmt;

use crate::criteria::{And, Comparison, ComparisonValue, Criteria, Or};
use crate::database::SqlFunction;
use crate::operand::Operand;
use crate::operator::Operator;
use crate::value::Value;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SqlFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "'{}'", value),
            Value::Date(value) => write!(f, "'{}'", value),
            Value::Time(value) => write!(f, "'{}'", value),
            Value::DateTime(value) => write!(f, "'{}'", value),
            Value::Uuid(value) => write!(f, "'{}'", value),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity_name(), self.property_name())
    }
}

impl fmt::Display for ComparisonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonValue::None => f.write_str("null"),
            ComparisonValue::Value(value) => write!(f, "{}", value),
            ComparisonValue::Property(operand) => write!(f, "{}", operand),
            ComparisonValue::List(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left(), self.operator(), self.value())
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} AND {})", self.left(), self.right())
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} OR {})", self.left(), self.right())
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::And(and) => fmt::Display::fmt(and, f),
            Criteria::Or(or) => fmt::Display::fmt(or, f),
            Criteria::Comparison(comparison) => fmt::Display::fmt(comparison, f),
        }
    }
}
