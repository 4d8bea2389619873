pub mod mysql;
pub mod postgres;

pub use mysql::MySql;
pub use postgres::Postgres;

use crate::operator::Operator;

/// Scalar function applied to an operand before it is compared.
///
/// The predicate tree only stores these; spelling them is up to the [Database].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SqlFunction {
    Upper,
    Lower,
    IsoDayOfWeek,
    DayOfMonth,
    DayOfYear,
    Month,
    Year,
    IsoWeek,
    Hour,
    Minute,
    Second,
}

impl SqlFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlFunction::Upper => "UPPER",
            SqlFunction::Lower => "LOWER",
            SqlFunction::IsoDayOfWeek => "ISO_DAY_OF_WEEK",
            SqlFunction::DayOfMonth => "DAY_OF_MONTH",
            SqlFunction::DayOfYear => "DAY_OF_YEAR",
            SqlFunction::Month => "MONTH",
            SqlFunction::Year => "YEAR",
            SqlFunction::IsoWeek => "ISO_WEEK",
            SqlFunction::Hour => "HOUR",
            SqlFunction::Minute => "MINUTE",
            SqlFunction::Second => "SECOND",
        }
    }
}

///
/// An SQL dialect.
///
/// Dialects are used at the type level, e.g. `SqlRenderer<Postgres>`,
/// so every method is an associated function.
///
pub trait Database: std::fmt::Debug + Sync + Send + Clone + 'static {
    /// Write the placeholder of the parameter with one based `number`.
    fn push_placeholder(buf: &mut String, number: usize);

    /// Write a quoted identifier.
    fn push_identifier(buf: &mut String, ident: &str);

    /// Wrap `expr` in the dialect's spelling of `function`.
    fn apply_function(function: SqlFunction, expr: &str) -> String;

    fn operator_sql(operator: Operator) -> &'static str {
        match operator {
            Operator::Equals => "=",
            Operator::NotEquals => "<>",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }
}

/// Write `ident` surrounded by `quote`, doubling any embedded quote.
pub(crate) fn push_quoted(buf: &mut String, ident: &str, quote: char) {
    buf.push(quote);
    for ch in ident.chars() {
        if ch == quote {
            buf.push(quote);
        }
        buf.push(ch);
    }
    buf.push(quote);
}
