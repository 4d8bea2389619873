use super::{push_quoted, Database, SqlFunction};

#[derive(Clone, Debug)]
pub struct MySql;

impl Database for MySql {
    fn push_placeholder(buf: &mut String, _number: usize) {
        buf.push('?');
    }

    fn push_identifier(buf: &mut String, ident: &str) {
        push_quoted(buf, ident, '`');
    }

    fn apply_function(function: SqlFunction, expr: &str) -> String {
        match function {
            SqlFunction::Upper => format!("UPPER({})", expr),
            SqlFunction::Lower => format!("LOWER({})", expr),
            // WEEKDAY is zero based from monday
            SqlFunction::IsoDayOfWeek => format!("(WEEKDAY({}) + 1)", expr),
            SqlFunction::DayOfMonth => format!("DAYOFMONTH({})", expr),
            SqlFunction::DayOfYear => format!("DAYOFYEAR({})", expr),
            SqlFunction::Month => format!("MONTH({})", expr),
            SqlFunction::Year => format!("YEAR({})", expr),
            SqlFunction::IsoWeek => format!("WEEK({}, 3)", expr),
            SqlFunction::Hour => format!("HOUR({})", expr),
            SqlFunction::Minute => format!("MINUTE({})", expr),
            SqlFunction::Second => format!("SECOND({})", expr),
        }
    }
}
