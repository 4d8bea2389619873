use super::{push_quoted, Database, SqlFunction};

#[derive(Clone, Debug)]
pub struct Postgres;

impl Database for Postgres {
    fn push_placeholder(buf: &mut String, number: usize) {
        buf.push('$');
        buf.push_str(&number.to_string());
    }

    fn push_identifier(buf: &mut String, ident: &str) {
        push_quoted(buf, ident, '"');
    }

    fn apply_function(function: SqlFunction, expr: &str) -> String {
        match function {
            SqlFunction::Upper => format!("UPPER({})", expr),
            SqlFunction::Lower => format!("LOWER({})", expr),
            SqlFunction::IsoDayOfWeek => format!("EXTRACT(ISODOW FROM {})", expr),
            SqlFunction::DayOfMonth => format!("EXTRACT(DAY FROM {})", expr),
            SqlFunction::DayOfYear => format!("EXTRACT(DOY FROM {})", expr),
            SqlFunction::Month => format!("EXTRACT(MONTH FROM {})", expr),
            SqlFunction::Year => format!("EXTRACT(YEAR FROM {})", expr),
            SqlFunction::IsoWeek => format!("EXTRACT(WEEK FROM {})", expr),
            SqlFunction::Hour => format!("EXTRACT(HOUR FROM {})", expr),
            SqlFunction::Minute => format!("EXTRACT(MINUTE FROM {})", expr),
            SqlFunction::Second => format!("FLOOR(EXTRACT(SECOND FROM {}))", expr),
        }
    }
}

#[cfg(feature = "postgres")]
mod bind {
    use super::Postgres;
    use crate::render::RenderedSql;
    use crate::value::Value;

    pub type PgQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

    impl RenderedSql<Postgres> {
        /// Create an `sqlx` query for the rendered SQL with all parameters bound in order.
        ///
        /// The rendered SQL is only the condition, so this is mostly useful
        /// after [RenderedSql::prepend] has turned it into a full statement.
        pub fn bind(&self) -> PgQuery<'_> {
            let mut query = sqlx::query::<sqlx::Postgres>(self.sql());

            for param in self.params() {
                query = match param.clone() {
                    Value::Bool(value) => query.bind(value),
                    Value::Int(value) => query.bind(value),
                    Value::Float(value) => query.bind(value),
                    Value::Text(value) => query.bind(value),
                    Value::Date(value) => query.bind(value),
                    Value::Time(value) => query.bind(value),
                    Value::DateTime(value) => query.bind(value),
                    Value::Uuid(value) => query.bind(value),
                };
            }

            query
        }
    }
}

#[cfg(feature = "postgres")]
pub use bind::PgQuery;
