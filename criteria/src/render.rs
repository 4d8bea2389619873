//!
//! Reference SQL renderer.
//!
//! Renders a [Criteria] into the condition of a WHERE clause for some [Database],
//! collecting literal values as bound parameters:
//!
//! ```
//! use criteria::database::Postgres;
//! use criteria::property;
//! use criteria::render::SqlRenderer;
//!
//! let criteria = property("Person", "name")
//!     .to_upper_case()
//!     .is("ADA")
//!     .or(property("Person", "email").is_null());
//!
//! let rendered = SqlRenderer::<Postgres>::new()
//!     .alias("Person", "p")
//!     .render(&criteria)
//!     .unwrap();
//!
//! assert_eq!(
//!     rendered.sql(),
//!     r#"(UPPER("p"."name") = $1 OR "p"."email" IS NULL)"#
//! );
//! ```
//!

use std::collections::HashMap;

use crate::builder::QueryBuilder;
use crate::criteria::{And, Comparison, ComparisonValue, Criteria, Or};
use crate::database::Database;
use crate::operand::Operand;
use crate::operator::Operator;
use crate::value::Value;
use crate::visit::CriteriaVisitor;
use crate::{CriteriaError, CriteriaResult};

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Number of parameters already bound by the enclosing statement.
    pub placeholder_offset: usize,

    /// Put every leaf comparison in parentheses.
    pub wrap_leaves: bool,

    /// Fail on entities without an alias, instead of using the entity name.
    pub require_aliases: bool,
}

pub struct SqlRenderer<DB: Database> {
    builder: QueryBuilder<DB>,
    aliases: HashMap<String, String>,
    options: RenderOptions,
}

impl<DB: Database> SqlRenderer<DB> {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            builder: QueryBuilder::with_placeholder_offset(options.placeholder_offset),
            aliases: HashMap::new(),
            options,
        }
    }

    /// Refer to properties of `entity_name` through the table alias `alias`.
    pub fn alias(mut self, entity_name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(entity_name.into(), alias.into());
        self
    }

    pub fn render(mut self, criteria: &Criteria) -> CriteriaResult<RenderedSql<DB>> {
        criteria.accept(&mut self)?;

        let (sql, params) = self.builder.build();
        tracing::trace!(%sql, params = params.len(), "rendered criteria");

        Ok(RenderedSql {
            sql,
            params,
            db: std::marker::PhantomData,
        })
    }

    fn operand_sql(&self, operand: &Operand) -> CriteriaResult<String> {
        let table = match self.aliases.get(operand.entity_name()) {
            Some(alias) => alias.as_str(),
            None if self.options.require_aliases => {
                return Err(CriteriaError::Render(format!(
                    "no alias for entity {}",
                    operand.entity_name()
                )))
            }
            None => operand.entity_name(),
        };

        let mut expr = String::new();
        DB::push_identifier(&mut expr, table);
        expr.push('.');
        DB::push_identifier(&mut expr, operand.property_name());

        // innermost first
        for function in operand.transforms() {
            expr = DB::apply_function(function, &expr);
        }

        Ok(expr)
    }

    fn push_operand(&mut self, operand: &Operand) -> CriteriaResult<()> {
        let expr = self.operand_sql(operand)?;
        self.builder.push(&expr);
        Ok(())
    }

    fn push_composite(
        &mut self,
        left: &Criteria,
        keyword: &str,
        right: &Criteria,
    ) -> CriteriaResult<()> {
        self.builder.push("(");
        left.accept(self)?;
        self.builder.push(" ");
        self.builder.push(keyword);
        self.builder.push(" ");
        right.accept(self)?;
        self.builder.push(")");
        Ok(())
    }

    fn push_list(&mut self, values: &[Value]) -> CriteriaResult<()> {
        self.builder.push("(");
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                self.builder.push(", ");
            }
            self.builder.push_param(value.clone())?;
        }
        self.builder.push(")");
        Ok(())
    }

    fn push_comparison(&mut self, comparison: &Comparison) -> CriteriaResult<()> {
        let operator = comparison.operator();

        if let ComparisonValue::List(values) = comparison.value() {
            if values.is_empty() {
                // `x IN ()` is not valid SQL
                self.builder.push(match operator {
                    Operator::NotIn => "TRUE",
                    _ => "FALSE",
                });
                return Ok(());
            }
        }

        self.push_operand(comparison.left())?;
        self.builder.push(" ");
        self.builder.push(DB::operator_sql(operator));

        match comparison.value() {
            ComparisonValue::None => {}
            ComparisonValue::Value(value) => {
                self.builder.push(" ");
                self.builder.push_param(value.clone())?;
            }
            ComparisonValue::Property(other) => {
                self.builder.push(" ");
                self.push_operand(other)?;
            }
            ComparisonValue::List(values) => {
                self.builder.push(" ");
                self.push_list(values)?;
            }
        }

        Ok(())
    }
}

impl<DB: Database> Default for SqlRenderer<DB> {
    fn default() -> Self {
        Self::new()
    }
}

impl<DB: Database> CriteriaVisitor for SqlRenderer<DB> {
    type Output = CriteriaResult<()>;

    fn visit_and(&mut self, and: &And) -> Self::Output {
        self.push_composite(and.left(), "AND", and.right())
    }

    fn visit_or(&mut self, or: &Or) -> Self::Output {
        self.push_composite(or.left(), "OR", or.right())
    }

    fn visit_comparison(&mut self, comparison: &Comparison) -> Self::Output {
        if self.options.wrap_leaves {
            self.builder.push("(");
            self.push_comparison(comparison)?;
            self.builder.push(")");
            Ok(())
        } else {
            self.push_comparison(comparison)
        }
    }
}

/// The output of [SqlRenderer]: SQL text and its parameters, in placeholder order.
#[derive(Clone, Debug)]
pub struct RenderedSql<DB: Database> {
    sql: String,
    params: Vec<Value>,
    db: std::marker::PhantomData<DB>,
}

impl<DB: Database> RenderedSql<DB> {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Put `prefix` in front of the SQL, e.g. `"SELECT * FROM person p WHERE "`.
    pub fn prepend(mut self, prefix: &str) -> Self {
        self.sql.insert_str(0, prefix);
        self
    }
}

/// Render with default options and no aliases.
pub fn to_sql<DB: Database>(criteria: &Criteria) -> CriteriaResult<RenderedSql<DB>> {
    SqlRenderer::<DB>::new().render(criteria)
}
