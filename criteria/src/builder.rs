use crate::database::Database;
use crate::value::Value;
use crate::{CriteriaError, CriteriaResult};

/// SQL text buffer that also collects bound parameters.
pub struct QueryBuilder<DB: Database> {
    db: std::marker::PhantomData<DB>,
    placeholder_offset: usize,
    buf: String,
    params: Vec<Value>,
}

impl<DB: Database> QueryBuilder<DB> {
    pub fn new() -> Self {
        Self::with_placeholder_offset(0)
    }

    /// The first parameter pushed gets placeholder number `offset + 1`,
    /// for conditions that are appended to a statement which already has parameters.
    pub fn with_placeholder_offset(offset: usize) -> Self {
        Self {
            db: std::marker::PhantomData,
            placeholder_offset: offset,
            buf: String::new(),
            params: Vec::new(),
        }
    }

    pub fn build(self) -> (String, Vec<Value>) {
        (self.buf, self.params)
    }

    pub fn push(&mut self, str: &str) {
        self.buf.push_str(str);
    }

    pub fn push_identifier(&mut self, ident: &str) {
        DB::push_identifier(&mut self.buf, ident);
    }

    pub fn push_param(&mut self, value: Value) -> CriteriaResult<()> {
        let number = self
            .placeholder_offset
            .checked_add(self.params.len())
            .and_then(|index| index.checked_add(1))
            .ok_or_else(|| {
                CriteriaError::Render(format!(
                    "placeholder number overflows with offset {}",
                    self.placeholder_offset
                ))
            })?;

        DB::push_placeholder(&mut self.buf, number);
        self.params.push(value);
        Ok(())
    }
}

impl<DB: Database> Default for QueryBuilder<DB> {
    fn default() -> Self {
        Self::new()
    }
}
