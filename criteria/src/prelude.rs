pub use crate::database::{Database, SqlFunction};
pub use crate::render::SqlRenderer;
pub use crate::visit::CriteriaVisitor;
pub use crate::{property, Criteria, Entity, Operand, Operator, Value};
