//!
//! Literal values on the right hand side of a comparison.
//!

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(Bool: bool);
impl_from!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float: f32, f64);
impl_from!(Text: String, &str, &String);
impl_from!(Date: NaiveDate);
impl_from!(Time: NaiveTime);
impl_from!(DateTime: NaiveDateTime);
impl_from!(Uuid: Uuid);
