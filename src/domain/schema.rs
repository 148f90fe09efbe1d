//! Entity schemas
//!
//! Each catalog entity declares its attributes as an explicit, ordered list
//! of `(name, value)` pairs. The repository protocol only ever walks these
//! lists, so "first missing field" and "first unchanged field" are decided
//! by declaration order.

use sea_orm::FromQueryResult;
use serde::Serialize;

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Decimal(f64),
}

impl FieldValue {
    /// Empty strings count as not supplied.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<FieldValue> for sea_orm::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Int(v) => sea_orm::Value::from(v),
            FieldValue::Text(v) => sea_orm::Value::from(v),
            FieldValue::Bool(v) => sea_orm::Value::from(v),
            FieldValue::Decimal(v) => sea_orm::Value::from(v),
        }
    }
}

/// One entry of an ordered field list. `None` means the value was not set.
pub type Field = (&'static str, Option<FieldValue>);

/// Ordered field access for records, inputs and lookup keys.
pub trait Fields {
    /// All fields in declared order.
    fn fields(&self) -> Vec<Field>;

    /// Fields that were actually supplied, in declared order.
    fn present_fields(&self) -> Vec<(&'static str, FieldValue)> {
        self.fields()
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(value) if !value.is_blank() => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    /// The supplied value of `name`, if any.
    fn present(&self, name: &str) -> Option<FieldValue> {
        self.present_fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// Lookup-key entry for a numeric id. An id of 0 is treated as not supplied.
pub fn id_field(id: Option<i32>) -> Field {
    ("id", id.filter(|id| *id != 0).map(FieldValue::from))
}

/// Static description of one catalog table.
#[derive(Debug)]
pub struct EntitySchema {
    /// Human name used in messages, e.g. "Category"
    pub label: &'static str,
    /// Persisted attributes (without `id`) in insert order
    pub columns: &'static [&'static str],
    /// Fields that must be supplied on create, in check order
    pub required: &'static [&'static str],
    /// Natural key checked for duplicates before insert
    pub unique_key: &'static str,
    /// Keys accepted by find_one, in precedence order
    pub find_keys: &'static [&'static str],
    /// Keys accepted by delete, in precedence order
    pub delete_keys: &'static [&'static str],
}

impl EntitySchema {
    pub fn noun(&self) -> String {
        self.label.to_lowercase()
    }

    /// "ID or name", "ID, code or title"
    pub fn describe_keys(keys: &[&str]) -> String {
        let names: Vec<&str> = keys
            .iter()
            .map(|key| if *key == "id" { "ID" } else { *key })
            .collect();

        match names.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_owned(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        }
    }
}

/// A catalog entity: a stored record type plus its input and lookup types.
pub trait Entity: FromQueryResult + Fields + Serialize + Send + Sync + 'static {
    /// Create payload, also used as the partial update payload
    type Input: Fields + Send + Sync + 'static;
    /// Lookup selector for find_one and delete
    type Key: Fields + Send + Sync + 'static;

    fn schema() -> &'static EntitySchema;
}
