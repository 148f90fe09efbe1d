use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, EntitySchema, Field, FieldValue, Fields, id_field};

static SCHEMA: EntitySchema = EntitySchema {
    label: "Category",
    columns: &["name", "description"],
    required: &["name", "description"],
    unique_key: "name",
    find_keys: &["id", "name"],
    delete_keys: &["id", "name"],
};

#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryKey {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl CategoryKey {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Fields for Category {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(Some(self.id)),
            ("name", Some(FieldValue::from(self.name.as_str()))),
            ("description", Some(FieldValue::from(self.description.as_str()))),
        ]
    }
}

impl Fields for CategoryInput {
    fn fields(&self) -> Vec<Field> {
        vec![
            ("name", self.name.clone().map(FieldValue::from)),
            ("description", self.description.clone().map(FieldValue::from)),
        ]
    }
}

impl Fields for CategoryKey {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(self.id),
            ("name", self.name.clone().map(FieldValue::from)),
        ]
    }
}

impl Entity for Category {
    type Input = CategoryInput;
    type Key = CategoryKey;

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }
}
