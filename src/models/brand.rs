use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, EntitySchema, Field, FieldValue, Fields, id_field};

static SCHEMA: EntitySchema = EntitySchema {
    label: "Brand",
    columns: &["name", "image"],
    required: &["name", "image"],
    unique_key: "name",
    find_keys: &["id", "name"],
    delete_keys: &["id", "name"],
};

#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    /// Logo location; the file itself is stored elsewhere
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BrandInput {
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BrandKey {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl BrandKey {
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

impl Fields for Brand {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(Some(self.id)),
            ("name", Some(FieldValue::from(self.name.as_str()))),
            ("image", Some(FieldValue::from(self.image.as_str()))),
        ]
    }
}

impl Fields for BrandInput {
    fn fields(&self) -> Vec<Field> {
        vec![
            ("name", self.name.clone().map(FieldValue::from)),
            ("image", self.image.clone().map(FieldValue::from)),
        ]
    }
}

impl Fields for BrandKey {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(self.id),
            ("name", self.name.clone().map(FieldValue::from)),
        ]
    }
}

impl Entity for Brand {
    type Input = BrandInput;
    type Key = BrandKey;

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }
}
