use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, EntitySchema, Field, FieldValue, Fields, id_field};

// Images are read by id only, but may be deleted by url as well.
static SCHEMA: EntitySchema = EntitySchema {
    label: "Image",
    columns: &["product_id", "url", "description"],
    required: &["product_id", "url", "description"],
    unique_key: "url",
    find_keys: &["id"],
    delete_keys: &["id", "url"],
};

#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct Image {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageInput {
    pub product_id: Option<i32>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageKey {
    pub id: Option<i32>,
    pub url: Option<String>,
}

impl ImageKey {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

impl Fields for Image {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(Some(self.id)),
            ("product_id", Some(FieldValue::from(self.product_id))),
            ("url", Some(FieldValue::from(self.url.as_str()))),
            ("description", Some(FieldValue::from(self.description.as_str()))),
        ]
    }
}

impl Fields for ImageInput {
    fn fields(&self) -> Vec<Field> {
        vec![
            ("product_id", self.product_id.map(FieldValue::from)),
            ("url", self.url.clone().map(FieldValue::from)),
            ("description", self.description.clone().map(FieldValue::from)),
        ]
    }
}

impl Fields for ImageKey {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(self.id),
            ("url", self.url.clone().map(FieldValue::from)),
        ]
    }
}

impl Entity for Image {
    type Input = ImageInput;
    type Key = ImageKey;

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }
}
