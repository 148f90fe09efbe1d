use sea_orm::{DbErr, FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, EntitySchema, Field, FieldValue, Fields, id_field};

static SCHEMA: EntitySchema = EntitySchema {
    label: "Product",
    columns: &[
        "category_id",
        "brand_id",
        "title",
        "code",
        "description",
        "stock",
        "minStock",
        "maxStock",
        "available",
        "unitCost",
        "unitPrice",
    ],
    required: &[
        "category_id",
        "brand_id",
        "title",
        "code",
        "description",
        "stock",
        "minStock",
        "maxStock",
        "available",
        "unitCost",
        "unitPrice",
    ],
    unique_key: "code",
    find_keys: &["id", "code", "title"],
    delete_keys: &["id", "code"],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub brand_id: i32,
    pub title: String,
    pub code: String,
    pub description: String,
    pub stock: i32,
    #[serde(rename = "minStock")]
    pub min_stock: i32,
    #[serde(rename = "maxStock")]
    pub max_stock: i32,
    pub available: bool,
    #[serde(rename = "unitCost")]
    pub unit_cost: f64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

// Stock and price columns are camelCase in the store.
impl FromQueryResult for Product {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            id: res.try_get(pre, "id")?,
            category_id: res.try_get(pre, "category_id")?,
            brand_id: res.try_get(pre, "brand_id")?,
            title: res.try_get(pre, "title")?,
            code: res.try_get(pre, "code")?,
            description: res.try_get(pre, "description")?,
            stock: res.try_get(pre, "stock")?,
            min_stock: res.try_get(pre, "minStock")?,
            max_stock: res.try_get(pre, "maxStock")?,
            available: res.try_get(pre, "available")?,
            unit_cost: res.try_get(pre, "unitCost")?,
            unit_price: res.try_get(pre, "unitPrice")?,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductInput {
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub stock: Option<i32>,
    #[serde(rename = "minStock")]
    pub min_stock: Option<i32>,
    #[serde(rename = "maxStock")]
    pub max_stock: Option<i32>,
    pub available: Option<bool>,
    #[serde(rename = "unitCost")]
    pub unit_cost: Option<f64>,
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductKey {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub title: Option<String>,
}

impl ProductKey {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

impl Fields for Product {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(Some(self.id)),
            ("category_id", Some(FieldValue::from(self.category_id))),
            ("brand_id", Some(FieldValue::from(self.brand_id))),
            ("title", Some(FieldValue::from(self.title.as_str()))),
            ("code", Some(FieldValue::from(self.code.as_str()))),
            ("description", Some(FieldValue::from(self.description.as_str()))),
            ("stock", Some(FieldValue::from(self.stock))),
            ("minStock", Some(FieldValue::from(self.min_stock))),
            ("maxStock", Some(FieldValue::from(self.max_stock))),
            ("available", Some(FieldValue::from(self.available))),
            ("unitCost", Some(FieldValue::from(self.unit_cost))),
            ("unitPrice", Some(FieldValue::from(self.unit_price))),
        ]
    }
}

impl Fields for ProductInput {
    fn fields(&self) -> Vec<Field> {
        vec![
            ("category_id", self.category_id.map(FieldValue::from)),
            ("brand_id", self.brand_id.map(FieldValue::from)),
            ("title", self.title.clone().map(FieldValue::from)),
            ("code", self.code.clone().map(FieldValue::from)),
            ("description", self.description.clone().map(FieldValue::from)),
            ("stock", self.stock.map(FieldValue::from)),
            ("minStock", self.min_stock.map(FieldValue::from)),
            ("maxStock", self.max_stock.map(FieldValue::from)),
            ("available", self.available.map(FieldValue::from)),
            ("unitCost", self.unit_cost.map(FieldValue::from)),
            ("unitPrice", self.unit_price.map(FieldValue::from)),
        ]
    }
}

impl Fields for ProductKey {
    fn fields(&self) -> Vec<Field> {
        vec![
            id_field(self.id),
            ("code", self.code.clone().map(FieldValue::from)),
            ("title", self.title.clone().map(FieldValue::from)),
        ]
    }
}

impl Entity for Product {
    type Input = ProductInput;
    type Key = ProductKey;

    fn schema() -> &'static EntitySchema {
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_reads_camel_case_payload() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "title": "Hammer",
            "minStock": 2,
            "available": false,
            "unitPrice": 12.5
        }))
        .unwrap();

        assert_eq!(input.min_stock, Some(2));
        assert_eq!(input.unit_price, Some(12.5));
        assert_eq!(input.present("available"), Some(FieldValue::Bool(false)));
        assert_eq!(input.present("code"), None);
    }

    #[test]
    fn test_required_order_matches_columns() {
        let schema = Product::schema();
        assert_eq!(schema.required, schema.columns);
        let declared: Vec<&str> = ProductInput::default()
            .fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(declared, schema.columns);
    }
}
