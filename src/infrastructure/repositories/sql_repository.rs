//! SeaORM implementation of CatalogRepository
//!
//! One generic repository serves every catalog table. The entity type
//! supplies the schema; the table name comes from configuration.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, ExecResult, Statement, Value};

use super::sql;
use crate::domain::validation::{build_patch, check_changed, check_required, resolve_key};
use crate::domain::{
    CatalogRepository, DomainError, Entity, EntitySchema, ErrorSignal, FieldValue, Fields,
    WriteOutcome,
};

/// Raw-statement repository over a pooled connection
pub struct SqlRepository<E> {
    db: DatabaseConnection,
    table: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqlRepository<E> {
    pub fn new(db: DatabaseConnection, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            _entity: PhantomData,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn schema(&self) -> &'static EntitySchema {
        E::schema()
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    fn not_found(&self) -> ErrorSignal {
        ErrorSignal::not_found(format!("{} not found", self.schema().label))
    }

    async fn select_by(&self, column: &str, value: FieldValue) -> Result<Vec<E>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            self.backend(),
            &sql::select(self.backend(), &self.table, Some(column)),
            [Value::from(value)],
        );
        E::find_by_statement(stmt).all(&self.db).await
    }

    async fn execute(&self, text: String, values: Vec<Value>) -> Result<ExecResult, DbErr> {
        let stmt = Statement::from_sql_and_values(self.backend(), &text, values);
        self.db.execute(stmt).await
    }
}

#[async_trait]
impl<E: Entity> CatalogRepository<E> for SqlRepository<E> {
    async fn find(&self) -> Result<Vec<E>, DomainError> {
        tracing::debug!("find - table={}", self.table);

        let text = sql::select(self.backend(), &self.table, None);
        let stmt = Statement::from_string(self.backend(), text);
        let rows = E::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows)
    }

    async fn find_one(&self, key: E::Key) -> Result<E, DomainError> {
        let schema = self.schema();
        let (column, value) = resolve_key(schema, schema.find_keys, &key)?;
        tracing::debug!("find_one - table={}, key={}", self.table, column);

        let row = self
            .select_by(column, value)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| self.not_found())?;

        Ok(row)
    }

    async fn create(&self, input: E::Input) -> Result<WriteOutcome, DomainError> {
        let schema = self.schema();
        check_required(schema, &input)?;

        if let Some(value) = input.present(schema.unique_key) {
            let existing = self.select_by(schema.unique_key, value).await?;
            if !existing.is_empty() {
                let message = format!("{} already exists", schema.label);
                return Err(ErrorSignal::conflict(message).into());
            }
        }

        let values: Vec<Value> = schema
            .columns
            .iter()
            .map(|column| match input.present(column) {
                Some(value) => Value::from(value),
                None => Value::String(None),
            })
            .collect();

        tracing::debug!("create - table={}", self.table);
        let result = self
            .execute(sql::insert(self.backend(), &self.table, schema.columns), values)
            .await?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: Some(result.last_insert_id()),
        })
    }

    async fn update(&self, id: i32, patch: Option<E::Input>) -> Result<WriteOutcome, DomainError> {
        let fields = build_patch(self.schema(), id, patch.as_ref())?;

        let existing = self
            .select_by("id", FieldValue::from(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| self.not_found())?;
        check_changed(&fields, &existing)?;

        let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let mut values: Vec<Value> = fields
            .into_iter()
            .map(|(_, value)| Value::from(value))
            .collect();
        values.push(Value::from(id));

        tracing::debug!("update - table={}, id={}, fields={:?}", self.table, id, columns);
        let result = self
            .execute(sql::update(self.backend(), &self.table, &columns), values)
            .await?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: None,
        })
    }

    async fn delete(&self, key: E::Key) -> Result<WriteOutcome, DomainError> {
        let schema = self.schema();
        let (column, value) = resolve_key(schema, schema.delete_keys, &key)?;

        if self.select_by(column, value.clone()).await?.is_empty() {
            return Err(self.not_found().into());
        }

        tracing::debug!("delete - table={}, key={}", self.table, column);
        let result = self
            .execute(sql::delete(self.backend(), &self.table, column), vec![Value::from(value)])
            .await?;

        Ok(WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: None,
        })
    }
}
