//! Declarative field descriptors shared by all entity services.
//!
//! Each resource declares one [`EntitySchema`] constant describing its table
//! shape: which payload keys map to which columns, which are nullable, which
//! must stay unique, and which hold secrets. The partial-update engine and the
//! shared existence/uniqueness/delete guards are all driven off these
//! descriptors, so the gate-and-mutate logic is written once instead of once
//! per controller.

use sqlx::PgPool;

use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Bool,
}

/// One updatable field of an entity.
///
/// `name` is the JSON payload key, `column` the database column (they differ
/// only for secret fields, where `password` lands in `password_hash`).
/// `label` is the human-facing name used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    pub unique: bool,
    pub secret: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column: name,
            label,
            kind,
            nullable: false,
            unique: false,
            secret: false,
        }
    }

    pub const fn nullable(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            nullable: true,
            ..Self::required(name, label, kind)
        }
    }

    pub const fn unique(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            unique: true,
            ..Self::required(name, label, kind)
        }
    }

    pub const fn unique_nullable(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            unique: true,
            nullable: true,
            ..Self::required(name, label, kind)
        }
    }

    /// Secret text field: hashed before storage, never echoed back.
    pub const fn secret(name: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            name,
            column,
            label,
            kind: FieldKind::Text,
            nullable: false,
            unique: false,
            secret: true,
        }
    }
}

/// Table shape of one resource. All identifiers are compile-time constants,
/// so interpolating them into SQL text is safe.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub table: &'static str,
    pub id_column: &'static str,
    /// Human-facing entity name used in error messages, e.g. "Driver".
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn not_found(&self) -> AppError {
        AppError::not_found(format!("{} not found.", self.label))
    }
}

pub async fn exists(pool: &PgPool, schema: &EntitySchema, id: i64) -> Result<bool, AppError> {
    let sql = format!(
        "SELECT {id} FROM {table} WHERE {id} = $1",
        id = schema.id_column,
        table = schema.table,
    );
    let found = sqlx::query_scalar::<_, i64>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn ensure_exists(pool: &PgPool, schema: &EntitySchema, id: i64) -> Result<(), AppError> {
    if exists(pool, schema, id).await? {
        Ok(())
    } else {
        Err(schema.not_found())
    }
}

/// Read-before-write uniqueness guard. With `exclude_id` set, rows other than
/// the update target holding the candidate value count as conflicts.
pub async fn ensure_unique(
    pool: &PgPool,
    schema: &EntitySchema,
    field: &FieldSpec,
    value: &str,
    exclude_id: Option<i64>,
) -> Result<(), AppError> {
    let sql = match exclude_id {
        Some(_) => format!(
            "SELECT {id} FROM {table} WHERE {column} = $1 AND {id} <> $2",
            id = schema.id_column,
            table = schema.table,
            column = field.column,
        ),
        None => format!(
            "SELECT {id} FROM {table} WHERE {column} = $1",
            id = schema.id_column,
            table = schema.table,
            column = field.column,
        ),
    };

    let mut query = sqlx::query_scalar::<_, i64>(&sql).bind(value);
    if let Some(id) = exclude_id {
        query = query.bind(id);
    }

    if query.fetch_optional(pool).await?.is_some() {
        return Err(AppError::conflict(format!("{} already exists.", field.label)));
    }
    Ok(())
}

/// Existence-checked delete. A foreign-key violation means dependent rows
/// still reference the target and surfaces as `ReferencedByOthers` with the
/// caller-supplied message instead of a generic server error.
pub async fn delete_by_id(
    pool: &PgPool,
    schema: &EntitySchema,
    id: i64,
    referenced_msg: &str,
) -> Result<(), AppError> {
    ensure_exists(pool, schema, id).await?;

    let sql = format!(
        "DELETE FROM {table} WHERE {id} = $1",
        table = schema.table,
        id = schema.id_column,
    );
    match sqlx::query(&sql).bind(id).execute(pool).await {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(AppError::referenced_by_others(referenced_msg))
        }
        Err(e) => Err(e.into()),
    }
}

/// Optional text inputs arrive as either absent, empty, or a value; empty
/// strings are stored as NULL.
pub fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
