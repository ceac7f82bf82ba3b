//! Partial-update engine.
//!
//! Every entity's `update` operation follows the same protocol: existence
//! check, independent uniqueness pre-checks, hashing of secret fields, then a
//! single `UPDATE` built from exactly the fields present in the payload. The
//! payload stays a raw JSON map because the distinction between an *omitted*
//! key (leave the column untouched) and a key sent as empty/null (clear a
//! nullable column) is part of the API contract and a typed DTO would erase
//! it.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use crate::utils::schema::{EntitySchema, FieldKind, FieldSpec, ensure_exists, ensure_unique};

/// A typed column assignment decoded from the sparse JSON payload.
#[derive(Debug, Clone)]
pub enum BoundValue {
    Null,
    Text(String),
    Date(NaiveDate),
    Bool(bool),
}

/// The mutation set: columns actually being written, in schema order.
#[derive(Debug)]
pub struct UpdateSet {
    columns: Vec<(FieldSpec, BoundValue)>,
}

impl UpdateSet {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(spec, _)| spec.column).collect()
    }

    /// Text value bound for `column`, if any. Mostly useful in tests.
    pub fn text_value(&self, column: &str) -> Option<&str> {
        self.columns.iter().find_map(|(spec, value)| {
            if spec.column == column {
                match value {
                    BoundValue::Text(s) => Some(s.as_str()),
                    _ => None,
                }
            } else {
                None
            }
        })
    }
}

fn is_cleared(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Decode one payload value against its field spec. `Ok(None)` means the
/// field contributes nothing to the mutation set (empty value on a
/// non-nullable field, mirroring the original falsy-skip behavior).
fn decode_value(spec: &FieldSpec, value: &Value) -> Result<Option<BoundValue>, AppError> {
    if is_cleared(value) {
        if spec.nullable {
            return Ok(Some(BoundValue::Null));
        }
        return Ok(None);
    }

    let bound = match spec.kind {
        FieldKind::Text => match value {
            Value::String(s) => BoundValue::Text(s.clone()),
            _ => {
                return Err(AppError::validation(format!(
                    "{} must be a string.",
                    spec.label
                )));
            }
        },
        FieldKind::Date => {
            let raw = value.as_str().ok_or_else(|| {
                AppError::validation(format!("{} must be a valid date (YYYY-MM-DD).", spec.label))
            })?;
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::validation(format!("{} must be a valid date (YYYY-MM-DD).", spec.label))
            })?;
            BoundValue::Date(date)
        }
        FieldKind::Bool => match value {
            Value::Bool(b) => BoundValue::Bool(*b),
            // MySQL-era clients send 0/1 for flags.
            Value::Number(n) if n.as_i64() == Some(0) => BoundValue::Bool(false),
            Value::Number(n) if n.as_i64() == Some(1) => BoundValue::Bool(true),
            _ => {
                return Err(AppError::validation(format!(
                    "{} must be a boolean.",
                    spec.label
                )));
            }
        },
    };

    Ok(Some(bound))
}

/// Build the mutation set from the fields present in the payload. Unknown
/// keys are ignored; secret fields are hashed here so plaintext never reaches
/// the query. Fails with `NoFieldsProvided` when nothing usable remains.
pub fn build_update_set(
    schema: &EntitySchema,
    payload: &Map<String, Value>,
) -> Result<UpdateSet, AppError> {
    let mut columns = Vec::new();

    for spec in schema.fields {
        let Some(raw) = payload.get(spec.name) else {
            continue;
        };
        let Some(mut bound) = decode_value(spec, raw)? else {
            continue;
        };

        if spec.secret {
            if let BoundValue::Text(plain) = &bound {
                bound = BoundValue::Text(hash_password(plain)?);
            }
        }

        columns.push((*spec, bound));
    }

    if columns.is_empty() {
        return Err(AppError::NoFieldsProvided);
    }

    Ok(UpdateSet { columns })
}

/// Render `UPDATE <table> SET col = $1, ... WHERE <id_column> = $n`.
pub fn build_update_query(
    schema: &EntitySchema,
    set: UpdateSet,
    id: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!("UPDATE {} SET ", schema.table));

    let mut separated = qb.separated(", ");
    for (spec, value) in set.columns {
        separated.push(spec.column);
        separated.push_unseparated(" = ");
        match value {
            BoundValue::Null => {
                separated.push_unseparated("NULL");
            }
            BoundValue::Text(v) => {
                separated.push_bind_unseparated(v);
            }
            BoundValue::Date(v) => {
                separated.push_bind_unseparated(v);
            }
            BoundValue::Bool(v) => {
                separated.push_bind_unseparated(v);
            }
        }
    }

    qb.push(format!(" WHERE {} = ", schema.id_column));
    qb.push_bind(id);
    qb
}

/// The full gate-and-mutate protocol for one entity row.
///
/// All uniqueness pre-checks run before any write, so a conflict never leaves
/// partial state. The check-then-write window is not transactional (matching
/// the original system); the table's UNIQUE constraints remain the backstop
/// and a constraint violation during the final write still maps to a
/// conflict.
pub async fn apply_partial_update(
    pool: &PgPool,
    schema: &EntitySchema,
    id: i64,
    payload: &Map<String, Value>,
) -> Result<(), AppError> {
    ensure_exists(pool, schema, id).await?;

    for spec in schema.fields.iter().filter(|f| f.unique) {
        if let Some(value) = payload.get(spec.name).and_then(Value::as_str) {
            if !value.is_empty() {
                ensure_unique(pool, schema, spec, value, Some(id)).await?;
            }
        }
    }

    let set = build_update_set(schema, payload)?;
    let mut query = build_update_query(schema, set, id);

    match query.build().execute(pool).await {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            AppError::conflict("A provided value is already in use by another record."),
        ),
        Err(sqlx::Error::Database(db_err)) if db_err.is_check_violation() => Err(
            AppError::validation("A provided value is not allowed for its field."),
        ),
        Err(e) => Err(e.into()),
    }
}
