//! Student record operations: validation, uniqueness enforcement and CRUD.
//!
//! Every operation validates its input before touching the store, then
//! performs a single read/write. Uniqueness pre-checks only produce friendly
//! errors; the unique index on `(class, roll_no)` and the primary key are
//! the authoritative guards.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{errors::ServiceError, pagination::Pagination};
use models::student;

/// Create payload. Required fields stay `Option` so a missing key produces
/// the service's own 400 message instead of a framework rejection; `rollNo`
/// is kept as a raw JSON value so a mistyped string still reaches the
/// roll-number type check.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub roll_no: Option<Value>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
}

/// Sparse update payload. A field is written only when supplied and truthy
/// (non-empty string, non-zero roll number); `status` applies whenever
/// present so an explicit `false` goes through.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub roll_no: Option<i32>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
}

fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ServiceError::validation("Name must contain alphabets only."))
    }
}

/// Presence in the required-fields sense: null, `0`, `""` and `false` all
/// count as missing, matching the truthiness contract of the API.
fn roll_no_supplied(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn roll_no_number(value: &Value) -> Result<i32, ServiceError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ServiceError::validation("Roll Number must be a number."))
}

fn require_registration(registration_number: &str) -> Result<(), ServiceError> {
    if registration_number.is_empty() {
        return Err(ServiceError::validation("Registration number must be provided."));
    }
    Ok(())
}

/// Create a student after field validation and uniqueness checks.
/// `status` defaults to active when omitted.
pub async fn create_student(
    db: &DatabaseConnection,
    input: CreateStudent,
) -> Result<student::Model, ServiceError> {
    let registration_number = input.registration_number.as_deref().unwrap_or_default();
    let name = input.name.as_deref().unwrap_or_default();
    let class = input.class.as_deref().unwrap_or_default();
    let contact_number = input.contact_number.as_deref().unwrap_or_default();

    if registration_number.is_empty()
        || name.is_empty()
        || class.is_empty()
        || contact_number.is_empty()
        || !roll_no_supplied(input.roll_no.as_ref())
    {
        return Err(ServiceError::validation("Required fields are missing."));
    }

    validate_name(name)?;
    let roll_no = match input.roll_no.as_ref() {
        Some(v) => roll_no_number(v)?,
        None => return Err(ServiceError::validation("Required fields are missing.")),
    };

    if student::find_by_registration(db, registration_number).await?.is_some() {
        debug!(registration_number, "create rejected: registration number taken");
        return Err(ServiceError::conflict("Student with this registration number already exists."));
    }
    if student::class_roll_taken(db, class, roll_no, None).await? {
        debug!(class, roll_no, "create rejected: roll number taken for class");
        return Err(ServiceError::conflict("Roll Number already exists for the class."));
    }

    let created = student::create(
        db,
        registration_number,
        name,
        class,
        roll_no,
        contact_number,
        input.status.unwrap_or(true),
    )
    .await?;
    Ok(created)
}

/// List active students in creation order, paged by skip/take.
pub async fn list_active_students(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Vec<student::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let students = student::Entity::find()
        .filter(student::Column::Status.eq(true))
        .order_by_asc(student::Column::CreatedAt)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(students)
}

/// Fetch one active student by registration number. Soft-deleted records
/// are reported as missing.
pub async fn get_student(
    db: &DatabaseConnection,
    registration_number: &str,
) -> Result<student::Model, ServiceError> {
    require_registration(registration_number)?;
    match student::find_by_registration(db, registration_number).await? {
        Some(s) if s.status => Ok(s),
        _ => Err(ServiceError::not_found("Student not found or inactive.")),
    }
}

/// Apply a sparse patch to a student. The registration number is write-once;
/// a `(class, roll_no)` collision is checked against the merged view of the
/// supplied fields and the record's current values, excluding the record
/// itself.
pub async fn update_student(
    db: &DatabaseConnection,
    registration_number: &str,
    input: UpdateStudent,
) -> Result<student::Model, ServiceError> {
    require_registration(registration_number)?;

    if let Some(body_reg) = input.registration_number.as_deref() {
        if !body_reg.is_empty() && body_reg != registration_number {
            return Err(ServiceError::validation("Registration number cannot be updated."));
        }
    }

    let existing = student::find_by_registration(db, registration_number)
        .await?
        .ok_or_else(|| ServiceError::not_found("Student not found."))?;

    let new_name = input.name.as_deref().filter(|s| !s.is_empty());
    let new_class = input.class.as_deref().filter(|s| !s.is_empty());
    let new_roll = input.roll_no.filter(|r| *r != 0);
    let new_contact = input.contact_number.as_deref().filter(|s| !s.is_empty());

    if new_roll.is_some() || new_class.is_some() {
        let class = new_class.unwrap_or(existing.class.as_str());
        let roll_no = new_roll.unwrap_or(existing.roll_no);
        if student::class_roll_taken(db, class, roll_no, Some(registration_number)).await? {
            debug!(registration_number, class, roll_no, "update rejected: roll number taken for class");
            return Err(ServiceError::conflict("Roll Number already exists for the class."));
        }
    }

    let mut am: student::ActiveModel = existing.into();
    if let Some(v) = new_name {
        am.name = Set(v.to_string());
    }
    if let Some(v) = new_class {
        am.class = Set(v.to_string());
    }
    if let Some(v) = new_roll {
        am.roll_no = Set(v);
    }
    if let Some(v) = new_contact {
        am.contact_number = Set(v.to_string());
    }
    if let Some(v) = input.status {
        am.status = Set(v);
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Soft-delete: flip `status` to false. Already-inactive records report as
/// missing so a second delete is a 404.
pub async fn soft_delete_student(
    db: &DatabaseConnection,
    registration_number: &str,
) -> Result<student::Model, ServiceError> {
    require_registration(registration_number)?;

    let existing = match student::find_by_registration(db, registration_number).await? {
        Some(s) if s.status => s,
        _ => return Err(ServiceError::not_found("Student not found or already inactive.")),
    };

    let mut am: student::ActiveModel = existing.into();
    am.status = Set(false);
    am.updated_at = Set(Utc::now().into());
    let deleted = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(deleted)
}
