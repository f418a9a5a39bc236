use chrono::Utc;
use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Student record. `registration_number` is the natural primary key and is
/// never updated; `status = false` marks a soft-deleted row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub registration_number: String,
    pub name: String,
    pub class: String,
    pub roll_no: i32,
    pub contact_number: String,
    pub status: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    registration_number: &str,
    name: &str,
    class: &str,
    roll_no: i32,
    contact_number: &str,
    status: bool,
) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        registration_number: Set(registration_number.to_string()),
        name: Set(name.to_string()),
        class: Set(class.to_string()),
        roll_no: Set(roll_no),
        contact_number: Set(contact_number.to_string()),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_registration(
    db: &DatabaseConnection,
    registration_number: &str,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(registration_number.to_string())
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Whether any record, regardless of status, already holds `roll_no` within
/// `class`. `exclude` skips the record being updated.
pub async fn class_roll_taken(
    db: &DatabaseConnection,
    class: &str,
    roll_no: i32,
    exclude: Option<&str>,
) -> Result<bool, errors::ModelError> {
    let mut query = Entity::find()
        .filter(Column::Class.eq(class))
        .filter(Column::RollNo.eq(roll_no));
    if let Some(reg) = exclude {
        query = query.filter(Column::RegistrationNumber.ne(reg));
    }
    let found = query.one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}
