use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use serde::{Deserialize, Serialize};

use crate::{errors, specialty, vet};

/// Association between a vet and one of their specialties.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vet_specialties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specialty_id: i32,
    pub certification_date: Option<Date>,
    pub years_experience: i32,
    pub is_primary: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Vet, Specialty }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vet => Entity::belongs_to(vet::Entity)
                .from(Column::VetId)
                .to(vet::Column::Id)
                .into(),
            Relation::Specialty => Entity::belongs_to(specialty::Entity)
                .from(Column::SpecialtyId)
                .to(specialty::Column::Id)
                .into(),
        }
    }
}

impl Related<vet::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vet.def() }
}

impl Related<specialty::Entity> for Entity {
    fn to() -> RelationDef { Relation::Specialty.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_key(vet_id: i32, specialty_id: i32) -> Result<(), errors::ModelError> {
    if vet_id <= 0 {
        return Err(errors::ModelError::Validation("vetId must be positive".into()));
    }
    if specialty_id <= 0 {
        return Err(errors::ModelError::Validation("specialtyId must be positive".into()));
    }
    Ok(())
}

pub fn validate_years_experience(years: i32) -> Result<(), errors::ModelError> {
    if years < 0 {
        return Err(errors::ModelError::Validation("yearsExperience must not be negative".into()));
    }
    Ok(())
}

pub fn validate(m: &Model) -> Result<(), errors::ModelError> {
    validate_key(m.vet_id, m.specialty_id)?;
    validate_years_experience(m.years_experience)
}

pub async fn find(db: &DatabaseConnection, vet_id: i32, specialty_id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id((vet_id, specialty_id)).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, m: Model) -> Result<Model, errors::ModelError> {
    validate(&m)?;
    let am = ActiveModel {
        vet_id: Set(m.vet_id),
        specialty_id: Set(m.specialty_id),
        certification_date: Set(m.certification_date),
        years_experience: Set(m.years_experience),
        is_primary: Set(m.is_primary),
        notes: Set(m.notes),
    };
    am.insert(db).await.map_err(insert_error)
}

/// Constraint violations are caller errors, not storage failures.
fn insert_error(e: DbErr) -> errors::ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            errors::ModelError::Conflict(format!("vet specialty already exists: {msg}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            errors::ModelError::Validation(format!("unknown vet or specialty: {msg}"))
        }
        _ => e.into(),
    }
}

/// Overwrite every attribute of the row keyed by `m`'s composite key.
/// Returns `None` when no such row exists.
pub async fn replace(db: &DatabaseConnection, m: Model) -> Result<Option<Model>, errors::ModelError> {
    validate(&m)?;
    let Some(existing) = find(db, m.vet_id, m.specialty_id).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.certification_date = Set(m.certification_date);
    am.years_experience = Set(m.years_experience);
    am.is_primary = Set(m.is_primary);
    am.notes = Set(m.notes);
    Ok(Some(am.update(db).await?))
}

/// Delete by composite key; returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, vet_id: i32, specialty_id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id((vet_id, specialty_id)).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn list_by_vet(db: &DatabaseConnection, vet_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::VetId.eq(vet_id))
        .order_by_asc(Column::SpecialtyId)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_by_specialty(db: &DatabaseConnection, specialty_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::SpecialtyId.eq(specialty_id))
        .order_by_asc(Column::VetId)
        .all(db)
        .await?;
    Ok(rows)
}
