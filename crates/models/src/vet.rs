use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vet_specialty;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { VetSpecialty }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::VetSpecialty => Entity::has_many(vet_specialty::Entity).into(),
        }
    }
}

impl Related<vet_specialty::Entity> for Entity {
    fn to() -> RelationDef { Relation::VetSpecialty.def() }
}

impl ActiveModelBehavior for ActiveModel {}
