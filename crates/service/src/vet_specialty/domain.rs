use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vet-specialty association as exchanged with clients.
///
/// Serialized with camelCase field names (`vetId`, `specialtyId`, `certificationDate`,
/// `yearsExperience`, `isPrimary`, `notes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetSpecialty {
    pub vet_id: i32,
    pub specialty_id: i32,
    #[serde(default)]
    pub certification_date: Option<NaiveDate>,
    pub years_experience: i32,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VetSpecialty {
    /// Composite identity `(vet_id, specialty_id)`.
    pub fn key(&self) -> (i32, i32) { (self.vet_id, self.specialty_id) }
}

impl From<models::vet_specialty::Model> for VetSpecialty {
    fn from(m: models::vet_specialty::Model) -> Self {
        Self {
            vet_id: m.vet_id,
            specialty_id: m.specialty_id,
            certification_date: m.certification_date,
            years_experience: m.years_experience,
            is_primary: m.is_primary,
            notes: m.notes,
        }
    }
}

impl From<VetSpecialty> for models::vet_specialty::Model {
    fn from(v: VetSpecialty) -> Self {
        Self {
            vet_id: v.vet_id,
            specialty_id: v.specialty_id,
            certification_date: v.certification_date,
            years_experience: v.years_experience,
            is_primary: v.is_primary,
            notes: v.notes,
        }
    }
}
