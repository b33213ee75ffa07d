use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a vet-specialty association.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetSpecialtyDoc {
    pub vet_id: i32,
    pub specialty_id: i32,
    /// ISO-8601 calendar date
    #[schema(example = "2023-05-15")]
    pub certification_date: Option<String>,
    pub years_experience: i32,
    pub is_primary: bool,
    pub notes: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::vet_specialties::create,
        crate::routes::vet_specialties::find_by_id,
        crate::routes::vet_specialties::update,
        crate::routes::vet_specialties::delete,
        crate::routes::vet_specialties::find_by_vet_id,
        crate::routes::vet_specialties::find_by_specialty_id,
    ),
    components(
        schemas(
            HealthResponse,
            VetSpecialtyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "vet-specialties")
    )
)]
pub struct ApiDoc;
