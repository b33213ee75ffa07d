use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::{errors::ServiceError, VetSpecialty};
use tracing::{error, info, warn};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/vet-specialties", tag = "vet-specialties",
    request_body = crate::openapi::VetSpecialtyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VetSpecialtyDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<VetSpecialty>,
) -> Result<(StatusCode, Json<VetSpecialty>), JsonApiError> {
    let created = state.vet_specialties.create(input).await.map_err(|e| {
        if matches!(e, ServiceError::Db(_)) {
            error!(err = %e, "create vet specialty failed");
        }
        JsonApiError::from(e)
    })?;
    info!(vet_id = created.vet_id, specialty_id = created.specialty_id, "created vet specialty");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/vet-specialties/{vetId}/{specialtyId}", tag = "vet-specialties",
    params(
        ("vetId" = i32, Path, description = "Vet ID"),
        ("specialtyId" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::VetSpecialtyDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_id(
    State(state): State<ServerState>,
    Path((vet_id, specialty_id)): Path<(i32, i32)>,
) -> Result<Json<VetSpecialty>, StatusCode> {
    match state.vet_specialties.find_by_id(vet_id, specialty_id).await {
        Ok(found) => Ok(Json(found)),
        Err(ServiceError::NotFound(_)) => {
            warn!(vet_id, specialty_id, "vet specialty not found");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!(vet_id, specialty_id, err = %e, "find vet specialty failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Every failure, not only a missing key, is answered with 404.
#[utoipa::path(
    put, path = "/vet-specialties", tag = "vet-specialties",
    request_body = crate::openapi::VetSpecialtyDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::VetSpecialtyDoc),
        (status = 404, description = "Not Found or Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<VetSpecialty>,
) -> Result<Json<VetSpecialty>, StatusCode> {
    let (vet_id, specialty_id) = input.key();
    match state.vet_specialties.update(input).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) => {
            error!(vet_id, specialty_id, err = %e, "error updating vet specialty");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[utoipa::path(
    delete, path = "/vet-specialties/{vetId}/{specialtyId}", tag = "vet-specialties",
    params(
        ("vetId" = i32, Path, description = "Vet ID"),
        ("specialtyId" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = String),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path((vet_id, specialty_id)): Path<(i32, i32)>,
) -> Result<String, StatusCode> {
    match state.vet_specialties.delete(vet_id, specialty_id).await {
        Ok(()) => {
            info!(vet_id, specialty_id, "deleted vet specialty");
            Ok(format!("Deleted vet-specialty: vetId={vet_id}, specialtyId={specialty_id}"))
        }
        Err(ServiceError::NotFound(_)) => {
            warn!(vet_id, specialty_id, "vet specialty not found for deletion");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!(vet_id, specialty_id, err = %e, "delete vet specialty failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get, path = "/vet-specialties/vet/{vetId}", tag = "vet-specialties",
    params(("vetId" = i32, Path, description = "Vet ID")),
    responses(
        (status = 200, description = "Specialties of the vet", body = [crate::openapi::VetSpecialtyDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn find_by_vet_id(
    State(state): State<ServerState>,
    Path(vet_id): Path<i32>,
) -> Result<Json<Vec<VetSpecialty>>, JsonApiError> {
    let list = state.vet_specialties.find_by_vet_id(vet_id).await?;
    info!(vet_id, count = list.len(), "list vet specialties by vet");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/vet-specialties/specialty/{specialtyId}", tag = "vet-specialties",
    params(("specialtyId" = i32, Path, description = "Specialty ID")),
    responses(
        (status = 200, description = "Vets holding the specialty", body = [crate::openapi::VetSpecialtyDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn find_by_specialty_id(
    State(state): State<ServerState>,
    Path(specialty_id): Path<i32>,
) -> Result<Json<Vec<VetSpecialty>>, JsonApiError> {
    let list = state.vet_specialties.find_by_specialty_id(specialty_id).await?;
    info!(specialty_id, count = list.len(), "list vet specialties by specialty");
    Ok(Json(list))
}
