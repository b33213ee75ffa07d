use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn already_exists(entity: &str) -> Self { Self::Conflict(format!("{} already exists", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Conflict(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_kind() {
        let v: ServiceError = ModelError::Validation("bad".into()).into();
        assert!(matches!(v, ServiceError::Validation(m) if m == "bad"));
        let d: ServiceError = ModelError::Db("down".into()).into();
        assert!(matches!(d, ServiceError::Db(m) if m == "down"));
        let c: ServiceError = ModelError::Conflict("taken".into()).into();
        assert!(matches!(c, ServiceError::Conflict(m) if m == "taken"));
    }

    #[test]
    fn helper_messages() {
        assert_eq!(ServiceError::not_found("vet_specialty").to_string(), "not found: vet_specialty not found");
        assert_eq!(ServiceError::already_exists("vet_specialty").to_string(), "conflict: vet_specialty already exists");
    }
}
