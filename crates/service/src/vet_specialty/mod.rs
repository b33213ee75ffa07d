//! Vet-specialty module: domain, repository and service layers.
//!
//! Handlers depend on [`VetSpecialtyService`]; persistence sits behind [`repository::VetSpecialtyRepository`].

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::VetSpecialty;
pub use service::{DynVetSpecialtyService, VetSpecialtyService};
