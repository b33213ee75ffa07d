pub mod errors;
pub mod db;
pub mod vet;
pub mod specialty;
pub mod vet_specialty;

#[cfg(test)]
mod tests;
