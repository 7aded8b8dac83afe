//! Domain types shared across Testify services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `dto/`, `usecase/` and `domain/` layers; never depend on axum or sea-orm here.

pub mod validation;
