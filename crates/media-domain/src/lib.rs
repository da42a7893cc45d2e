//! Domain types shared across the media API crates.
//!
//! Pure types with no framework dependencies. Import in `usecase/` and
//! `domain/` layers; `infra/` and `handlers/` go through the service's own types.

pub mod pagination;
pub mod user;
