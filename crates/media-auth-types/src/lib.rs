//! Identity types shared across media API services.
//!
//! Token verification happens in the gateway; services only read the
//! identity headers it injects.

pub mod identity;
