//! Domain models, operation parameter types, and API DTOs.

pub mod api;
pub mod availability;
pub mod interval;
pub mod slot;
