//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! take an explicit connection so the layer stays testable in isolation. The
//! scheduling invariants (interval validity, slot containment, overlap rejection)
//! are enforced here, before any write is issued.

pub mod availability;
pub mod campaign_member;
pub mod session;
pub mod slot;
pub mod user;

#[cfg(test)]
mod test;
