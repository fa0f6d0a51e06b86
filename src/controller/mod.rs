//! HTTP request handlers: access control, DTO conversion, repository calls.

pub mod availability;
pub mod slot;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    100
}
