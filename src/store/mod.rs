//! Backend collaborator contract: the catalog engine consumes the
//! project table through a fetch-all / fetch-by-key / update-one-field
//! interface and never mutates records otherwise.

pub mod demo;
pub mod memory;
pub mod raw;
pub mod supabase;

pub use demo::demo_projects;
pub use memory::MemoryStore;
pub use supabase::SupabaseClient;

use crate::catalog::domain::Project;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend rejected the request: {message}")]
    Backend { message: String },
    #[error("backend transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("project {0} not found")]
    NotFound(String),
}

/// Storage abstraction so the routers and engines can be exercised in
/// isolation. Implementations own any concurrency control; last write
/// wins on the notes column.
pub trait ProjectStore: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Project>, StoreError>;
    fn fetch_by_ref(&self, ref_code: &str) -> Result<Option<Project>, StoreError>;
    fn update_notes(&self, ref_code: &str, notes: &str) -> Result<(), StoreError>;
}
