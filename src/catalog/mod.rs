//! Portfolio catalog: the project record model, the filter engine that
//! narrows the visible set, the derived filter options, and the sheet
//! export built from whatever is currently visible.

pub mod api;
pub mod domain;
pub mod export;
pub mod filter;
pub mod options;

pub use api::{catalog_router, CatalogState};
pub use domain::{Coordinates, Project, ProjectStatus, SortKey};
pub use export::{portfolio_sheet, PortfolioSheet, SheetRow};
pub use filter::{compute_visible, DimensionFilter, FilterSpec};
pub use options::{compute_options, FilterOptions};
