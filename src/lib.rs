//! Core engines behind the development-portfolio service: the catalog
//! filter/sort engine, the industrialization decision engine, and the
//! backend store contract they consume.

pub mod catalog;
pub mod config;
pub mod decision;
pub mod error;
pub mod store;
pub mod telemetry;
