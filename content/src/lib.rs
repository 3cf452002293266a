//! Compiled-in site content and the lookups built on it.
//!
//! Every record lives in a `const` slice under [`data`]; nothing is created,
//! updated or deleted at runtime.

pub mod catalog;
pub mod data;
pub mod filter;
pub mod model;
pub mod sitemap;
