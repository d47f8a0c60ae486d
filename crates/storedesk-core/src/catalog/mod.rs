//! Products and services listed by a seller.
//!
//! Only the fields the dashboard needs are modelled: identity, name and the
//! view counter maintained by the backend.

mod model;

pub use model::{CatalogItem, CatalogKind};
