//! Link validation between the catalog and the content store

mod resolve;
mod store;
mod validator;

pub use resolve::{normalize, resolve_link, LinkRules};
pub use store::{ContentStore, DiskStore, MemoryStore};
pub use validator::{validate, BrokenLink, ValidationReport};
