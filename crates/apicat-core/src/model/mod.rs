pub mod builder;
pub mod catalog;
pub mod interface;

pub use builder::{IdAllocator, InterfaceDraft};
pub use catalog::{Catalog, CatalogMeta, SourceKind};
pub use interface::*;
