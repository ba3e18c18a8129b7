// Primer shared data and configuration
//
// Static content (catalog, pipeline stages, icons), the category palette, the
// config loader and the error type shared by the client and the binary.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod icons;
pub mod palette;
pub mod stages;

pub use catalog::{catalog, Catalog, Category, CategoryId, Concept, ConceptId};
pub use config::{Config, StartView};
pub use errors::{PrimerError, PrimerResult};
pub use stages::PipelineStage;
