pub mod definition_report;
pub mod preview;

pub use definition_report::{DefinitionReport, EndpointSummary, ItemReport, MappingTotals};
pub use preview::{FilterPreview, JoinPreview, LookupPreview, MappingPreview};
