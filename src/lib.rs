pub mod config;
pub mod error;
pub mod export;
pub mod process;
pub mod schema;
pub mod sections;

pub use config::{ExportConfig, OutputCompression};
pub use error::ExportError;
pub use export::{ExportSummary, Exporter};
pub use sections::SectionKind;
