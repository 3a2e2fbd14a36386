pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::DownloadEngine, pipeline::FetchPipeline};
pub use domain::model::{FetchReport, Source, SourceKind, StatusPolicy};
pub use utils::error::{FetchError, Result};
