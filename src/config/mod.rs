pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::{Source, SourceKind, StatusPolicy, PLACES_URL, PRICES_URL};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fuel-feed")]
#[command(about = "Download the published fuel price and station XML feeds")]
pub struct CliConfig {
    #[arg(long, default_value = PRICES_URL)]
    pub prices_url: String,

    #[arg(long, default_value = PLACES_URL)]
    pub places_url: String,

    /// Directory that receives precios.xml and estaciones.xml
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Download only one of the feeds
    #[arg(long, value_enum)]
    pub only: Option<SourceKind>,

    /// Fail on non-2xx responses instead of saving the body
    #[arg(long)]
    pub strict_status: bool,

    /// Whole-request timeout; no timeout when unset
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn url_for(&self, kind: SourceKind) -> (&'static str, &str) {
        match kind {
            SourceKind::Prices => ("prices_url", &self.prices_url),
            SourceKind::Places => ("places_url", &self.places_url),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn sources(&self) -> Result<Vec<Source>> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| self.only.is_none() || self.only == Some(*kind))
            .map(|kind| {
                let (field, raw) = self.url_for(kind);
                validation::feed_url(field, raw).map(|url| Source::new(kind, url))
            })
            .collect()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn status_policy(&self) -> StatusPolicy {
        if self.strict_status {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Lenient
        }
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for kind in SourceKind::ALL {
            let (field, raw) = self.url_for(kind);
            validation::feed_url(field, raw)?;
        }
        validation::output_dir("output_path", &self.output_path)?;
        if let Some(seconds) = self.timeout_seconds {
            validation::timeout("timeout_seconds", seconds)?;
        }
        Ok(())
    }
}
