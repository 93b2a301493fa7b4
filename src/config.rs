use anyhow::Result;
use clap::Parser;

/// Configuration for a trend fit run
#[derive(Debug, Clone, Parser)]
#[command(name = "trendfit", version)]
#[command(about = "Least-squares trend line and Pearson correlation of a one-column data file")]
pub struct Config {
    /// Path to the data file (one number per line)
    #[arg(value_name = "DATA_FILE", allow_hyphen_values = true)]
    pub data_file: String,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            anyhow::bail!("data_file must not be empty");
        }
        Ok(())
    }
}
