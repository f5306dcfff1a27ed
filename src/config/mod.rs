use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lunch-menu")]
#[command(about = "Weekly lunch menu recommendations for a coaching crew")]
pub struct CliConfig {
    #[arg(long, help = "Seed for a reproducible recommendation run")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
