use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command line options
///
/// Only the flags that were actually given are merged over the config file.
#[derive(Parser, Debug, Default, Serialize, Deserialize)]
#[command(name = "ics2csv", author, version, about)]
pub struct Opt {
    /// The iCalendar file to read
    #[clap(required_unless_present = "create_default_config")]
    #[serde(skip)]
    pub file: Option<PathBuf>,

    /// The output file (defaults to FILE with the configured suffix appended, e.g. FILE.csv)
    #[clap(short, long)]
    #[serde(skip)]
    pub output: Option<PathBuf>,

    /// The config file to read, it is fine if it does not exist
    #[clap(short, long, default_value_t = String::from("ics2csv.toml"))]
    #[serde(skip)]
    pub config: String,

    /// Create the example config file at the --config path
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub create_default_config: bool,

    /// Do not check if the output file exists
    #[clap(long, default_value_t = false)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub overwrite: bool,

    /// Do not warn about possible duplicates
    #[clap(long, default_value_t = false)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_warn_duplicates: bool,

    /// Skip events without a start date instead of stopping
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub skip_undated: bool,
}
