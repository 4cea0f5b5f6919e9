use chrono::Duration;
use color_eyre::eyre::{bail, Result};
use doku::Document;
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{options::Opt, types::MissingDatePolicy};

const DEFAULT_OUTPUT_SUFFIX: &str = ".csv";
/// Madrid winter time
const DEFAULT_UTC_OFFSET_HOURS: i64 = 1;

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, Document)]
pub struct Config {
    /// Replace an existing output file without asking
    #[doku(example = "false")]
    pub overwrite: bool,

    /// Do not warn about events with the same title and location
    #[doku(example = "false")]
    pub no_warn_duplicates: bool,

    /// What to do with an event without a start date ("abort" or "skip")
    ///
    /// "abort" stops the conversion and writes nothing.
    #[doku(example = "abort")]
    pub missing_date: MissingDatePolicy,

    /// Hours added to UTC start times (DTSTART:...Z) before they are written
    ///
    /// This is a fixed offset, daylight saving time is not taken into account.
    #[doku(example = "1")]
    pub utc_offset_hours: i64,

    /// Appended to the input file name when no output file is given
    #[doku(example = ".csv")]
    pub output_suffix: String,
}

/// Sane default values for the config struct.
impl Default for Config {
    fn default() -> Self {
        Self {
            overwrite: false,
            no_warn_duplicates: false,
            missing_date: MissingDatePolicy::Abort,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.into(),
        }
    }
}

impl Config {
    /// Merge the defaults, the config file named in `args` (if it exists) and the given flags.
    pub fn new(args: &Opt) -> Result<Config> {
        debug!("reading configuration from {}...", args.config);
        let mut config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&args.config))
            .admerge(Serialized::defaults(args))
            .extract()?;

        if args.skip_undated {
            config.missing_date = MissingDatePolicy::Skip;
        }
        config.validate()?;

        debug!("config is: {:?}", config);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            bail!(
                "utc_offset_hours must be between -23 and 23, got {}",
                self.utc_offset_hours
            );
        }
        Ok(())
    }

    pub fn utc_offset(&self) -> Duration {
        Duration::hours(self.utc_offset_hours)
    }

    pub fn warn_duplicates(&self) -> bool {
        !self.no_warn_duplicates
    }

    /// An example config file with every option documented
    pub fn example_toml() -> String {
        doku::to_toml::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn opt(config: &str) -> Opt {
        Opt {
            config: config.to_owned(),
            ..Opt::default()
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let config = Config::new(&opt("does/not/exist.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.utc_offset(), Duration::hours(1));
        assert!(config.warn_duplicates());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Opt {
            overwrite: true,
            no_warn_duplicates: true,
            skip_undated: true,
            ..opt("does/not/exist.toml")
        };

        let config = Config::new(&args).unwrap();

        assert!(config.overwrite);
        assert!(!config.warn_duplicates());
        assert_eq!(config.missing_date, MissingDatePolicy::Skip);
    }

    #[test]
    fn config_file_values_are_used() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "ics2csv.toml",
                r#"
                    no_warn_duplicates = true
                    missing_date = "skip"
                    utc_offset_hours = 2
                "#,
            )?;

            let config = Config::new(&opt("ics2csv.toml")).map_err(|e| e.to_string())?;

            assert!(!config.warn_duplicates());
            assert!(!config.overwrite);
            assert_eq!(config.missing_date, MissingDatePolicy::Skip);
            assert_eq!(config.utc_offset(), Duration::hours(2));
            Ok(())
        });
    }

    #[test]
    fn unset_flags_do_not_override_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("ics2csv.toml", "overwrite = true")?;

            let config = Config::new(&opt("ics2csv.toml")).map_err(|e| e.to_string())?;

            assert!(config.overwrite);
            Ok(())
        });
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("ics2csv.toml", "utc_offset_hours = 30")?;

            assert!(Config::new(&opt("ics2csv.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn example_config_mentions_every_option() {
        let example = Config::example_toml();

        for key in [
            "overwrite",
            "no_warn_duplicates",
            "missing_date",
            "utc_offset_hours",
            "output_suffix",
        ] {
            assert!(example.contains(key), "missing {key} in:\n{example}");
        }
    }
}
