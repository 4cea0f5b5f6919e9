use clap::Parser;
use color_eyre::eyre::{self, bail, eyre, WrapErr};
use flexi_logger::Logger;
use std::fs;

use ics2csv::configuration::{config::Config, options::Opt};
use ics2csv::util::{confirm_overwrite, output_path, write_csv_file};
use ics2csv::Conversion;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Opt::parse();
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    if args.create_default_config {
        if fs::metadata(&args.config).is_ok() {
            bail!("config file {} already exists", args.config);
        }
        fs::write(&args.config, Config::example_toml())
            .wrap_err(format!("could not write config file {}", args.config))?;
        println!("The example config is in file {}", args.config);
        return Ok(());
    }

    let config = Config::new(&args)?;
    let file = args.file.as_deref().ok_or(eyre!("no calendar file given"))?;

    let input = fs::read_to_string(file)
        .wrap_err(format!("could not read calendar file {:?}", file))?;
    let conversion = Conversion::with_reporter(&input, &config, |d| eprintln!("{}", d))?;

    let outfname = output_path(file, args.output.as_deref(), &config.output_suffix);
    if !config.overwrite && outfname.exists() && !confirm_overwrite(&outfname)? {
        bail!("Cancelling.");
    }

    write_csv_file(&outfname, conversion.events())?;
    println!("The output is in file {}", outfname.display());

    Ok(())
}
