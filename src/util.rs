use color_eyre::eyre::{self, WrapErr};
use dialoguer::Input;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};

use crate::model::EventRecord;
use crate::output::write_csv;

/// The explicit output path, or the input path with `suffix` appended.
pub fn output_path(input: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    match output {
        Some(output) => output.to_path_buf(),
        None => {
            let mut name = OsString::from(input.as_os_str());
            name.push(suffix);
            PathBuf::from(name)
        }
    }
}

/// Ask whether `path` may be overwritten.
///
/// Any answer that does not start with `y` or `Y` is a no. When stdin is not a terminal the
/// answer is the first line read from it.
pub fn confirm_overwrite(path: &Path) -> eyre::Result<bool> {
    let prompt = format!("File {} already exists. Overwrite? [y/n]", path.display());

    if !io::stdin().is_terminal() {
        eprint!("{} ", prompt);
        return read_answer(io::stdin().lock()).wrap_err("could not read the answer");
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err("could not read the answer")?;

    Ok(is_yes(&answer))
}

/// Read one line from `reader` and check whether it is a yes.
pub fn read_answer<R: BufRead>(mut reader: R) -> io::Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// Create (or truncate) `path` and write the events to it as CSV.
pub fn write_csv_file(path: &Path, events: &[EventRecord]) -> eyre::Result<()> {
    let file = File::create(path).wrap_err(format!("could not create output file: {:?}", path))?;
    write_csv(BufWriter::new(file), events)
        .wrap_err(format!("could not write output file: {:?}", path))
}
