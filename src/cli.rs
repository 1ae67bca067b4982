//! Command-line arguments for the `u-georoute` binary.

use std::path::PathBuf;

use crate::optimizer::Method;
use crate::{Error, Result};

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub method: Method,
    pub config: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl CliArgs {
    /// Parses arguments (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested. Values may be given as
    /// `--flag value` or `--flag=value`.
    pub fn parse<I, S>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = None;
        let mut output = None;
        let mut method = Method::Auto;
        let mut config = None;
        let mut quiet = false;
        let mut verbose = false;

        let mut args = args.into_iter().map(|arg| arg.as_ref().to_owned());
        while let Some(arg) = args.next() {
            let split = arg
                .split_once('=')
                .filter(|(f, _)| f.starts_with("--"))
                .map(|(f, v)| (f.to_owned(), v.to_owned()));
            let (flag, inline) = match split {
                Some((f, v)) => (f, Some(v)),
                None => (arg, None),
            };

            match flag.as_str() {
                "-h" | "--help" => return Ok(None),
                "-q" | "--quiet" => quiet = true,
                "-v" | "--verbose" => verbose = true,
                "-i" | "--input" => {
                    input = Some(PathBuf::from(value(&flag, inline, &mut args)?));
                }
                "-o" | "--output" => {
                    output = Some(PathBuf::from(value(&flag, inline, &mut args)?));
                }
                "-c" | "--config" => {
                    config = Some(PathBuf::from(value(&flag, inline, &mut args)?));
                }
                "-m" | "--method" => method = value(&flag, inline, &mut args)?.parse()?,
                other => {
                    return Err(Error::invalid_input(format!(
                        "unexpected argument '{other}'\n\n{}",
                        Self::usage()
                    )))
                }
            }
        }

        let input = input.ok_or_else(|| {
            Error::invalid_input(format!("--input is required\n\n{}", Self::usage()))
        })?;

        Ok(Some(Self {
            input,
            output,
            method,
            config,
            quiet,
            verbose,
        }))
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage: u-georoute -i <file> [options]\n",
            "\n",
            "Options:\n",
            "  -i, --input <path>    Coordinate file, one `lat,lon` or `lat lon` per line\n",
            "  -o, --output <path>   Write the optimized route to this file\n",
            "  -m, --method <name>   auto | exact | nearest_neighbor | two_opt (default: auto)\n",
            "  -c, --config <path>   JSON optimizer config\n",
            "  -q, --quiet           Print only the total distance\n",
            "  -v, --verbose         Debug logging\n",
            "  -h, --help            Show this help\n",
        )
    }
}

fn value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| Error::invalid_input(format!("{flag} requires a value")))
}
