use std::path::PathBuf;

use crate::BenchError;

pub const USAGE: &str = "\
Usage: vmf-bench [OPTIONS]

Options:
  --iterations <n>       Timed passes per scene (default: 10)
  --baseline <path>      Compare against a saved JSON baseline
  --threshold <pct>      Allowed slowdown per phase, in percent (default: 10)
  --output <path>        Save this run as a JSON baseline
  --emit <path>          Write the largest scene as a .vmf file
  -h, --help             Print this message
";

/// Command-line options of the `vmf-bench` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchArgs {
    pub iterations: u32,
    pub baseline: Option<PathBuf>,
    pub threshold_pct: f64,
    pub output: Option<PathBuf>,
    pub emit: Option<PathBuf>,
    pub help: bool,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            iterations: 10,
            baseline: None,
            threshold_pct: 10.0,
            output: None,
            emit: None,
            help: false,
        }
    }
}

impl BenchArgs {
    /// Parse arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, BenchError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| BenchError::Usage(format!("{flag} needs a value")))
            };
            match flag.as_str() {
                "--iterations" => parsed.iterations = number(&flag, value()?)?,
                "--threshold" => parsed.threshold_pct = number(&flag, value()?)?,
                "--baseline" => parsed.baseline = Some(value()?.into()),
                "--output" => parsed.output = Some(value()?.into()),
                "--emit" => parsed.emit = Some(value()?.into()),
                "-h" | "--help" => parsed.help = true,
                _ => return Err(BenchError::Usage(format!("unknown argument '{flag}'"))),
            }
        }

        if parsed.iterations == 0 {
            return Err(BenchError::Usage("--iterations must be at least 1".into()));
        }
        Ok(parsed)
    }
}

fn number<T: std::str::FromStr>(flag: &str, raw: String) -> Result<T, BenchError> {
    raw.parse()
        .map_err(|_| BenchError::Usage(format!("{flag}: '{raw}' is not a number")))
}
