//! Command-line arguments for `feels-like`.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: feels-like [OPTIONS]

Options:
  --config <path>        Settings file (JSON). Defaults to $FEELS_LIKE_CONFIG.
  --temperature <C>      Initial temperature in degrees Celsius.
  --humidity <percent>   Initial relative humidity in percent.
  --headless             Read JSON commands on stdin, answer on stdout.
  --help                 Print this message.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub headless: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name). Accepts both
    /// `--flag value` and `--flag=value`.
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg, None),
            };

            match flag.as_str() {
                "--headless" => parsed.headless = true,
                "--help" | "-h" => parsed.help = true,
                "--config" => {
                    let value = take_value(&flag, inline, &mut args)?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--temperature" => {
                    let value = take_value(&flag, inline, &mut args)?;
                    parsed.temperature = Some(parse_number(&flag, &value)?);
                }
                "--humidity" => {
                    let value = take_value(&flag, inline, &mut args)?;
                    parsed.humidity = Some(parse_number(&flag, &value)?);
                }
                other => return Err(format!("unknown argument '{other}'")),
            }
        }

        Ok(parsed)
    }
}

fn take_value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, String> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| format!("{flag} needs a value"))
}

/// Parse a finite number for `flag`.
pub fn parse_number(flag: &str, value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("{flag} must be a finite number, got '{value}'")),
        Err(_) => Err(format!("{flag} expects a number, got '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_is_default() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags_separate_values() {
        let args = parse(&[
            "--config",
            "settings.json",
            "--temperature",
            "31.5",
            "--humidity",
            "65",
            "--headless",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("settings.json")));
        assert_eq!(args.temperature, Some(31.5));
        assert_eq!(args.humidity, Some(65.0));
        assert!(args.headless);
        assert!(!args.help);
    }

    #[test]
    fn test_inline_values() {
        let args = parse(&["--temperature=-5", "--config=a=b.json"]).unwrap();
        assert_eq!(args.temperature, Some(-5.0));
        assert_eq!(args.config, Some(PathBuf::from("a=b.json")));
    }

    #[test]
    fn test_help() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--temperature"]).unwrap_err().contains("needs a value"));
        assert!(parse(&["--humidity", "wet"])
            .unwrap_err()
            .contains("expects a number"));
        assert!(parse(&["--humidity", "NaN"]).unwrap_err().contains("finite"));
        assert!(parse(&["--verbose"]).unwrap_err().contains("unknown argument"));
    }
}
