use std::path::PathBuf;

use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--verbose" => flags.verbose = flags.verbose.saturating_add(1),
            "--log-file" => {
                let value = value_after(args, &mut i)?;
                flags.log_file = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = value_after(args, &mut i)?;
                flags.seed = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_after<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) if !v.starts_with('-') => Ok(v.as_str()),
        _ => Err(ParseError::MissingValue(flag.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pwform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])), Ok(CliFlags::default()));
    }

    #[test]
    fn seed_and_log_file() {
        let flags = parse(&args(&["--seed", "42", "--log-file", "/tmp/pw.log"])).unwrap();
        assert_eq!(flags.seed, Some(42));
        assert_eq!(flags.log_file, Some(PathBuf::from("/tmp/pw.log")));
    }

    #[test]
    fn verbose_counts() {
        let flags = parse(&args(&["--verbose", "--verbose"])).unwrap();
        assert_eq!(flags.verbose, 2);
    }

    #[test]
    fn bad_seed() {
        assert_eq!(
            parse(&args(&["--seed", "abc"])),
            Err(ParseError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&args(&["--log-file"])),
            Err(ParseError::MissingValue("--log-file".into()))
        );
        assert_eq!(
            parse(&args(&["--seed", "--verbose"])),
            Err(ParseError::MissingValue("--seed".into()))
        );
    }

    #[test]
    fn unknown_flag() {
        assert_eq!(
            parse(&args(&["--length", "12"])),
            Err(ParseError::UnknownArg("--length".into()))
        );
    }
}
