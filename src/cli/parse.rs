use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--legacy" => flags.legacy = true,
            "-a" | "--all" => flags.all = true,
            "--lower" => flags.lower = Some(true),
            "--no-lower" => flags.lower = Some(false),
            "-U" | "--upper" => flags.upper = true,
            "-D" | "--digits" => flags.digits = true,
            "-S" | "--symbols" => flags.symbols = true,
            "-l" | "--length" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.length = Some(value.clone());
            }
            "-n" | "--number" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.number = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.clone()))?,
                );
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
