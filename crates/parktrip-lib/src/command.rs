use std::fmt;

use crate::error::CommandError;
use crate::park::ParkId;

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list parks`: every park, sorted by id.
    ListParks,
    /// `list names`: every park, sorted by name then id.
    ListNames,
    /// `list county <name>`: parks in the county, current order.
    ListCounty(String),
    /// `add <id>`
    Add(ParkId),
    /// `remove <id>`
    Remove(ParkId),
    /// `trip`
    Trip,
    /// `nearest <k>`
    Nearest(usize),
    /// `quit`
    Quit,
}

impl Command {
    /// Parse one command line. Tokens are separated by whitespace and each
    /// verb takes an exact number of arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        match verb {
            "list" => parse_list(args),
            "add" => {
                let [id] = expect_args::<1>("add", args)?;
                Ok(Command::Add(parse_id(id)?))
            }
            "remove" => {
                let [id] = expect_args::<1>("remove", args)?;
                Ok(Command::Remove(parse_id(id)?))
            }
            "trip" => {
                expect_args::<0>("trip", args)?;
                Ok(Command::Trip)
            }
            "nearest" => {
                let [count] = expect_args::<1>("nearest", args)?;
                Ok(Command::Nearest(parse_count(count)?))
            }
            "quit" => {
                expect_args::<0>("quit", args)?;
                Ok(Command::Quit)
            }
            other => Err(CommandError::UnknownCommand {
                verb: other.to_string(),
            }),
        }
    }
}

fn parse_list(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        ["parks"] => Ok(Command::ListParks),
        ["names"] => Ok(Command::ListNames),
        ["county", county] => Ok(Command::ListCounty(county.to_string())),
        ["county", rest @ ..] => Err(CommandError::WrongArgumentCount {
            command: "list county",
            expected: 1,
            found: rest.len(),
        }),
        ["parks" | "names", rest @ ..] => Err(CommandError::WrongArgumentCount {
            command: "list",
            expected: 1,
            found: rest.len() + 1,
        }),
        [] => Err(CommandError::WrongArgumentCount {
            command: "list",
            expected: 1,
            found: 0,
        }),
        [other, ..] => Err(CommandError::UnknownCommand {
            verb: format!("list {other}"),
        }),
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::WrongArgumentCount {
        command,
        expected: N,
        found: args.len(),
    })
}

fn parse_id(value: &str) -> Result<ParkId, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        what: "park id",
        value: value.to_string(),
    })
}

fn parse_count(value: &str) -> Result<usize, CommandError> {
    let count: i64 = value.parse().map_err(|_| CommandError::InvalidNumber {
        what: "count",
        value: value.to_string(),
    })?;
    if count <= 0 {
        return Err(CommandError::NonPositiveCount { count });
    }
    usize::try_from(count).map_err(|_| CommandError::InvalidNumber {
        what: "count",
        value: value.to_string(),
    })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ListParks => f.write_str("list parks"),
            Command::ListNames => f.write_str("list names"),
            Command::ListCounty(county) => write!(f, "list county {county}"),
            Command::Add(id) => write!(f, "add {id}"),
            Command::Remove(id) => write!(f, "remove {id}"),
            Command::Trip => f.write_str("trip"),
            Command::Nearest(count) => write!(f, "nearest {count}"),
            Command::Quit => f.write_str("quit"),
        }
    }
}
