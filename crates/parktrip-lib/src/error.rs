use std::path::PathBuf;

use thiserror::Error;

use crate::park::ParkId;

/// Convenient result alias for the park trip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Load-time library error type.
///
/// Every variant is fatal: the binary reports it and exits non-zero before the
/// interactive loop starts.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a park file could not be opened or read.
    #[error("Invalid park file: {path}: {source}")]
    UnreadableParkFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a record inside a park file was rejected.
    #[error("Invalid park file: {path} (line {line}): {source}")]
    InvalidParkFile {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Raised when parks assembled in memory contain the same id twice.
    #[error("duplicate park id {id}")]
    DuplicateParkId { id: ParkId },
}

/// Reason a single park record was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The header line did not contain id, latitude and longitude.
    #[error("expected `<id> <lat> <lon> <county>...`, found {found} field(s)")]
    MissingFields { found: usize },

    /// A numeric field failed to parse.
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// The header line listed no counties.
    #[error("park {id} lists no counties")]
    NoCounties { id: ParkId },

    /// The header line listed more counties than a park may have.
    #[error("park {id} lists {count} counties (max {max})")]
    TooManyCounties { id: ParkId, count: usize, max: usize },

    /// A county label exceeded the maximum length.
    #[error("county '{county}' is longer than {max} characters")]
    CountyTooLong { county: String, max: usize },

    /// The file ended before the name line of a record.
    #[error("park {id} is missing its name line")]
    MissingName { id: ParkId },

    /// The park name exceeded the maximum length.
    #[error("park name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    /// Id already present in this file or a previously loaded one.
    #[error("duplicate park id {id}")]
    DuplicateId { id: ParkId },
}

/// Recoverable error raised by an interactive command.
///
/// These are reported as `Invalid command` and never terminate the session.
/// Catalog and trip state are untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command '{verb}'")]
    UnknownCommand { verb: String },

    #[error("'{command}' expects {expected} argument(s), got {found}")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("'{value}' is not a valid {what}")]
    InvalidNumber { what: &'static str, value: String },

    #[error("no park with id {id} in the catalog")]
    UnknownPark { id: ParkId },

    #[error("park {id} is not on the trip")]
    NotInTrip { id: ParkId },

    #[error("the trip is empty")]
    EmptyTrip,

    #[error("nearest count must be positive, got {count}")]
    NonPositiveCount { count: i64 },
}
