//! Park file ingestion.
//!
//! A park file is a sequence of two-line records:
//!
//! ```text
//! <id> <latitude> <longitude> <county> [<county>...]
//! <park name>
//! ```
//!
//! A file is parsed completely before any of its parks are committed, so a
//! rejected file never leaves a partial set of records behind.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::Catalog;
use crate::error::{Error, RecordError, Result};
use crate::park::{Park, ParkId};

struct RecordHeader {
    id: ParkId,
    latitude: f64,
    longitude: f64,
    counties: Vec<String>,
}

impl Catalog {
    /// Load a catalog from one or more park files, in order.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut catalog = Self::new();
        catalog.load_paths(paths)?;
        Ok(catalog)
    }

    /// Append parks from several files. Stops at the first invalid file.
    pub fn load_paths<I, P>(&mut self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.load_path(path.as_ref())?;
        }
        Ok(())
    }

    /// Append parks from a single file, returning how many were added.
    pub fn load_path(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| Error::UnreadableParkFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(BufReader::new(file), path)
    }

    /// Append parks from any buffered reader. `origin` names the source in
    /// diagnostics.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, origin: &Path) -> Result<usize> {
        let unreadable = |source: std::io::Error| Error::UnreadableParkFile {
            path: origin.to_path_buf(),
            source,
        };
        let invalid = |line: usize, source: RecordError| Error::InvalidParkFile {
            path: origin.to_path_buf(),
            line,
            source,
        };

        let mut pending: Vec<Park> = Vec::new();
        let mut seen: HashSet<ParkId> = HashSet::new();
        let mut lines = reader.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let line = line.map_err(unreadable)?;
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let header = parse_header(&line).map_err(|source| invalid(line_no, source))?;
            let name = match lines.next() {
                Some((_, name)) => name.map_err(unreadable)?,
                None => return Err(invalid(line_no, RecordError::MissingName { id: header.id })),
            };

            if self.contains_id(header.id) || !seen.insert(header.id) {
                return Err(invalid(line_no, RecordError::DuplicateId { id: header.id }));
            }

            let park = Park::new(
                header.id,
                name.trim_end_matches('\r'),
                header.latitude,
                header.longitude,
                header.counties,
            )
            .map_err(|source| invalid(line_no, source))?;
            pending.push(park);
        }

        let added = pending.len();
        for park in pending {
            self.push(park);
        }
        self.record_source(origin);
        debug!(path = %origin.display(), added, total = self.len(), "loaded park file");
        Ok(added)
    }
}

fn parse_header(line: &str) -> std::result::Result<RecordHeader, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(RecordError::MissingFields {
            found: fields.len(),
        });
    }

    Ok(RecordHeader {
        id: parse_field("id", fields[0])?,
        latitude: parse_degrees("latitude", fields[1])?,
        longitude: parse_degrees("longitude", fields[2])?,
        counties: fields[3..].iter().map(|c| c.to_string()).collect(),
    })
}

fn parse_field<T: FromStr>(
    field: &'static str,
    value: &str,
) -> std::result::Result<T, RecordError> {
    value.parse::<T>().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_degrees(field: &'static str, value: &str) -> std::result::Result<f64, RecordError> {
    let degrees: f64 = parse_field(field, value)?;
    if !degrees.is_finite() {
        return Err(RecordError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        catalog.load_reader(Cursor::new(text), Path::new("memory.txt"))?;
        Ok(catalog)
    }

    fn record_error(text: &str) -> RecordError {
        match load(text).expect_err("should reject") {
            Error::InvalidParkFile { source, .. } => source,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parses_two_line_records() {
        let catalog = load(
            "1 35.2115 -81.2874 Gaston\nCrowders Mountain State Park\n\
             2 35.8670 -78.7530 Wake Durham\nWilliam B. Umstead State Park\n",
        )
        .expect("valid file");

        assert_eq!(catalog.len(), 2);
        let umstead = catalog.get_by_id(2).expect("present");
        assert_eq!(umstead.name(), "William B. Umstead State Park");
        assert_eq!(umstead.counties(), ["Wake", "Durham"]);
        assert_eq!(umstead.latitude(), 35.867);
        assert_eq!(catalog.sources(), [Path::new("memory.txt").to_path_buf()]);
    }

    #[test]
    fn tolerates_crlf_and_blank_separators() {
        let catalog = load("4 36.0 -79.0 Orange\r\nEno River\r\n\n").expect("valid file");
        assert_eq!(catalog.get_by_id(4).map(Park::name), Some("Eno River"));
    }

    #[test]
    fn reports_line_of_bad_record() {
        let err = load("1 35 -81 Gaston\nA\n2 abc -80 Wake\nB\n").expect_err("bad latitude");
        match err {
            Error::InvalidParkFile { line, source, .. } => {
                assert_eq!(line, 3);
                assert_eq!(
                    source,
                    RecordError::InvalidNumber {
                        field: "latitude",
                        value: "abc".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_short_header() {
        assert_eq!(
            record_error("1 35.0\nName\n"),
            RecordError::MissingFields { found: 2 }
        );
    }

    #[test]
    fn rejects_missing_name_line() {
        assert_eq!(
            record_error("1 35.0 -80.0 Wake"),
            RecordError::MissingName { id: 1 }
        );
    }

    #[test]
    fn rejects_duplicate_within_file() {
        assert_eq!(
            record_error("1 35 -80 Wake\nA\n1 36 -81 Wake\nB\n"),
            RecordError::DuplicateId { id: 1 }
        );
    }

    #[test]
    fn rejects_duplicate_across_files() {
        let mut catalog = load("1 35 -80 Wake\nA\n").expect("first file");
        let err = catalog
            .load_reader(Cursor::new("2 35 -80 Wake\nB\n1 36 -81 Wake\nC\n"), Path::new("second.txt"))
            .expect_err("duplicate across files");
        assert!(matches!(
            err,
            Error::InvalidParkFile {
                source: RecordError::DuplicateId { id: 1 },
                ..
            }
        ));
        // nothing from the rejected file is committed
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.contains_id(2));
    }

    #[test]
    fn rejects_limit_violations() {
        assert!(matches!(
            record_error("1 35 -80 A B C D E F\nName\n"),
            RecordError::TooManyCounties { count: 6, .. }
        ));
        assert!(matches!(
            record_error("1 35 -80 Mecklenburgxx\nName\n"),
            RecordError::CountyTooLong { .. }
        ));
        assert!(matches!(
            record_error(&format!("1 35 -80 Wake\n{}\n", "n".repeat(41))),
            RecordError::NameTooLong { .. }
        ));
        assert_eq!(
            record_error("1 35 -80\nName\n"),
            RecordError::NoCounties { id: 1 }
        );
    }

    #[test]
    fn diagnostic_names_the_file() {
        let err = load("x 35 -80 Wake\nName\n").expect_err("bad id");
        assert!(err.to_string().contains("memory.txt"));
    }
}
