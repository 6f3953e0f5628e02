use std::fmt::Write;

use serde::Serialize;

use crate::error::CommandError;
use crate::nearest::NearestResult;
use crate::park::Park;
use crate::session::Response;
use crate::trip::TripLeg;

/// Message printed for every rejected command in text mode.
pub const INVALID_COMMAND: &str = "Invalid command";

/// Presentation style for turning a [`Response`] into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Column-aligned tables.
    #[default]
    PlainText,
    /// One JSON object per command (JSON Lines).
    Json,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    reason: &'a str,
}

impl Response<'_> {
    /// Render the response using the requested mode.
    ///
    /// Text output is empty for commands that print nothing (`add`, `remove`,
    /// `quit`); otherwise it ends with a newline.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Json => render_json(self),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self {
            Response::Parks { parks } => write_park_table(&mut buffer, parks),
            Response::Trip { legs } => write_trip_table(&mut buffer, legs),
            Response::Nearest(result) => write_nearest_table(&mut buffer, result),
            Response::Added { .. } | Response::Removed { .. } | Response::Quit => {}
        }
        buffer
    }
}

/// Render a rejected command.
pub fn render_error(error: &CommandError, mode: RenderMode) -> String {
    match mode {
        RenderMode::PlainText => format!("{INVALID_COMMAND}\n"),
        RenderMode::Json => {
            let reason = error.to_string();
            render_json(&ErrorBody {
                error: "invalid command",
                reason: &reason,
            })
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(mut line) => {
            line.push('\n');
            line
        }
        Err(err) => format!("{{\"error\":\"serialization failed\",\"reason\":\"{err}\"}}\n"),
    }
}

fn write_park_table(buffer: &mut String, parks: &[&Park]) {
    let _ = writeln!(
        buffer,
        "{:<3} {:<40} {:>8} {:>8} Counties",
        "ID", "Name", "Lat", "Lon"
    );
    for park in parks {
        let _ = writeln!(
            buffer,
            "{:<3} {:<40} {:>8.3} {:>8.3} {}",
            park.id(),
            park.name(),
            park.latitude(),
            park.longitude(),
            park.counties().join(",")
        );
    }
}

fn write_distance_header(buffer: &mut String) {
    let _ = writeln!(buffer, "{:<3} {:<40} {:>8}", "ID", "Name", "Distance");
}

fn write_distance_row(buffer: &mut String, park: &Park, distance: f64) {
    let _ = writeln!(
        buffer,
        "{:<3} {:<40} {:>8.1}",
        park.id(),
        park.name(),
        distance
    );
}

fn write_trip_table(buffer: &mut String, legs: &[TripLeg<'_>]) {
    write_distance_header(buffer);
    for leg in legs {
        write_distance_row(buffer, leg.park, leg.cumulative_distance);
    }
}

// The anchor is listed first at distance zero so the table reads as
// "from here, the closest parks are ...".
fn write_nearest_table(buffer: &mut String, result: &NearestResult<'_>) {
    write_distance_header(buffer);
    write_distance_row(buffer, result.anchor, 0.0);
    for neighbour in &result.neighbours {
        write_distance_row(buffer, neighbour.park, neighbour.distance);
    }
}
