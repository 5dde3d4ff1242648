use super::{Event, EventError, EventKind};
use flate2::read::GzDecoder;
use kdam::tqdm;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;

/// raw event log row. column names follow the simulator's header; columns
/// without a role in reconstruction are ignored.
#[derive(Debug, Deserialize)]
struct EventRow {
    time: f64,
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    person: Option<String>,
    #[serde(default)]
    vehicle: Option<String>,
    #[serde(default)]
    driver: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    links: Option<String>,
    #[serde(default)]
    length: Option<f64>,
    #[serde(default, rename = "departureTime")]
    departure_time: Option<f64>,
    #[serde(default, rename = "arrivalTime")]
    arrival_time: Option<f64>,
    #[serde(default, rename = "numPassengers")]
    num_passengers: Option<f64>,
    #[serde(default, rename = "primaryFuel")]
    primary_fuel: Option<f64>,
    #[serde(default, rename = "primaryFuelType")]
    primary_fuel_type: Option<String>,
    #[serde(default, rename = "primaryFuelLevel")]
    primary_fuel_level: Option<f64>,
    #[serde(default, rename = "tollPaid")]
    toll_paid: Option<f64>,
    #[serde(default, rename = "vehicleType")]
    vehicle_type: Option<String>,
    #[serde(default, rename = "startX")]
    start_x: Option<f64>,
    #[serde(default, rename = "startY")]
    start_y: Option<f64>,
    #[serde(default, rename = "endX")]
    end_x: Option<f64>,
    #[serde(default, rename = "endY")]
    end_y: Option<f64>,
}

/// reads the event log at `events_file`, a headered csv optionally gzipped,
/// into decoded events in log order. any malformed row fails the read.
pub fn read_events(events_file: &str) -> Result<Vec<Event>, EventError> {
    let file = File::open(events_file)
        .map_err(|e| EventError::ReadError(events_file.to_string(), format!("{e}")))?;
    let reader: Box<dyn Read> = if events_file.ends_with(".gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    read_events_from_reader(reader)
}

/// decodes events from any csv source. rows keep their log order.
pub fn read_events_from_reader<R: Read>(reader: R) -> Result<Vec<Event>, EventError> {
    let csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let rows = tqdm!(
        csv_reader.into_deserialize::<EventRow>(),
        desc = "decoding events"
    );
    let mut events: Vec<Event> = vec![];
    for (idx, row) in rows.enumerate() {
        let row_num = idx + 1;
        let row = row.map_err(|e| EventError::MalformedRow(row_num, format!("{e}")))?;
        events.push(decode_row(row, row_num)?);
    }
    Ok(events)
}

fn decode_row(row: EventRow, row_num: usize) -> Result<Event, EventError> {
    let links = match &row.links {
        None => vec![],
        Some(raw) => parse_links(raw, row_num)?,
    };
    let event = Event {
        kind: EventKind::from(row.event_type.as_str()),
        time: row.time,
        person: row.person,
        vehicle: row.vehicle,
        driver: row.driver,
        mode: row.mode,
        links,
        length: row.length,
        departure_time: row.departure_time,
        arrival_time: row.arrival_time,
        num_passengers: row.num_passengers.map(|n| n as u32),
        fuel: row.primary_fuel,
        fuel_type: row.primary_fuel_type,
        fuel_level: row.primary_fuel_level,
        toll_paid: row.toll_paid,
        vehicle_type: row.vehicle_type,
        start_x: row.start_x,
        start_y: row.start_y,
        end_x: row.end_x,
        end_y: row.end_y,
    };
    Ok(event)
}

/// parses a comma-joined link id list. empty tokens are skipped, anything
/// non-numeric is a decode failure.
fn parse_links(raw: &str, row_num: usize) -> Result<Vec<i64>, EventError> {
    raw.split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|e| {
                EventError::MalformedRow(row_num, format!("link id '{token}': {e}"))
            })
        })
        .collect::<Result<Vec<i64>, EventError>>()
}
