use super::emit_ops::RowSets;
use super::OutputError;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use serde::Serialize;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// basenames of the seven output files, written as `<name>.csv` with `.gz`
/// appended when compression is on
const ROW_SET_NAMES: [&str; 7] = [
    "trips",
    "legs",
    "leg_links",
    "leg_pathtraversals",
    "pathtraversals",
    "pathtraversal_links",
    "vehicles",
];

/// writes the seven row sets under the output directory, creating it if
/// absent. existing output files fail the run before anything is written
/// unless overwrite is set.
pub fn write_row_sets(
    rows: &RowSets,
    output_directory: &Path,
    compress: bool,
    overwrite: bool,
) -> Result<(), OutputError> {
    std::fs::create_dir_all(output_directory).map_err(|e| {
        OutputError::WriteError(output_directory.display().to_string(), e.to_string())
    })?;
    let filepaths: Vec<PathBuf> = ROW_SET_NAMES
        .iter()
        .map(|name| row_set_path(output_directory, name, compress))
        .collect();
    if !overwrite {
        for filepath in filepaths.iter() {
            if filepath.exists() {
                return Err(OutputError::AlreadyExistsError(
                    filepath.display().to_string(),
                ));
            }
        }
    }
    write_rows(&rows.trips, &filepaths[0], compress)?;
    write_rows(&rows.legs, &filepaths[1], compress)?;
    write_rows(&rows.leg_links, &filepaths[2], compress)?;
    write_rows(&rows.leg_pathtraversals, &filepaths[3], compress)?;
    write_rows(&rows.pathtraversals, &filepaths[4], compress)?;
    write_rows(&rows.pathtraversal_links, &filepaths[5], compress)?;
    write_rows(&rows.vehicles, &filepaths[6], compress)?;
    Ok(())
}

fn row_set_path(directory: &Path, name: &str, compress: bool) -> PathBuf {
    let extension = if compress { "csv.gz" } else { "csv" };
    directory.join(format!("{name}.{extension}"))
}

fn write_rows<T: Serialize>(
    rows: &[T],
    filepath: &Path,
    compress: bool,
) -> Result<(), OutputError> {
    let file = File::create(filepath)
        .map_err(|e| OutputError::WriteError(filepath.display().to_string(), e.to_string()))?;
    let buffer: Box<dyn Write> = if compress {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(file)
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    for row in rows.iter() {
        writer
            .serialize(row)
            .map_err(|e| OutputError::WriteError(filepath.display().to_string(), e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| OutputError::WriteError(filepath.display().to_string(), e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::output::rows::TripRow;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn one_row_sets() -> RowSets {
        let mut rows = RowSets::default();
        rows.trips.push(TripRow {
            run_id: String::from("run-7"),
            person_id: String::from("p-1"),
            trip_num: 1,
            orig_act: 1,
            dest_act: 2,
            trip_start: 0,
            trip_end: 600,
            distance: 5000.0,
            planned_mode: Some(String::from("car")),
            realized_mode: String::from("car"),
            fare: 0.0,
            fuel_cost: 1.5,
            toll: 0.0,
            incentives: 0.0,
        });
        rows
    }

    fn temp_directory(suffix: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tripstitch-write-{}-{}", std::process::id(), suffix))
    }

    #[test]
    fn test_plain_write_has_expected_header() {
        let directory = temp_directory("plain");
        write_row_sets(&one_row_sets(), &directory, false, true).expect("write should succeed");

        let contents =
            std::fs::read_to_string(directory.join("trips.csv")).expect("test invariant failed");
        let header = contents.lines().next().expect("test invariant failed");
        assert_eq!(
            header,
            "run_id,person_id,trip_num,orig_act,dest_act,trip_start,trip_end,distance,planned_mode,realized_mode,fare,fuel_cost,toll,incentives"
        );
        let data_line = contents.lines().nth(1).expect("test invariant failed");
        assert!(data_line.starts_with("run-7,p-1,1,"));
        // all seven files exist even when their row sets are empty
        for name in ROW_SET_NAMES.iter() {
            assert!(directory.join(format!("{name}.csv")).exists());
        }
        std::fs::remove_dir_all(&directory).expect("test invariant failed");
    }

    #[test]
    fn test_gzip_write_round_trips() {
        let directory = temp_directory("gzip");
        write_row_sets(&one_row_sets(), &directory, true, true).expect("write should succeed");

        let file =
            std::fs::File::open(directory.join("trips.csv.gz")).expect("test invariant failed");
        let mut contents = String::new();
        GzDecoder::new(file)
            .read_to_string(&mut contents)
            .expect("test invariant failed");
        assert!(contents.starts_with("run_id,person_id,"));
        std::fs::remove_dir_all(&directory).expect("test invariant failed");
    }

    #[test]
    fn test_existing_output_refused_without_overwrite() {
        let directory = temp_directory("refuse");
        write_row_sets(&one_row_sets(), &directory, false, true).expect("write should succeed");

        let refused = write_row_sets(&one_row_sets(), &directory, false, false);
        match refused {
            Err(OutputError::AlreadyExistsError(_)) => {}
            other => panic!("expected AlreadyExistsError, found {:?}", other),
        }
        write_row_sets(&one_row_sets(), &directory, false, true)
            .expect("overwrite should succeed");
        std::fs::remove_dir_all(&directory).expect("test invariant failed");
    }
}
