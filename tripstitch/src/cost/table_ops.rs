use super::CostError;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{BufReader, Read},
};

/// reads all rows of a headered CSV lookup table into a vector. tables may
/// optionally be gzip-compressed, signalled by a ".gz" filename suffix.
pub fn read_rows<T: DeserializeOwned>(filename: &str) -> Result<Vec<T>, CostError> {
    let file = File::open(filename)
        .map_err(|e| CostError::TableReadError(filename.to_string(), e.to_string()))?;
    let reader: Box<dyn Read> = if filename.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(file)
    };
    let rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .into_deserialize::<T>()
        .map(|r| r.map_err(|e| CostError::TableReadError(filename.to_string(), e.to_string())))
        .collect::<Result<Vec<T>, CostError>>()?;
    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestRow {
        name: String,
        amount: f64,
    }

    fn temp_filename(suffix: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tripstitch-table-{}-{}", std::process::id(), suffix))
    }

    #[test]
    fn test_read_plaintext_rows() {
        // SETUP: a small headered table on disk
        let path = temp_filename("plain.csv");
        let mut file = File::create(&path).expect("test invariant failed");
        writeln!(file, "name,amount").expect("test invariant failed");
        writeln!(file, "alpha,1.5").expect("test invariant failed");
        writeln!(file, "beta,2.0").expect("test invariant failed");

        // TEST
        let rows: Vec<TestRow> =
            read_rows(path.to_str().expect("test invariant failed")).expect("read should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "alpha");
        assert_eq!(rows[1].amount, 2.0);
        std::fs::remove_file(&path).expect("test invariant failed");
    }

    #[test]
    fn test_read_gzip_rows() {
        // SETUP: the same table, gzip-compressed
        let path = temp_filename("zipped.csv.gz");
        let file = File::create(&path).expect("test invariant failed");
        let mut encoder =
            flate2::write::GzEncoder::new(file, flate2::Compression::default());
        writeln!(encoder, "name,amount").expect("test invariant failed");
        writeln!(encoder, "gamma,3.25").expect("test invariant failed");
        encoder.finish().expect("test invariant failed");

        // TEST
        let rows: Vec<TestRow> =
            read_rows(path.to_str().expect("test invariant failed")).expect("read should succeed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "gamma");
        assert_eq!(rows[0].amount, 3.25);
        std::fs::remove_file(&path).expect("test invariant failed");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_rows::<TestRow>("/nonexistent/lookup.csv");
        match result {
            Err(CostError::TableReadError(filename, _)) => {
                assert_eq!(filename, "/nonexistent/lookup.csv")
            }
            other => panic!("expected TableReadError, found {:?}", other),
        }
    }
}
