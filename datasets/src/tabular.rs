use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use ndarray::{Array1, Array2};
use skridge::Dataset;

use crate::error::{LoadError, Result};

/// Conventional name of the label column.
pub const DEFAULT_TARGET: &str = "Y";

/// Load a dataset from a CSV file with a header row.
///
/// Files whose name ends in `.gz` are decompressed on the fly.
pub fn from_csv<P: AsRef<Path>>(path: P, target: &str) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let gzipped = path.extension().map_or(false, |ext| ext == "gz");
    if gzipped {
        from_reader(GzDecoder::new(file), target)
    } else {
        from_reader(file, target)
    }
}

/// Load a dataset from any CSV source with a header row.
///
/// The `target` column becomes the label; all other columns, in file order,
/// become features. A header-only source yields an empty dataset.
pub fn from_reader<R: Read>(reader: R, target: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let target_idx = headers
        .iter()
        .position(|h| h == target)
        .ok_or_else(|| LoadError::MissingColumn {
            column: target.to_string(),
            available: headers.clone(),
        })?;

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != target_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut records = Vec::new();
    let mut targets = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| LoadError::Parse {
                row: row + 1,
                column: headers[col].clone(),
                value: field.to_string(),
            })?;
            if col == target_idx {
                targets.push(value);
            } else {
                records.push(value);
            }
        }
    }

    let records = Array2::from_shape_vec((targets.len(), feature_names.len()), records)?;
    let dataset = Dataset::new(records, Array1::from(targets))?.with_feature_names(feature_names)?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use ndarray::array;
    use std::io::Write;

    const SMALL: &str = "age,bmi,Y\n0.5,1.5,10\n-1,2,20\n3,0.25,30\n";

    #[test]
    fn label_column_is_split_off_by_name() {
        let dataset = from_reader(SMALL.as_bytes(), DEFAULT_TARGET).unwrap();

        assert_eq!(dataset.records, array![[0.5, 1.5], [-1.0, 2.0], [3.0, 0.25]]);
        assert_eq!(dataset.targets, array![10.0, 20.0, 30.0]);
        assert_eq!(dataset.feature_names(), vec!["age", "bmi"]);
    }

    #[test]
    fn label_column_can_sit_anywhere() {
        let csv = "Y, a, b\n1, 2, 3\n4, 5, 6\n";
        let dataset = from_reader(csv.as_bytes(), "Y").unwrap();

        assert_eq!(dataset.records, array![[2.0, 3.0], [5.0, 6.0]]);
        assert_eq!(dataset.targets, array![1.0, 4.0]);
    }

    #[test]
    fn missing_label_column_is_reported() {
        match from_reader(SMALL.as_bytes(), "target") {
            Err(LoadError::MissingColumn { column, available }) => {
                assert_eq!(column, "target");
                assert_eq!(available, vec!["age", "bmi", "Y"]);
            }
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_cell_is_reported_with_position() {
        let csv = "a,Y\n1,2\nx,3\n";
        match from_reader(csv.as_bytes(), "Y") {
            Err(LoadError::Parse { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "a");
                assert_eq!(value, "x");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let csv = "a,b,Y\n1,2,3\n4,5\n";
        assert!(matches!(
            from_reader(csv.as_bytes(), "Y"),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn header_only_source_gives_empty_dataset() {
        let dataset = from_reader("a,b,Y\n".as_bytes(), "Y").unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.nfeatures(), 2);
    }

    #[test]
    fn reads_plain_and_gzipped_files() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("data.csv");
        std::fs::write(&plain, SMALL).unwrap();

        let gz = dir.path().join("data.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(SMALL.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let a = from_csv(&plain, DEFAULT_TARGET).unwrap();
        let b = from_csv(&gz, DEFAULT_TARGET).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.nsamples(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            from_csv(dir.path().join("nope.csv"), DEFAULT_TARGET),
            Err(LoadError::Io(_))
        ));
    }
}
