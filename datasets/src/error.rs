use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("label column `{column}` not found (columns: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("row {row}, column `{column}`: `{value}` is not a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    #[error(transparent)]
    Dataset(#[from] skridge::Error),
}
