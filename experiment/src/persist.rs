//! Write and read fitted models.
//!
//! Models are stored as JSON. A save writes a sibling `*.tmp` file first and
//! renames it over the target, so readers never see a half-written artifact.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Stable artifact name, overwritten on every run.
pub const MODEL_FILE_NAME: &str = "sklearn_regression_model.pkl";

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(MODEL_FILE_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_json<M: Serialize>(model: &M, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, model)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Serialize `model` to `path`, replacing any previous file.
pub fn save_model<M: Serialize>(model: &M, path: &Path) -> Result<()> {
    let tmp = tmp_path(path);
    if let Err(e) = write_json(model, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;

    debug!("model written to {}", path.display());
    Ok(())
}

/// Read a model previously written by [`save_model`].
pub fn load_model<M: DeserializeOwned>(path: &Path) -> Result<M> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExperimentError;
    use std::collections::BTreeMap;

    #[test]
    fn tmp_file_is_a_sibling() {
        let tmp = tmp_path(Path::new("out/sklearn_regression_model.pkl"));
        assert_eq!(tmp, PathBuf::from("out/sklearn_regression_model.pkl.tmp"));
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE_NAME);

        let first: BTreeMap<&str, f64> = vec![("w", 1.0)].into_iter().collect();
        let second: BTreeMap<&str, f64> = vec![("w", 2.0)].into_iter().collect();
        save_model(&first, &path).unwrap();
        save_model(&second, &path).unwrap();

        let loaded: BTreeMap<String, f64> = load_model(&path).unwrap();
        assert_eq!(loaded.get("w"), Some(&2.0));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn failed_save_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(MODEL_FILE_NAME);

        assert!(matches!(
            save_model(&1.0_f64, &path),
            Err(ExperimentError::Io(_))
        ));
        assert!(!path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn loading_garbage_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE_NAME);
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(
            load_model::<BTreeMap<String, f64>>(&path),
            Err(ExperimentError::Json(_))
        ));
    }
}
