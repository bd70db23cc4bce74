use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::model::Suite;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read execution record: {0}")]
    Io(#[from] io::Error),
    #[error("malformed execution record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a finished run left behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    #[serde(default)]
    pub suites: Vec<Suite>,
    /// Reporter output logged outside of any single result.
    #[serde(default)]
    pub output: Vec<String>,
}

impl ExecutionRecord {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let reader = BufReader::new(File::open(path)?);
        let record: ExecutionRecord = serde_json::from_reader(reader)?;
        debug!(
            "Loaded {} suites from {}",
            record.suites.len(),
            path.display()
        );
        Ok(record)
    }

    #[inline]
    pub fn all_output(&self) -> &[String] {
        &self.output
    }
}

impl FromStr for ExecutionRecord {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
