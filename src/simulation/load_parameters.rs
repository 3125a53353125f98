// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;
use tracing::info;

use crate::config::Scenario;
use crate::error::{Result, SimError};

/// シナリオの読み込み
///
/// 値の範囲検査は行わない（[`Scenario::validate`] を参照）
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = from_reader(file).map_err(|source| SimError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "シナリオを読み込みました: {} (h = {}, N = {})",
        path.display(),
        scenario.step_size,
        scenario.parameters.num_steps
    );
    Ok(scenario)
}
