// Copyright 2019 Guillaume Becquin
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Preprocessing job
//! Load, split, process and write the review dataset in a single synchronous pass.

use crate::adapters::{read_reviews, write_partition};
use crate::config::PreprocessingConfig;
use crate::error::PreprocessingError;
use crate::preprocessing::{process_partition, split_partitions, LabelMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PREVIEW_ROWS: usize = 5;

/// Outcome of a preprocessing run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub train_rows: usize,
    pub validation_rows: usize,
    pub train_output_path: PathBuf,
    pub validation_output_path: PathBuf,
}

/// Runs the preprocessing job described by `config` with the default sentiment labels.
///
///  # Arguments
/// - config (`&PreprocessingConfig`): input / output locations and split settings
///
///  # Returns
/// - `Result<RunSummary, PreprocessingError>` with the partition sizes and written files
pub fn run(config: &PreprocessingConfig) -> Result<RunSummary, PreprocessingError> {
    run_with_labels(config, &LabelMap::default())
}

/// Runs the preprocessing job with an explicit label map.
pub fn run_with_labels(
    config: &PreprocessingConfig,
    labels: &LabelMap,
) -> Result<RunSummary, PreprocessingError> {
    info!("Received arguments {:?}", config);
    info!(
        "Train/validation boundary fixed at row {}, split ratio {} is not applied",
        config.split_boundary, config.train_test_split_ratio
    );

    info!("Reading input data from {}", config.input_path.display());
    let dataset = read_reviews(&config.input_path)?;
    let (train_data, validation_data) = split_partitions(dataset, config.split_boundary);
    info!("raw train data\n{}", train_data.head(PREVIEW_ROWS));

    let train_data = process_partition(train_data, labels)?;
    let validation_data = process_partition(validation_data, labels)?;
    info!("processed train data\n{}", train_data.head(PREVIEW_ROWS));
    info!("processed validation data\n{}", validation_data.head(PREVIEW_ROWS));
    info!(
        "Split {} train rows and {} validation rows",
        train_data.len(),
        validation_data.len()
    );

    ensure_parent_dir(&config.train_output_path)?;
    write_partition(&train_data, &config.train_output_path)?;
    info!("Wrote train data to {}", config.train_output_path.display());

    ensure_parent_dir(&config.validation_output_path)?;
    write_partition(&validation_data, &config.validation_output_path)?;
    info!(
        "Wrote validation data to {}",
        config.validation_output_path.display()
    );

    Ok(RunSummary {
        train_rows: train_data.len(),
        validation_rows: validation_data.len(),
        train_output_path: config.train_output_path.clone(),
        validation_output_path: config.validation_output_path.clone(),
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), PreprocessingError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
