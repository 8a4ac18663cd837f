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

use crate::preprocessing::TRAIN_SPLIT_BOUNDARY;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "/opt/ml/processing/input";
pub const DEFAULT_TRAIN_DIR: &str = "/opt/ml/processing/train";
pub const DEFAULT_VALIDATION_DIR: &str = "/opt/ml/processing/validation";

pub const INPUT_FILE_NAME: &str = "movie_reviews.csv";
pub const TRAIN_FILE_NAME: &str = "train.csv";
pub const VALIDATION_FILE_NAME: &str = "validation.csv";

pub const DEFAULT_TRAIN_TEST_SPLIT_RATIO: f64 = 0.3;

/// # Preprocessing configuration
/// Input and output locations of a run, and the split settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessingConfig {
    pub input_path: PathBuf,
    pub train_output_path: PathBuf,
    pub validation_output_path: PathBuf,
    /// Accepted for compatibility with the job launcher, never applied to the split.
    pub train_test_split_ratio: f64,
    /// Number of leading rows assigned to the train partition
    pub split_boundary: usize,
}

impl PreprocessingConfig {
    /// Builds a configuration reading `movie_reviews.csv` from `input_dir` and writing
    /// `train.csv` / `validation.csv` to their respective directories.
    pub fn from_dirs(
        input_dir: &Path,
        train_dir: &Path,
        validation_dir: &Path,
        train_test_split_ratio: f64,
    ) -> Self {
        PreprocessingConfig {
            input_path: input_dir.join(INPUT_FILE_NAME),
            train_output_path: train_dir.join(TRAIN_FILE_NAME),
            validation_output_path: validation_dir.join(VALIDATION_FILE_NAME),
            train_test_split_ratio,
            split_boundary: TRAIN_SPLIT_BOUNDARY,
        }
    }
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        PreprocessingConfig::from_dirs(
            Path::new(DEFAULT_INPUT_DIR),
            Path::new(DEFAULT_TRAIN_DIR),
            Path::new(DEFAULT_VALIDATION_DIR),
            DEFAULT_TRAIN_TEST_SPLIT_RATIO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        //        Given
        let config = PreprocessingConfig::default();

        //        Then
        assert_eq!(
            config.input_path,
            PathBuf::from("/opt/ml/processing/input/movie_reviews.csv")
        );
        assert_eq!(
            config.train_output_path,
            PathBuf::from("/opt/ml/processing/train/train.csv")
        );
        assert_eq!(
            config.validation_output_path,
            PathBuf::from("/opt/ml/processing/validation/validation.csv")
        );
        assert_eq!(config.train_test_split_ratio, 0.3);
        assert_eq!(config.split_boundary, 25000);
    }

    #[test]
    fn test_config_from_dirs_keeps_fixed_boundary() {
        //        When
        let config = PreprocessingConfig::from_dirs(
            Path::new("in"),
            Path::new("out/train"),
            Path::new("out/validation"),
            0.8,
        );

        //        Then
        assert_eq!(config.input_path, Path::new("in").join("movie_reviews.csv"));
        assert_eq!(config.train_test_split_ratio, 0.8);
        assert_eq!(config.split_boundary, TRAIN_SPLIT_BOUNDARY);
    }
}
