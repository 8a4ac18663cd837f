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

//! # Preprocessing error variants
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessingError {
    #[error("File not found error: {0}")]
    FileNotFound(String),

    #[error("Error when reading or writing a dataset file: {0}")]
    IOError(String),

    #[error("Error when parsing the dataset, the file may be corrupted or does not match the expected CSV format: {0}")]
    CsvError(String),

    #[error("Column not found in dataset: {0}")]
    MissingColumn(String),
}

impl From<csv::Error> for PreprocessingError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(_) => PreprocessingError::IOError(error.to_string()),
            _ => PreprocessingError::CsvError(error.to_string()),
        }
    }
}

impl From<std::io::Error> for PreprocessingError {
    fn from(error: std::io::Error) -> Self {
        PreprocessingError::IOError(error.to_string())
    }
}
