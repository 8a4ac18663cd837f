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

//! # In-memory tabular dataset
//! Ordered column names and rows of optional cells. A `None` cell is a missing value
//! (an empty field in the source CSV, or an unknown sentiment after label mapping).

use crate::error::PreprocessingError;
use itertools::Itertools;

/// Column holding the raw sentiment category
pub const SENTIMENT_COLUMN: &str = "sentiment";
/// Column holding the free-text review
pub const REVIEW_COLUMN: &str = "review";
/// Derived column holding the flattened document
pub const DOCUMENT_COLUMN: &str = "document";

/// A single row: one optional cell per dataset column
pub type Record = Vec<Option<String>>;

/// # Dataset
/// Rows are kept in file order; every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Creates a new `Dataset` from its column names and rows.
    ///
    ///  # Arguments
    /// - columns (`Vec<String>`): ordered column names
    /// - rows (`Vec<Record>`): rows, each with one cell per column
    ///
    ///  # Returns
    /// - `Dataset`
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Dataset { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Result<usize, PreprocessingError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| PreprocessingError::MissingColumn(name.to_owned()))
    }

    /// Returns the first `n` rows rendered one per line, missing cells shown as `NaN`.
    /// Used for log previews only.
    pub fn head(&self, n: usize) -> String {
        let header = self.columns.join(" | ");
        let body = self
            .rows
            .iter()
            .take(n)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_deref().unwrap_or("NaN"))
                    .join(" | ")
            })
            .join("\n");
        format!("{}\n{}", header, body)
    }
}
