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

use crate::dataset::{Dataset, Record, DOCUMENT_COLUMN, REVIEW_COLUMN, SENTIMENT_COLUMN};
use crate::error::PreprocessingError;
use crate::preprocessing::cleaner::clean_review;
use crate::preprocessing::labels::LabelMap;
use itertools::Itertools;

/// Text a missing review is converted to before cleaning
pub const MISSING_REVIEW_TEXT: &str = "nan";

/// Joins the cells of a record in reverse column order, skipping missing values.
pub fn build_document(cells: &[Option<String>]) -> String {
    cells.iter().rev().flatten().join(" ")
}

/// Turns a partition into its document form.
///
/// The sentiment column is rewritten with `labels`, the review column is cleaned, and a
/// `document` column is built from all columns (in reverse order). The original sentiment and
/// review columns are then dropped, leaving any pass-through columns followed by `document`.
/// A missing review is converted to `nan` before cleaning, so every row carries a review text.
///
///  # Arguments
/// - dataset (`Dataset`): partition to process, must contain `sentiment` and `review` columns
/// - labels (`&LabelMap`): sentiment to label tag mapping
///
///  # Returns
/// - `Result<Dataset, PreprocessingError>` containing the flattened partition
///
///  # Example
/// ```
/// use review_preprocessing::preprocessing::{process_partition, LabelMap};
/// use review_preprocessing::Dataset;
///
/// let dataset = Dataset::new(
///     vec!["review".to_owned(), "sentiment".to_owned()],
///     vec![vec![Some("A great [spoiler] film".to_owned()), Some("positive".to_owned())]],
/// );
/// let processed = process_partition(dataset, &LabelMap::default()).unwrap();
///
/// assert_eq!(processed.columns, vec!["document".to_owned()]);
/// assert_eq!(
///     processed.rows[0],
///     vec![Some("__label__positive great film".to_owned())]
/// );
/// ```
pub fn process_partition(
    dataset: Dataset,
    labels: &LabelMap,
) -> Result<Dataset, PreprocessingError> {
    let sentiment_index = dataset.column_index(SENTIMENT_COLUMN)?;
    let review_index = dataset.column_index(REVIEW_COLUMN)?;

    let mut columns: Vec<String> = dataset
        .columns
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != sentiment_index && *index != review_index)
        .map(|(_, column)| column.clone())
        .collect();
    columns.push(DOCUMENT_COLUMN.to_owned());

    let rows = dataset
        .rows
        .into_iter()
        .map(|mut row| {
            row[sentiment_index] = row[sentiment_index]
                .as_deref()
                .and_then(|sentiment| labels.map(sentiment))
                .map(String::from);
            row[review_index] = Some(clean_review(
                row[review_index].as_deref().unwrap_or(MISSING_REVIEW_TEXT),
            ));

            let document = build_document(&row);
            let mut flattened: Record = row
                .into_iter()
                .enumerate()
                .filter(|(index, _)| *index != sentiment_index && *index != review_index)
                .map(|(_, cell)| cell)
                .collect();
            flattened.push(Some(document));
            flattened
        })
        .collect();

    Ok(Dataset::new(columns, rows))
}
