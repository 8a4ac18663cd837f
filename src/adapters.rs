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

//! # Adapter helpers to read and write datasets
//! Reads the review CSV into a `Dataset` and writes processed partitions in the space-delimited
//! format expected by the downstream classifier.

use crate::dataset::{Dataset, Record};
use crate::error::PreprocessingError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Reads a review dataset file (comma separated, with a header row).
///
/// Empty fields are read as missing values.
///
///  # Arguments
/// - path (`&Path`): path to the CSV file
///
///  # Returns
/// - `Result<Dataset, PreprocessingError>` containing the columns and rows in file order
pub fn read_reviews(path: &Path) -> Result<Dataset, PreprocessingError> {
    let f = File::open(path).map_err(|e| {
        PreprocessingError::FileNotFound(format!("{} dataset file not found: {}", path.display(), e))
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(false)
        .from_reader(f);

    let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows: Vec<Record> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_owned())
                    }
                })
                .collect(),
        );
    }
    Ok(Dataset::new(columns, rows))
}

/// Writes a partition as one line per row, fields separated by a single space.
///
/// No header, no quoting and no escaping: spaces inside a field are indistinguishable from field
/// separators. Consumers read the first token as the label tag and the remainder as the text.
/// Missing values are written as empty fields. A row made only of empty fields is written as its
/// bare separators rather than the quoted empty record the CSV writer would otherwise emit.
///
///  # Arguments
/// - dataset (`&Dataset`): partition to write
/// - path (`&Path`): output file, created or truncated
///
///  # Returns
/// - `Result<(), PreprocessingError>`
pub fn write_partition(dataset: &Dataset, path: &Path) -> Result<(), PreprocessingError> {
    let f = File::create(path)?;
    write_records(dataset, f)
}

pub(crate) fn write_records<W: Write>(
    dataset: &Dataset,
    writer: W,
) -> Result<(), PreprocessingError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in dataset.rows.iter() {
        if row.iter().all(|cell| cell.as_deref().map_or(true, str::is_empty)) {
            wtr.flush()?;
            let separators = " ".repeat(row.len().saturating_sub(1));
            wtr.get_mut().write_all(separators.as_bytes())?;
            wtr.get_mut().write_all(b"\n")?;
            continue;
        }
        wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}
