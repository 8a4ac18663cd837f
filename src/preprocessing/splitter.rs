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

use crate::dataset::Dataset;

/// Number of leading rows assigned to the train partition
pub const TRAIN_SPLIT_BOUNDARY: usize = 25000;

/// Splits a dataset by row position: rows `[0, boundary)` go to train, the rest to validation.
/// Datasets shorter than the boundary give an empty validation partition.
/// Both partitions keep the full set of columns.
pub fn split_partitions(dataset: Dataset, boundary: usize) -> (Dataset, Dataset) {
    let Dataset { columns, mut rows } = dataset;
    let validation_rows = rows.split_off(boundary.min(rows.len()));
    (
        Dataset::new(columns.clone(), rows),
        Dataset::new(columns, validation_rows),
    )
}
