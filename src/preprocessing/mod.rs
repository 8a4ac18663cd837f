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

//!# Preprocessing
//!
//! Row-level transforms applied to each partition of the review dataset:
//! - text cleaning of the review column
//! - sentiment to label tag mapping
//! - flattening of each row into a single `document` column
//!
//! and the positional train / validation split applied before them.

mod cleaner;
mod flattener;
mod labels;
mod splitter;

pub use cleaner::{clean_review, remove_between_square_brackets};
pub use flattener::{build_document, process_partition, MISSING_REVIEW_TEXT};
pub use labels::{LabelMap, SENTIMENT_LABELS};
pub use splitter::{split_partitions, TRAIN_SPLIT_BOUNDARY};
