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

//! Preprocessing of a movie review sentiment dataset into fastText-style training files.
//!
//! The job reads a CSV with `sentiment` and `review` columns, splits it by row position into a
//! train and a validation partition, cleans the review text, rewrites the sentiment as a label tag
//! and flattens each row into a single `document` field written to space-delimited files.
//!
//! ```no_run
//! use review_preprocessing::{pipeline, PreprocessingConfig};
//!
//! let summary = pipeline::run(&PreprocessingConfig::default())?;
//! println!("{} train rows", summary.train_rows);
//! # Ok::<(), review_preprocessing::error::PreprocessingError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod preprocessing;

pub use config::PreprocessingConfig;
pub use dataset::{Dataset, Record};
pub use pipeline::RunSummary;

#[macro_use]
extern crate lazy_static;
