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

use anyhow::Context;
use clap::Parser;
use review_preprocessing::config::{
    DEFAULT_INPUT_DIR, DEFAULT_TRAIN_DIR, DEFAULT_TRAIN_TEST_SPLIT_RATIO, DEFAULT_VALIDATION_DIR,
};
use review_preprocessing::{pipeline, PreprocessingConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "review_preprocessing")]
struct Args {
    /// Train/test split ratio. Accepted but not applied: the split boundary is fixed.
    #[arg(long, default_value_t = DEFAULT_TRAIN_TEST_SPLIT_RATIO)]
    train_test_split_ratio: f64,

    /// Directory containing movie_reviews.csv
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory receiving train.csv
    #[arg(long, default_value = DEFAULT_TRAIN_DIR)]
    train_dir: PathBuf,

    /// Directory receiving validation.csv
    #[arg(long, default_value = DEFAULT_VALIDATION_DIR)]
    validation_dir: PathBuf,

    /// Extra arguments appended by the job launcher, ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored_args: Vec<String>,
}

impl Args {
    fn to_config(&self) -> PreprocessingConfig {
        PreprocessingConfig::from_dirs(
            &self.input_dir,
            &self.train_dir,
            &self.validation_dir,
            self.train_test_split_ratio,
        )
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_preprocessing=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if !args.ignored_args.is_empty() {
        info!("Ignoring unknown arguments {:?}", args.ignored_args);
    }
    let config = args.to_config();

    let summary = pipeline::run(&config)
        .with_context(|| format!("preprocessing {}", config.input_path.display()))?;

    println!("train_rows={}", summary.train_rows);
    println!("validation_rows={}", summary.validation_rows);
    Ok(())
}
