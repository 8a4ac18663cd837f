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

/// Raw sentiment categories and the fastText label tags they are rewritten to
pub const SENTIMENT_LABELS: [(&str, &str); 2] = [
    ("positive", "__label__positive"),
    ("negative", "__label__negative"),
];

/// # Label map
/// Immutable lookup table from raw sentiment values to label tags.
#[derive(Debug, Clone, Copy)]
pub struct LabelMap {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelMap {
    /// Creates a label map over a static table of `(raw value, tag)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        LabelMap { entries }
    }

    /// Returns the tag for a raw sentiment value.
    ///
    /// Values absent from the table map to `None` rather than failing: downstream these rows
    /// simply carry no label tag.
    ///
    ///  # Arguments
    /// - sentiment (`&str`): raw sentiment value
    ///
    ///  # Returns
    /// - `Option<&'static str>` containing the tag if the value is known
    pub fn map(&self, sentiment: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(raw, _)| *raw == sentiment)
            .map(|(_, tag)| *tag)
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        LabelMap::new(&SENTIMENT_LABELS)
    }
}
