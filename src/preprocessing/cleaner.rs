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

use regex::Regex;

lazy_static! {
    static ref SQUARE_BRACKETS: Regex = Regex::new(r"\[[^\]]*\]").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"\W").unwrap();
    static ref ISOLATED_LETTER: Regex = Regex::new(r"\s+[a-zA-Z]\s+").unwrap();
    static ref LEADING_LETTER: Regex = Regex::new(r"^[a-zA-Z]\s+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref BYTES_PREFIX: Regex = Regex::new(r"^b\s+").unwrap();
}

/// Removes every `[...]` annotation, brackets included.
pub fn remove_between_square_brackets(text: &str) -> String {
    SQUARE_BRACKETS.replace_all(text, "").into_owned()
}

/// Cleans a review text.
///
/// Steps, in order:
/// - strip bracketed annotations
/// - replace every non-word character with a space
/// - drop isolated single letters
/// - drop a single letter at the very start of the text
/// - collapse whitespace runs to a single space
/// - drop a leading `b ` left over from stringified byte strings
///
/// Leading and trailing single spaces are kept.
///
///  # Arguments
/// - text (`&str`): raw review text
///
///  # Returns
/// - `String` containing the cleaned review
///
///  # Example
/// ```
/// use review_preprocessing::preprocessing::clean_review;
///
/// assert_eq!(clean_review("A great [spoiler] film"), "great film");
/// ```
pub fn clean_review(text: &str) -> String {
    let text = remove_between_square_brackets(text);
    let text = NON_WORD.replace_all(&text, " ");
    let text = ISOLATED_LETTER.replace_all(&text, " ");
    let text = LEADING_LETTER.replace(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    BYTES_PREFIX.replace(&text, "").into_owned()
}
