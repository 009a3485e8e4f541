//! Option-manifest parser.
//!
//! `options[.arch]` manifests are plain `OPTION [header]` lines with
//! no quoting or continuation, so physical lines are split on
//! whitespace directly.

use crate::model::OptionRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*#").unwrap());
static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*$").unwrap());

/// True if the line carries no record.
fn is_skippable(line: &str) -> bool {
    RE_BLANK.is_match(line) || RE_COMMENT.is_match(line)
}

/// Parse a whole option manifest in encounter order.
pub fn parse(input: &str) -> Vec<OptionRecord> {
    input
        .lines()
        .filter(|line| !is_skippable(line))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<OptionRecord> {
    let mut words = line.split_whitespace();
    let option = words.next()?.to_string();
    // A second word introduces the header unless it opens a comment.
    let header = words
        .next()
        .filter(|word| !word.starts_with('#'))
        .map(String::from);
    Some(OptionRecord { option, header })
}
