//! Kernel-configuration parser.
//!
//! Folds `device`/`cpu`/`nodevice`/`nooptions` lines into the shared
//! `options` key and accumulates every other keyword under its own
//! name, preserving first-appearance key order. `include` lines (and
//! the implicit DEFAULTS include) become `.include` directives in the
//! output rather than config settings.

use crate::error::ConvertError;
use crate::model::{ConfValue, KernConfDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*#").unwrap());
static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*$").unwrap());

fn is_skippable(line: &str) -> bool {
    RE_BLANK.is_match(line) || RE_COMMENT.is_match(line)
}

/// Parse a kernel configuration. `name` is the input's file name: the
/// DEFAULTS config is the only one that does not include DEFAULTS.
pub fn parse(name: &str, input: &str) -> Result<KernConfDoc, ConvertError> {
    let mut doc = KernConfDoc::default();
    if name != "DEFAULTS" {
        doc.includes.push("DEFAULTS".to_string());
    }

    for (index, raw) in input.lines().enumerate() {
        if is_skippable(raw) {
            continue;
        }
        let line = index + 1;
        let mut words = raw.split_whitespace();
        let Some(keyword) = words.next() else {
            continue;
        };
        let value = words.next().ok_or_else(|| ConvertError::MissingArgument {
            directive: keyword.to_string(),
            line,
        })?;

        match keyword {
            "include" => doc.includes.push(value.to_string()),
            "nodevice" | "nooptions" => doc.push(
                "options",
                ConfValue::Pair(value.to_string(), "false".to_string()),
            ),
            "device" | "cpu" => doc.push("options", split_value(value)),
            _ => doc.push(keyword, split_value(value)),
        }
    }
    Ok(doc)
}

/// `NAME=VALUE` splits at the first `=`; anything else is a bare term.
fn split_value(word: &str) -> ConfValue {
    match word.split_once('=') {
        Some((name, value)) => ConfValue::Pair(name.to_string(), value.to_string()),
        None => ConfValue::Term(word.to_string()),
    }
}
