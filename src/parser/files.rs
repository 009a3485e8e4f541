//! File-list record parser.
//!
//! Turns each logical line of a `files[.arch]` manifest into a
//! [`SourceEntry`]: path, `standard`/`optional` keyword, option
//! alternatives separated by `|`, then the fixed directive set.

use crate::error::ConvertError;
use crate::lexer::{Lexer, LogicalLine};
use crate::model::{
    Arity, Directive, DirectiveValue, OptionGroup, Requirement, SourceEntry,
};
use std::collections::BTreeMap;

/// Parse a whole file-list manifest in encounter order.
pub fn parse(input: &str) -> Result<Vec<SourceEntry>, ConvertError> {
    let mut entries = Vec::new();
    for line in Lexer::new(input) {
        let line = line?;
        if line.words.is_empty() {
            continue;
        }
        entries.push(parse_entry(&line)?);
    }
    Ok(entries)
}

/// Parse one non-blank logical line into an entry.
pub fn parse_entry(line: &LogicalLine) -> Result<SourceEntry, ConvertError> {
    let words = &line.words;
    let path = words[0].clone();

    let (requirement, mut pos) = match words.get(1).map(String::as_str) {
        Some("standard") => (Requirement::Required, 2),
        Some("optional") => {
            let (group, resume) = scan_options(words, 2);
            (Requirement::Optional(group), resume)
        }
        Some(other) => {
            return Err(ConvertError::UnexpectedKeyword {
                keyword: other.to_string(),
                line: line.number,
            })
        }
        None => {
            return Err(ConvertError::MissingKeyword {
                path,
                line: line.number,
            })
        }
    };

    let mut directives = BTreeMap::new();
    while pos < words.len() {
        let word = &words[pos];
        let Some(directive) = Directive::from_token(word) else {
            return Err(ConvertError::UnknownDirective {
                directive: word.clone(),
                line: line.number,
            });
        };
        pos += 1;
        let value = match directive.arity() {
            Arity::Flag => DirectiveValue::Set,
            Arity::Arg => {
                let arg = words.get(pos).ok_or_else(|| ConvertError::MissingArgument {
                    directive: word.clone(),
                    line: line.number,
                })?;
                pos += 1;
                DirectiveValue::Arg(arg.clone())
            }
        };
        // Repeated directive names: last write wins.
        directives.insert(directive, value);
    }

    Ok(SourceEntry {
        path,
        requirement,
        directives,
    })
}

/// Scan option identifiers from `start` until a directive name (left
/// in place for the caller) or the end of the line. `|` closes the
/// current alternative. The final alternative is pushed even when
/// empty: an option identifier that collides with a directive name
/// ends the scan immediately, so `optional local` yields one empty
/// alternative and a `local` directive.
fn scan_options(words: &[String], start: usize) -> (OptionGroup, usize) {
    let mut alternatives = Vec::new();
    let mut current = Vec::new();
    let mut pos = start;
    while pos < words.len() {
        let word = &words[pos];
        if word == "|" {
            alternatives.push(std::mem::take(&mut current));
        } else if Directive::from_token(word).is_some() {
            break;
        } else {
            current.push(word.clone());
        }
        pos += 1;
    }
    alternatives.push(current);
    (OptionGroup { alternatives }, pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str) -> SourceEntry {
        let mut entries = parse(input).unwrap();
        assert_eq!(entries.len(), 1, "expected one entry in {input:?}");
        entries.remove(0)
    }

    fn alternatives(entry: &SourceEntry) -> &Vec<Vec<String>> {
        match &entry.requirement {
            Requirement::Optional(group) => &group.alternatives,
            Requirement::Required => panic!("entry is required"),
        }
    }

    #[test]
    fn required_entry() {
        let e = entry("foo.c standard");
        assert_eq!(e.path, "foo.c");
        assert_eq!(e.requirement, Requirement::Required);
        assert!(e.directives.is_empty());
    }

    #[test]
    fn optional_single_identifier() {
        let e = entry("bar.c optional FOO");
        assert_eq!(alternatives(&e), &vec![vec!["FOO".to_string()]]);
    }

    #[test]
    fn optional_with_alternatives() {
        let e = entry("bar.c optional X Y | Z");
        assert_eq!(
            alternatives(&e),
            &vec![
                vec!["X".to_string(), "Y".to_string()],
                vec!["Z".to_string()]
            ]
        );
    }

    #[test]
    fn trailing_separator_leaves_empty_alternative() {
        let e = entry("bar.c optional X |");
        assert_eq!(
            alternatives(&e),
            &vec![vec!["X".to_string()], Vec::<String>::new()]
        );
    }

    #[test]
    fn directives_after_options() {
        let e = entry("bar.c optional FOO | BAR no-obj dependency gen.sh");
        assert_eq!(alternatives(&e).len(), 2);
        assert_eq!(e.directives.get(&Directive::NoObj), Some(&DirectiveValue::Set));
        assert_eq!(
            e.directives.get(&Directive::Dependency),
            Some(&DirectiveValue::Arg("gen.sh".to_string()))
        );
    }

    #[test]
    fn quoted_argument_keeps_its_quotes() {
        let e = entry(r#"baz.c standard compile-with "cc -O2""#);
        assert_eq!(
            e.directives.get(&Directive::CompileWith),
            Some(&DirectiveValue::Arg(r#""cc -O2""#.to_string()))
        );
    }

    #[test]
    fn unexpected_second_token_is_fatal() {
        let err = parse("qux.c weird").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnexpectedKeyword {
                keyword: "weird".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn missing_keyword_is_fatal() {
        let err = parse("qux.c").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MissingKeyword {
                path: "qux.c".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn unknown_directive_is_fatal() {
        let err = parse("foo.c standard frobnicate").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownDirective {
                directive: "frobnicate".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn missing_directive_argument_is_fatal() {
        let err = parse("foo.c standard compile-with").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MissingArgument {
                directive: "compile-with".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn repeated_directive_last_write_wins() {
        let e = entry("foo.c standard warning first warning second");
        assert_eq!(
            e.directives.get(&Directive::Warning),
            Some(&DirectiveValue::Arg("second".to_string()))
        );
        assert_eq!(e.directives.len(), 1);
    }

    #[test]
    fn option_name_colliding_with_directive_ends_the_scan() {
        // `local` is a directive name, so the option scan stops with an
        // empty alternative and `local` parses as a flag directive.
        let e = entry("foo.c optional local");
        assert_eq!(alternatives(&e), &vec![Vec::<String>::new()]);
        assert_eq!(e.directives.get(&Directive::Local), Some(&DirectiveValue::Set));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let input = "# header comment\n\nfoo.c standard\n\nbar.c optional FOO # inline\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "foo.c");
        assert_eq!(entries[1].path, "bar.c");
    }

    #[test]
    fn continuation_joins_one_record() {
        let e = entry("foo.c standard \\\n\tno-obj");
        assert_eq!(e.directives.get(&Directive::NoObj), Some(&DirectiveValue::Set));
    }

    #[test]
    fn errors_carry_the_record_line_number() {
        let err = parse("foo.c standard\nbar.c standard\nqux.c weird\n").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnexpectedKeyword {
                keyword: "weird".to_string(),
                line: 3
            }
        );
    }

    #[test]
    fn entries_keep_encounter_order() {
        let entries = parse("a.c standard\nb.c standard\nc.c optional X\n").unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a.c", "b.c", "c.c"]);
    }
}
