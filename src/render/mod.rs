//! UCL emitters — one per manifest shape, sharing the scalar rules.

pub mod files;
pub mod kernconf;
pub mod options;

use crate::parser::Manifest;

/// Render a parsed manifest under its top-level node name.
pub fn render(manifest: &Manifest, node: &str) -> String {
    match manifest {
        Manifest::Files(entries) => files::render(entries, node),
        Manifest::Options(records) => options::render(records, node),
        Manifest::KernConf(doc) => kernconf::render(doc, node),
    }
}

/// Quote a scalar for output. Words that came through the tokenizer's
/// quoted path still carry their delimiters and are emitted as-is;
/// everything else is wrapped in double quotes.
pub fn quote_scalar(value: &str) -> String {
    if value.starts_with('"') || value.starts_with('\'') {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_values_get_double_quotes() {
        assert_eq!(quote_scalar("foo.c"), "\"foo.c\"");
    }

    #[test]
    fn quoted_values_pass_through() {
        assert_eq!(quote_scalar(r#""cc -O2""#), r#""cc -O2""#);
        assert_eq!(quote_scalar("'cc -O2'"), "'cc -O2'");
    }
}
