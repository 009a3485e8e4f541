//! File-list emitter — renders [`SourceEntry`] values into the nested
//! UCL array consumed by the downstream build glue.
//!
//! Key order is fixed regardless of which keys are present: path,
//! required, options, then the directives in their declaration order.
//! Absent keys are omitted entirely.

use crate::model::{DirectiveValue, OptionGroup, Requirement, SourceEntry};
use crate::render::quote_scalar;

/// Render a whole file-list document under `node`.
pub fn render(entries: &[SourceEntry], node: &str) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!("\t{} = [\n", node));
    for entry in entries {
        render_entry(&mut out, entry);
    }
    out.push_str("\t]\n}\n");
    out
}

/// One entry: `\t\t{` fields `\t\t},` — every entry, including the
/// last, takes the trailing comma.
fn render_entry(out: &mut String, entry: &SourceEntry) {
    out.push_str("\t\t{\n");
    write_string(out, "path", &entry.path);
    match &entry.requirement {
        Requirement::Required => write_flag(out, "required"),
        Requirement::Optional(group) => write_options(out, "options", group),
    }
    for (directive, value) in &entry.directives {
        match value {
            DirectiveValue::Set => write_flag(out, directive.name()),
            DirectiveValue::Arg(arg) => write_string(out, directive.name(), arg),
        }
    }
    out.push_str("\t\t},\n");
}

fn write_string(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("\t\t\t{} : {}\n", name, quote_scalar(value)));
}

/// Flags are only ever emitted as true; absence means the key is
/// omitted, never false.
fn write_flag(out: &mut String, name: &str) {
    out.push_str(&format!("\t\t\t{} : true\n", name));
}

/// Option groups render one level deep: a single alternative is either
/// a bare string or an `all-of` list; multiple alternatives become an
/// `any-of` list whose multi-identifier members nest an `all-of`.
fn write_options(out: &mut String, name: &str, group: &OptionGroup) {
    let alternatives = &group.alternatives;
    if alternatives.len() == 1 {
        if alternatives[0].len() == 1 {
            out.push_str(&format!("\t\t\t{} : \"{}\"\n", name, alternatives[0][0]));
        } else {
            out.push_str(&format!(
                "\t\t\t{} : {{ all-of : [{}]}}\n",
                name,
                quoted_list(&alternatives[0])
            ));
        }
    } else {
        let members: Vec<String> = alternatives
            .iter()
            .map(|alternative| {
                if alternative.len() == 1 {
                    format!("\"{}\"", alternative[0])
                } else {
                    format!("{{ all-of : [{}]}}", quoted_list(alternative))
                }
            })
            .collect();
        out.push_str(&format!(
            "\t\t\t{} : {{any-of : [{}]}}\n",
            name,
            members.join(", ")
        ));
    }
}

fn quoted_list(identifiers: &[String]) -> String {
    identifiers
        .iter()
        .map(|identifier| format!("\"{identifier}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
