//! Kernel-config emitter.
//!
//! Includes come first as `.include` directives, then one object
//! holding the accumulated settings. Single-valued keys render inline;
//! multi-valued keys render as a bracketed list. Values stay unquoted.

use crate::model::{ConfValue, KernConfDoc};

pub fn render(doc: &KernConfDoc, node: &str) -> String {
    let mut out = String::new();
    for include in &doc.includes {
        out.push_str(&format!(".include {}.ucl\n", include));
    }
    out.push_str(&format!("{} = {{\n", node));
    for (key, values) in &doc.settings {
        if values.len() == 1 {
            out.push_str(&format!("\t{} = {},\n", key, conf_value(&values[0])));
        } else {
            out.push_str(&format!("\t{} = [\n", key));
            for value in values {
                out.push_str(&format!("\t\t{},\n", conf_value(value)));
            }
            out.push_str("\t]\n");
        }
    }
    out.push_str("}\n");
    out
}

fn conf_value(value: &ConfValue) -> String {
    match value {
        ConfValue::Term(term) => term.clone(),
        ConfValue::Pair(name, value) => format!("{{{} = {}}}", name, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::kernconf::parse;

    fn rendered(name: &str, input: &str) -> String {
        render(&parse(name, input).unwrap(), "kernconf")
    }

    #[test]
    fn single_values_render_inline() {
        let out = rendered("GENERIC", "ident GENERIC\n");
        assert_eq!(
            out,
            ".include DEFAULTS.ucl\nkernconf = {\n\tident = GENERIC,\n}\n"
        );
    }

    #[test]
    fn repeated_keys_render_as_a_list() {
        let out = rendered("GENERIC", "device ahci\nnodevice mlx\noptions MAXUSERS=32\n");
        assert_eq!(
            out,
            ".include DEFAULTS.ucl\nkernconf = {\n\toptions = [\n\t\tahci,\n\t\t{mlx = false},\n\t\t{MAXUSERS = 32},\n\t]\n}\n"
        );
    }

    #[test]
    fn single_pair_renders_inline_as_an_object() {
        let out = rendered("GENERIC", "makeoptions DEBUG=-g\n");
        assert!(out.contains("\tmakeoptions = {DEBUG = -g},\n"));
    }

    #[test]
    fn defaults_config_has_no_include_preamble() {
        let out = rendered("DEFAULTS", "device mem\n");
        assert!(out.starts_with("kernconf = {\n"));
    }

    #[test]
    fn explicit_includes_come_before_the_object() {
        let out = rendered("CUSTOM", "include GENERIC\nident CUSTOM\n");
        assert!(out.starts_with(".include DEFAULTS.ucl\n.include GENERIC.ucl\nkernconf = {\n"));
    }
}
