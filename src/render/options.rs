//! Option-list emitter.
//!
//! Option manifests render as a flat array of small objects; the
//! header line is omitted when the manifest gave none.

use crate::model::OptionRecord;

pub fn render(records: &[OptionRecord], node: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} = [\n", node));
    for record in records {
        out.push_str("\t{\n");
        out.push_str(&format!("\t\toption = \"{}\",\n", record.option));
        if let Some(header) = &record.header {
            out.push_str(&format!("\t\theader = \"{}\",\n", header));
        }
        out.push_str("\t},\n");
    }
    out.push_str("]\n");
    out
}
