//! kconf2ucl — convert legacy kernel build manifests to UCL.
//!
//! Handles the three manifest shapes found in a kernel configuration
//! tree:
//!
//! - **file lists** (`files`, `files.<arch>`) — source paths with
//!   `standard`/`optional` requirements and per-file build directives
//! - **option lists** (`options`, `options.<arch>`) — option name plus
//!   optional header file
//! - **kernel configs** (`GENERIC`, `MINIMAL`, ...) — keyword/value
//!   settings folded into one object
//!
//! A single input renders to stdout; with `-o` one `<name>.ucl` is
//! written per input (glob patterns supported).

mod error;
mod lexer;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use parser::ManifestKind;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "kconf2ucl",
    about = "Convert legacy kernel build manifests (file lists, option lists, kernel configs) to UCL"
)]
struct Cli {
    /// Input manifests (glob patterns supported)
    files: Vec<String>,

    /// Output directory; without it a single input renders to stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Manifest kind: files, options, kernconf (default: detect from
    /// the file name)
    #[arg(short = 'k', long)]
    kind: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        anyhow::bail!("no input manifests given");
    }

    let kind_override = cli
        .kind
        .as_deref()
        .map(ManifestKind::from_flag)
        .transpose()?;

    let inputs = expand_globs(&cli.files)?;
    if inputs.is_empty() {
        anyhow::bail!("no input manifests matched");
    }

    match &cli.output {
        None => {
            if inputs.len() > 1 {
                anyhow::bail!("--output is required with more than one input");
            }
            print!("{}", convert(&inputs[0], kind_override)?);
        }
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create output directory: {}", dir.display())
            })?;
            for input in &inputs {
                let rendered = convert(input, kind_override)?;
                let out_path = dir.join(output_name(input));
                fs::write(&out_path, rendered)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
            }
        }
    }

    Ok(())
}

/// Read, parse, and render one manifest.
fn convert(path: &Path, kind_override: Option<ManifestKind>) -> Result<String> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = parser::file_name(path);
    let kind = kind_override.unwrap_or_else(|| ManifestKind::detect(name));
    let manifest = parser::parse(kind, name, &input)
        .with_context(|| format!("failed to convert {}", path.display()))?;
    Ok(render::render(&manifest, parser::node_name(kind, name)))
}

/// Output file name for an input manifest: "files.amd64" → "files.amd64.ucl".
fn output_name(input: &Path) -> String {
    format!("{}.ucl", parser::file_name(input))
}

/// Expand glob patterns into a list of real file paths.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
