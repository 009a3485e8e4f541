//! Manifest parsers — dispatch by manifest kind.

pub mod files;
pub mod kernconf;
pub mod options;

use crate::error::ConvertError;
use crate::model::{KernConfDoc, OptionRecord, SourceEntry};
use anyhow::{anyhow, Result};
use std::path::Path;

/// Which converter applies to an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Files,
    Options,
    KernConf,
}

impl ManifestKind {
    /// Detect the manifest kind from a file name: `files` and
    /// `files.<arch>` are file lists, `options` and `options.<arch>`
    /// are option lists, and anything else is a kernel configuration.
    pub fn detect(name: &str) -> ManifestKind {
        if name == "files" || name.starts_with("files.") {
            ManifestKind::Files
        } else if name == "options" || name.starts_with("options.") {
            ManifestKind::Options
        } else {
            ManifestKind::KernConf
        }
    }

    /// Parse the `--kind` override.
    pub fn from_flag(flag: &str) -> Result<ManifestKind> {
        match flag {
            "files" => Ok(ManifestKind::Files),
            "options" => Ok(ManifestKind::Options),
            "kernconf" | "config" => Ok(ManifestKind::KernConf),
            _ => Err(anyhow!(
                "unknown manifest kind: {}. Use files, options, or kernconf",
                flag
            )),
        }
    }
}

/// A fully parsed input file, ready to render.
#[derive(Debug)]
pub enum Manifest {
    Files(Vec<SourceEntry>),
    Options(Vec<OptionRecord>),
    KernConf(KernConfDoc),
}

/// Parse one manifest. `name` is the input's file name, which the
/// kernel-config converter needs for its implicit include.
pub fn parse(kind: ManifestKind, name: &str, input: &str) -> Result<Manifest, ConvertError> {
    match kind {
        ManifestKind::Files => Ok(Manifest::Files(files::parse(input)?)),
        ManifestKind::Options => Ok(Manifest::Options(options::parse(input))),
        ManifestKind::KernConf => Ok(Manifest::KernConf(kernconf::parse(name, input)?)),
    }
}

/// Top-level node name for the rendered document. The unadorned
/// reserved names are the machine-independent manifests; everything
/// else is architecture-specific.
pub fn node_name(kind: ManifestKind, name: &str) -> &'static str {
    match kind {
        ManifestKind::Files => {
            if name == "files" {
                "kern-src"
            } else {
                "kern-arch-src"
            }
        }
        ManifestKind::Options => {
            if name == "options" {
                "kern-options"
            } else {
                "kern-arch-options"
            }
        }
        ManifestKind::KernConf => "kernconf",
    }
}

/// The file-name component of a path, as UTF-8.
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_file_lists() {
        assert_eq!(ManifestKind::detect("files"), ManifestKind::Files);
        assert_eq!(ManifestKind::detect("files.amd64"), ManifestKind::Files);
    }

    #[test]
    fn detects_option_lists() {
        assert_eq!(ManifestKind::detect("options"), ManifestKind::Options);
        assert_eq!(ManifestKind::detect("options.arm64"), ManifestKind::Options);
    }

    #[test]
    fn everything_else_is_a_kernel_config() {
        assert_eq!(ManifestKind::detect("GENERIC"), ManifestKind::KernConf);
        assert_eq!(ManifestKind::detect("DEFAULTS"), ManifestKind::KernConf);
        assert_eq!(ManifestKind::detect("filesystem"), ManifestKind::KernConf);
    }

    #[test]
    fn node_name_by_identity() {
        assert_eq!(node_name(ManifestKind::Files, "files"), "kern-src");
        assert_eq!(node_name(ManifestKind::Files, "files.amd64"), "kern-arch-src");
        assert_eq!(node_name(ManifestKind::Options, "options"), "kern-options");
        assert_eq!(
            node_name(ManifestKind::Options, "options.i386"),
            "kern-arch-options"
        );
        assert_eq!(node_name(ManifestKind::KernConf, "GENERIC"), "kernconf");
    }

    #[test]
    fn kind_flag_parses() {
        assert_eq!(
            ManifestKind::from_flag("files").unwrap(),
            ManifestKind::Files
        );
        assert_eq!(
            ManifestKind::from_flag("config").unwrap(),
            ManifestKind::KernConf
        );
        assert!(ManifestKind::from_flag("frobs").is_err());
    }

    #[test]
    fn file_name_takes_the_last_component() {
        assert_eq!(file_name(Path::new("sys/conf/files")), "files");
        assert_eq!(file_name(Path::new("files.amd64")), "files.amd64");
    }
}
