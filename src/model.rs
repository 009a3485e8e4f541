//! Data model for parsed manifests — format-agnostic.

use std::collections::BTreeMap;

/// How a source file participates in the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Unconditionally built (`standard`).
    Required,
    /// Built only when one of the option alternatives is satisfied.
    Optional(OptionGroup),
}

/// "Any of these sets of options, each set required together."
///
/// Outer order is the alternative order (any-of); inner order is the
/// identifier order within one alternative (all-of).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionGroup {
    pub alternatives: Vec<Vec<String>>,
}

/// The closed set of per-file build directives.
///
/// Declaration order is the output key order used by the serializer,
/// so `BTreeMap<Directive, _>` iterates in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directive {
    NoObj,
    CompileWith,
    NoImplicitRule,
    Dependency,
    BeforeDepend,
    Local,
    Clean,
    Warning,
    ObjPrefix,
}

/// Whether a directive stands alone or carries one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Flag,
    Arg,
}

impl Directive {
    /// Recognize a manifest token as a directive name.
    pub fn from_token(token: &str) -> Option<Directive> {
        match token {
            "no-obj" => Some(Directive::NoObj),
            "compile-with" => Some(Directive::CompileWith),
            "no-implicit-rule" => Some(Directive::NoImplicitRule),
            "dependency" => Some(Directive::Dependency),
            "before-depend" => Some(Directive::BeforeDepend),
            "local" => Some(Directive::Local),
            "clean" => Some(Directive::Clean),
            "warning" => Some(Directive::Warning),
            "obj-prefix" => Some(Directive::ObjPrefix),
            _ => None,
        }
    }

    /// The manifest spelling, also used as the output key.
    pub fn name(self) -> &'static str {
        match self {
            Directive::NoObj => "no-obj",
            Directive::CompileWith => "compile-with",
            Directive::NoImplicitRule => "no-implicit-rule",
            Directive::Dependency => "dependency",
            Directive::BeforeDepend => "before-depend",
            Directive::Local => "local",
            Directive::Clean => "clean",
            Directive::Warning => "warning",
            Directive::ObjPrefix => "obj-prefix",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Directive::NoObj
            | Directive::NoImplicitRule
            | Directive::BeforeDepend
            | Directive::Local => Arity::Flag,
            Directive::CompileWith
            | Directive::Dependency
            | Directive::Clean
            | Directive::Warning
            | Directive::ObjPrefix => Arity::Arg,
        }
    }
}

/// Value recorded for a directive: flags carry no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    Set,
    Arg(String),
}

/// One parsed record of a file-list manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: String,
    pub requirement: Requirement,
    /// Inserting twice overwrites (last write wins); iteration follows
    /// the fixed output order.
    pub directives: BTreeMap<Directive, DirectiveValue>,
}

/// One line of an option manifest: option name plus optional header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    pub option: String,
    pub header: Option<String>,
}

/// A kernel-config value: bare term or `name = value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfValue {
    Term(String),
    Pair(String, String),
}

/// Accumulated kernel configuration.
#[derive(Debug, Default)]
pub struct KernConfDoc {
    /// Names emitted as `.include <name>.ucl` before the config object.
    pub includes: Vec<String>,
    /// Keyword -> accumulated values, in first-appearance key order.
    pub settings: Vec<(String, Vec<ConfValue>)>,
}

impl KernConfDoc {
    /// Accumulate a value under `key`, appending the key to the order
    /// on first appearance.
    pub fn push(&mut self, key: &str, value: ConfValue) {
        match self.settings.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.settings.push((key.to_string(), vec![value])),
        }
    }
}
