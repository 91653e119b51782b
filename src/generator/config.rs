//! Generation settings
//!
//! Everything here is optional: the defaults reproduce the stock header.

use dag_core::scaffold::DEFAULT_MINIMUM_CAPACITY;

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Default growth chunk emitted for `DA_MINIMUM_CAPACITY`
    pub min_capacity: usize,
    /// Extra include directives, emitted after the foundational ones
    pub includes: Vec<Include>,
    /// Number of spaces per indentation level inside the struct definition
    pub indent_width: usize,
}

/// A caller-supplied include directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// `#include <...>`; the path keeps its angle brackets
    System(String),
    /// `#include "..."`
    Local(String),
}

impl Include {
    /// Classify a raw include path: a leading `<` selects the system form.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with('<') {
            Include::System(raw.to_string())
        } else {
            Include::Local(raw.to_string())
        }
    }

    /// The path as it was supplied.
    pub fn path(&self) -> &str {
        match self {
            Include::System(p) | Include::Local(p) => p,
        }
    }

    /// The complete preprocessor line, without newline.
    pub fn directive(&self) -> String {
        match self {
            Include::System(p) => format!("#include {}", p),
            Include::Local(p) => format!("#include \"{}\"", p),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MINIMUM_CAPACITY,
            includes: Vec::new(),
            indent_width: 4,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default growth chunk
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Append one include directive
    pub fn with_include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    /// Append raw include paths, classifying each with [`Include::parse`]
    pub fn with_include_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .fold(self, |config, p| config.with_include(Include::parse(p.as_ref())))
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
