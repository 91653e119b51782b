//! Array generator: drives the template engine over the operation catalogue.
//!
//! `ArrayGenerator` owns one binding environment and one configuration, and emits a complete single-file C header:
//!
//! ```text
//! guard open → includes → growth constant → struct → declarations → guard close
//!            → implementation guard open → definitions (+ default comparator) → implementation guard close
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dag::generator::{ArrayGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new().with_include_paths(["<stdbool.h>"]);
//! let header = ArrayGenerator::with_config("ints", "int", config)?.generate();
//! assert!(header.starts_with("#ifndef INTS_H\n"));
//! assert!(header.contains("void ints_push(Ints *ints, int value);\n"));
//! # Ok::<(), dag::generator::GenerateError>(())
//! ```
//!
//! ## Error Handling
//!
//! Inputs are validated by the constructors. Once an `ArrayGenerator` exists, [`ArrayGenerator::generate`] cannot
//! fail, so callers can render the whole header before touching any output destination.

pub mod config;
pub mod errors;
pub mod writer;

pub use config::{GeneratorConfig, Include};
pub use errors::GenerateError;
pub use writer::HeaderWriter;

use dag_core::operations::{self, OperationGroup, OPERATIONS};
use dag_core::scaffold;

use crate::template::{Bindings, render_body, render_declaration, render_definition};

/// Generates one type-specialized dynamic array header.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    bindings: Bindings,
    config: GeneratorConfig,
}

impl ArrayGenerator {
    /// Create a generator with the default configuration.
    pub fn new(ident: &str, value: &str) -> Result<Self, GenerateError> {
        Self::with_config(ident, value, GeneratorConfig::default())
    }

    /// Create a generator for `ident` (array base name) holding elements of type `value`.
    ///
    /// ## Errors
    ///
    /// - [`GenerateError::EmptyName`] if either name is empty
    /// - [`GenerateError::ZeroCapacity`] if `config.min_capacity` is zero
    /// - [`GenerateError::EmptyInclude`] if an include path is empty
    pub fn with_config(ident: &str, value: &str, config: GeneratorConfig) -> Result<Self, GenerateError> {
        if ident.is_empty() {
            return Err(GenerateError::EmptyName { what: "array name" });
        }
        if value.is_empty() {
            return Err(GenerateError::EmptyName { what: "value type" });
        }
        if config.min_capacity == 0 {
            return Err(GenerateError::ZeroCapacity);
        }
        if config.includes.iter().any(|inc| inc.path().is_empty()) {
            return Err(GenerateError::EmptyInclude);
        }

        if !is_c_identifier(ident) {
            tracing::warn!("array name '{}' is not a plain C identifier; the header may not compile", ident);
        }

        let bindings = Bindings::derive(ident, value);
        tracing::debug!(
            ident = bindings.ident(),
            array = bindings.array(),
            guard = bindings.guard(),
            value = bindings.value(),
            "resolved bindings"
        );

        Ok(Self { bindings, config })
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render the complete header.
    #[tracing::instrument(skip_all, fields(ident = self.bindings.ident(), value = self.bindings.value()))]
    pub fn generate(&self) -> String {
        let mut w = HeaderWriter::new(self.config.indent_width);

        w.write(&self.render(scaffold::HEADER_GUARD_OPEN));
        self.emit_includes(&mut w);
        self.emit_capacity(&mut w);
        self.emit_struct(&mut w);
        self.emit_declarations(&mut w);
        w.write(&self.render(scaffold::HEADER_GUARD_CLOSE));

        w.write(&self.render(scaffold::IMPL_GUARD_OPEN));
        self.emit_definitions(&mut w);
        w.write(&self.render(scaffold::IMPL_GUARD_CLOSE));

        w.finish()
    }

    fn render(&self, template: &str) -> String {
        render_body(template, &self.bindings)
    }

    fn emit_includes(&self, w: &mut HeaderWriter) {
        for header in scaffold::FOUNDATION_INCLUDES {
            w.writeln(&format!("#include <{}>", header));
        }
        w.blank_lines(1);

        for include in &self.config.includes {
            w.writeln(&include.directive());
        }
        if !self.config.includes.is_empty() {
            w.newline();
        }
    }

    /// Growth chunk, overridable by defining the macro before inclusion.
    fn emit_capacity(&self, w: &mut HeaderWriter) {
        let name = scaffold::MINIMUM_CAPACITY_MACRO;
        w.writeln(&format!("#ifndef {}", name));
        w.writeln(&format!("#define {} {}", name, self.config.min_capacity));
        w.writeln(&format!("#endif // {}", name));
        w.newline();
    }

    fn emit_struct(&self, w: &mut HeaderWriter) {
        w.writeln("typedef struct {");
        w.indent();
        for (ty, name) in scaffold::STRUCT_FIELDS {
            w.writeln(&format!("{} {};", self.render(ty), name));
        }
        w.dedent();
        w.writeln(&format!("}} {};", self.bindings.array()));
    }

    /// Public declarations, one blank line before each group.
    fn emit_declarations(&self, w: &mut HeaderWriter) {
        let mut group = None;
        for op in operations::public() {
            if group != Some(op.group) {
                w.newline();
                group = Some(op.group);
            }
            tracing::trace!(operation = op.name, "declaration");
            w.write(&render_declaration(&self.bindings, op));
        }
    }

    /// All definitions in catalogue order; the default comparator follows the lifecycle group.
    fn emit_definitions(&self, w: &mut HeaderWriter) {
        let mut comparator_pending = true;
        for op in OPERATIONS {
            if comparator_pending && op.group != OperationGroup::Lifecycle {
                w.write(&self.render(scaffold::DEFAULT_COMPARE));
                comparator_pending = false;
            }
            tracing::trace!(operation = op.name, "definition");
            w.write(&render_definition(&self.bindings, op));
        }
        if comparator_pending {
            w.write(&self.render(scaffold::DEFAULT_COMPARE));
        }
    }
}

/// Check for `[A-Za-z_][A-Za-z0-9_]*`.
fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
