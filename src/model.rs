//! Data model for one parsed class description — target-agnostic.

use std::fmt;
use std::path::PathBuf;

/// Everything extracted from a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub class_name: Option<String>,
    /// Package segments in declaration order, e.g. `["pl", "agh"]`
    pub package_path: Vec<String>,
    /// Cleared by `nodoc`
    pub emit_doc_comments: bool,
    /// Cleared by `nomain`
    pub emit_entry_point: bool,
    pub methods: Vec<MethodSpec>,
    /// Pre-rendered, terminated declarations such as `int x;`
    pub fields: Vec<String>,
    /// Text no extractor consumed. Only set once the pipeline is stable.
    pub residue: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            class_name: None,
            package_path: Vec::new(),
            emit_doc_comments: true,
            emit_entry_point: true,
            methods: Vec::new(),
            fields: Vec::new(),
            residue: String::new(),
        }
    }
}

impl GenerationOptions {
    /// Directory the generated file belongs in, relative to the output root.
    /// Empty when the class has no package.
    pub fn package_dir(&self) -> PathBuf {
        self.package_path.iter().collect()
    }

    /// Dotted package name, e.g. `pl.agh`.
    pub fn package_name(&self) -> String {
        self.package_path.join(".")
    }

    pub fn has_residue(&self) -> bool {
        !self.residue.is_empty()
    }
}

/// One parsed method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Signature as written, e.g. `public static void run(int x)`
    pub signature: String,
    /// `void` suppresses the `@return` doc line
    pub return_type: String,
    pub parameters: Vec<Parameter>,
}

impl MethodSpec {
    pub fn returns_value(&self) -> bool {
        self.return_type != "void"
    }

    /// Parameter list in source form: `int x, String name`.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A `(type, name)` pair from a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Inspection dump printed after generation.
impl fmt::Display for GenerationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class:   {}", self.class_name.as_deref().unwrap_or("<none>"))?;
        writeln!(f, "package: [{}]", self.package_path.join(", "))?;
        writeln!(f, "javadoc: {}", self.emit_doc_comments)?;
        writeln!(f, "main:    {}", self.emit_entry_point)?;
        for method in &self.methods {
            writeln!(
                f,
                "method:  {} -> {} [{}]",
                method.signature,
                method.return_type,
                method.parameter_list()
            )?;
        }
        for field in &self.fields {
            writeln!(f, "field:   {}", field)?;
        }
        if self.has_residue() {
            writeln!(f, "residue: {:?}", self.residue)?;
        }
        Ok(())
    }
}
