//! Renderer module — trait-based target dispatch.

pub mod java;

use crate::model::GenerationOptions;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Trait for rendering parsed options into one source file.
pub trait Renderer {
    fn render(&self, options: &GenerationOptions) -> String;
    fn file_extension(&self) -> &str;

    /// `<package dirs>/<ClassName>.<ext>`, relative to the output root.
    /// `None` when the line never named a class.
    fn output_path(&self, options: &GenerationOptions) -> Option<PathBuf> {
        let class_name = options.class_name.as_deref()?;
        Some(
            options
                .package_dir()
                .join(format!("{}.{}", class_name, self.file_extension())),
        )
    }
}

/// Create a renderer for the given target name.
pub fn create_renderer(target: &str) -> Result<Box<dyn Renderer>> {
    match target {
        "java" => Ok(Box::new(java::JavaRenderer)),
        _ => Err(anyhow!("unknown target: {}. Use java", target)),
    }
}
