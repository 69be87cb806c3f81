//! Java class skeleton renderer.

use crate::model::{GenerationOptions, MethodSpec};
use crate::render::Renderer;

pub struct JavaRenderer;

const INDENT: &str = "\t";
const EMPTY_BODY: &str = "\t{\n\n\t}\n";
const ENTRY_POINT: &str = "public static void main(String[] args)";

impl Renderer for JavaRenderer {
    fn render(&self, options: &GenerationOptions) -> String {
        let mut output = String::new();
        let docs = options.emit_doc_comments;

        if !options.package_path.is_empty() {
            output.push_str(&format!("package {};\n\n", options.package_name()));
        }

        if docs {
            output.push_str(&doc_block("", &[]));
        }
        output.push_str(&format!(
            "class {}\n{{\n",
            options.class_name.as_deref().unwrap_or_default()
        ));

        for field in &options.fields {
            if docs {
                output.push_str(&doc_block(INDENT, &[]));
            }
            output.push_str(&format!("{}{}\n", INDENT, field));
        }

        for method in &options.methods {
            output.push('\n');
            if docs {
                output.push_str(&doc_block(INDENT, &method_tags(method)));
            }
            output.push_str(&format!("{}{}\n", INDENT, method.signature));
            output.push_str(EMPTY_BODY);
        }

        if options.emit_entry_point {
            output.push('\n');
            if docs {
                output.push_str(&doc_block(
                    INDENT,
                    &[
                        "Main method of the program".to_string(),
                        "@param args Command line arguments".to_string(),
                    ],
                ));
            }
            output.push_str(&format!("{}{}\n", INDENT, ENTRY_POINT));
            output.push_str(EMPTY_BODY);
        }

        output.push_str("}\n");
        output
    }

    fn file_extension(&self) -> &str {
        "java"
    }
}

/// `@param` per parameter in order, then `@return` unless the method is void.
fn method_tags(method: &MethodSpec) -> Vec<String> {
    let mut tags: Vec<String> = method
        .parameters
        .iter()
        .map(|p| format!("@param {}", p.name))
        .collect();
    if method.returns_value() {
        tags.push(format!("@return {}", method.return_type));
    }
    tags
}

/// Javadoc block. An empty body still gets one blank ` *` line.
fn doc_block(indent: &str, lines: &[String]) -> String {
    let mut block = format!("{indent}/**\n");
    if lines.first().map_or(true, |l| l.starts_with('@')) {
        block.push_str(&format!("{indent} *\n"));
    }
    for line in lines {
        block.push_str(&format!("{indent} * {line}\n"));
    }
    block.push_str(&format!("{indent} */\n"));
    block
}
