//! Single-category extractors.
//!
//! Each extractor looks for at most one occurrence of its token, records what
//! it found in [`GenerationOptions`], and returns the line with that token cut
//! out. `None` means the line is untouched. Tokens after the class name are
//! cut together with their leading space; the delimiter that follows stays.

use crate::model::{GenerationOptions, MethodSpec, Parameter};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Placeholder the package extractor leaves where the class name starts.
pub const CLASS_MARKER: &str = "%classname%=";

// -- Regex patterns -----------------------------------------------------------

static RE_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9]+\.)+").unwrap());

static RE_BARE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:\s|$)").unwrap());

static RE_CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({}([A-Za-z0-9]+))(?:\s|$)",
        regex::escape(CLASS_MARKER)
    ))
    .unwrap()
});

// ` [public |private |protected ][static ]Ret name(Type name, ...)`
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"( (?P<signature>(?:(?:public|private|protected) )?(?:static )?",
        r"(?P<ret>[A-Za-z0-9]+) [A-Za-z0-9]+",
        r"\((?P<params>(?:[A-Za-z0-9]+ +[A-Za-z0-9]+(?:, +)?)*)\)))",
        r"(?:\s|$)"
    ))
    .unwrap()
});

static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"( (?P<ty>[A-Za-z0-9]+)=(?P<name>[A-Za-z0-9]+))(?:\s|$)").unwrap()
});

static RE_NODOC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"( nodoc)(?:\s|$)").unwrap());

static RE_NOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"( nomain)(?:\s|$)").unwrap());

// -- Extractors ---------------------------------------------------------------

/// Leading `a.b.c.` package prefix.
///
/// The prefix is replaced by [`CLASS_MARKER`] so the class-name extractor can
/// find the name that follows. A line opening with a lone `.` gets the marker
/// in place of the dot, and a bare leading name gets it prepended while no
/// class name is known yet.
pub fn package(line: &str, options: &mut GenerationOptions) -> Option<String> {
    if let Some(m) = RE_PACKAGE.find(line) {
        options.package_path.extend(
            m.as_str()
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(String::from),
        );
        return Some(format!("{}{}", CLASS_MARKER, &line[m.end()..]));
    }

    if let Some(rest) = line.strip_prefix('.') {
        return Some(format!("{}{}", CLASS_MARKER, rest));
    }

    if options.class_name.is_none() && RE_BARE_CLASS.is_match(line) {
        return Some(format!("{}{}", CLASS_MARKER, line));
    }

    None
}

/// Marker followed by the class name.
pub fn class_name(line: &str, options: &mut GenerationOptions) -> Option<String> {
    let caps = RE_CLASS_NAME.captures(line)?;
    options.class_name = Some(caps[2].to_string());
    cut(line, &caps)
}

/// One method signature, anywhere in the line.
pub fn method(line: &str, options: &mut GenerationOptions) -> Option<String> {
    let caps = RE_METHOD.captures(line)?;
    options.methods.push(MethodSpec {
        signature: caps["signature"].trim_start().to_string(),
        return_type: caps["ret"].to_string(),
        parameters: parse_parameters(&caps["params"]),
    });
    cut(line, &caps)
}

/// One `type=name` token, stored as the declaration `type name;`.
pub fn field(line: &str, options: &mut GenerationOptions) -> Option<String> {
    let caps = RE_FIELD.captures(line)?;
    options
        .fields
        .push(format!("{} {};", &caps["ty"], &caps["name"]));
    cut(line, &caps)
}

/// `nodoc` disables javadoc blocks.
pub fn doc_flag(line: &str, options: &mut GenerationOptions) -> Option<String> {
    let caps = RE_NODOC.captures(line)?;
    options.emit_doc_comments = false;
    cut(line, &caps)
}

/// `nomain` disables the `main` stub.
pub fn entry_point_flag(line: &str, options: &mut GenerationOptions) -> Option<String> {
    let caps = RE_NOMAIN.captures(line)?;
    options.emit_entry_point = false;
    cut(line, &caps)
}

// -- Helpers ------------------------------------------------------------------

/// Split `int a, String b` into `(type, name)` pairs in declaration order.
pub fn parse_parameters(list: &str) -> Vec<Parameter> {
    let tokens: Vec<&str> = list
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    tokens
        .chunks_exact(2)
        .map(|pair| Parameter {
            ty: pair[0].to_string(),
            name: pair[1].to_string(),
        })
        .collect()
}

/// Remove capture group 1 from the line.
fn cut(line: &str, caps: &Captures) -> Option<String> {
    let token = caps.get(1)?;
    let mut rest = String::with_capacity(line.len() - token.len());
    rest.push_str(&line[..token.start()]);
    rest.push_str(&line[token.end()..]);
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        extract: fn(&str, &mut GenerationOptions) -> Option<String>,
        line: &str,
    ) -> (Option<String>, GenerationOptions) {
        let mut options = GenerationOptions::default();
        let rest = extract(line, &mut options);
        (rest, options)
    }

    // -- package --

    #[test]
    fn package_prefix_becomes_marker() {
        let (rest, options) = run(package, "pl.agh.Test nodoc");
        assert_eq!(rest.as_deref(), Some("%classname%=Test nodoc"));
        assert_eq!(options.package_path, vec!["pl", "agh"]);
    }

    #[test]
    fn leading_dot_becomes_marker() {
        let (rest, options) = run(package, ".Foo void run()");
        assert_eq!(rest.as_deref(), Some("%classname%=Foo void run()"));
        assert!(options.package_path.is_empty());
    }

    #[test]
    fn bare_class_name_gets_marker() {
        let (rest, options) = run(package, "A void go()");
        assert_eq!(rest.as_deref(), Some("%classname%=A void go()"));
        assert!(options.package_path.is_empty());
    }

    #[test]
    fn bare_name_ignored_once_class_is_known() {
        let mut options = GenerationOptions {
            class_name: Some("A".into()),
            ..Default::default()
        };
        assert_eq!(package("B", &mut options), None);
    }

    #[test]
    fn other_leading_punctuation_is_untouched() {
        assert_eq!(run(package, "-Foo").0, None);
        assert_eq!(run(package, " Foo").0, None);
        assert_eq!(run(package, "Foo-bar").0, None);
    }

    // -- class name --

    #[test]
    fn class_name_follows_marker() {
        let (rest, options) = run(class_name, "%classname%=Test int=x");
        assert_eq!(rest.as_deref(), Some(" int=x"));
        assert_eq!(options.class_name.as_deref(), Some("Test"));
    }

    #[test]
    fn class_name_needs_marker() {
        assert_eq!(run(class_name, "Test int=x").0, None);
    }

    #[test]
    fn class_name_must_end_at_whitespace() {
        let (rest, options) = run(class_name, "%classname%=Foo.bar");
        assert_eq!(rest, None);
        assert!(options.class_name.is_none());
    }

    // -- method --

    #[test]
    fn method_with_modifiers() {
        let (rest, options) = run(method, " public static void dsf() int=x");
        assert_eq!(rest.as_deref(), Some(" int=x"));
        let m = &options.methods[0];
        assert_eq!(m.signature, "public static void dsf()");
        assert_eq!(m.return_type, "void");
        assert!(m.parameters.is_empty());
    }

    #[test]
    fn method_without_modifiers() {
        let (rest, options) = run(method, " int sum(int a, int b)");
        assert_eq!(rest.as_deref(), Some(""));
        let m = &options.methods[0];
        assert_eq!(m.signature, "int sum(int a, int b)");
        assert_eq!(m.return_type, "int");
        assert_eq!(m.parameter_list(), "int a, int b");
    }

    #[test]
    fn method_takes_only_the_first_occurrence() {
        let (rest, options) = run(method, " void a() void b()");
        assert_eq!(rest.as_deref(), Some(" void b()"));
        assert_eq!(options.methods.len(), 1);
        assert_eq!(options.methods[0].signature, "void a()");
    }

    #[test]
    fn private_static_method() {
        let (_, options) = run(method, " private static String name(int id)");
        let m = &options.methods[0];
        assert_eq!(m.return_type, "String");
        assert_eq!(m.signature, "private static String name(int id)");
    }

    #[test]
    fn method_glued_to_other_text_is_rejected() {
        assert_eq!(run(method, " void a()b").0, None);
        assert_eq!(run(method, "void a()").0, None);
    }

    // -- field --

    #[test]
    fn field_becomes_declaration() {
        let (rest, options) = run(field, " int=x boolean=y");
        assert_eq!(rest.as_deref(), Some(" boolean=y"));
        assert_eq!(options.fields, vec!["int x;"]);
    }

    #[test]
    fn field_must_be_whole_token() {
        assert_eq!(run(field, " int=x=y").0, None);
    }

    // -- flags --

    #[test]
    fn nodoc_clears_only_doc_flag() {
        let (rest, options) = run(doc_flag, " nodoc nomain");
        assert_eq!(rest.as_deref(), Some(" nomain"));
        assert!(!options.emit_doc_comments);
        assert!(options.emit_entry_point);
    }

    #[test]
    fn nomain_clears_only_entry_point_flag() {
        let (rest, options) = run(entry_point_flag, " nodoc nomain");
        assert_eq!(rest.as_deref(), Some(" nodoc"));
        assert!(options.emit_doc_comments);
        assert!(!options.emit_entry_point);
    }

    #[test]
    fn flags_are_whole_tokens() {
        assert_eq!(run(doc_flag, " nodocs").0, None);
        assert_eq!(run(entry_point_flag, " nomainly").0, None);
    }

    // -- parameters --

    #[test]
    fn parameters_pair_type_then_name() {
        let params = parse_parameters("int x, String  name");
        assert_eq!(
            params,
            vec![
                Parameter { ty: "int".into(), name: "x".into() },
                Parameter { ty: "String".into(), name: "name".into() },
            ]
        );
    }

    #[test]
    fn empty_parameter_list() {
        assert!(parse_parameters("").is_empty());
    }
}
