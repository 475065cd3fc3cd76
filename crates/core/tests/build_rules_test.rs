//! Rule parsing driven by real build-file snippets

use buildrules_core::{
    BuildTarget, Error, Glob, RuleParser, RuleRegistry, Sources, make_fallback_parser, parse_call,
    parse_python_binary, parse_python_library, parse_python_unittest,
};
use std::path::Path;

const PYTHON_BINARY_TARGET_1: &str = r#"
python_binary(
    name = "binary_target_1",
    main_module = "some.project.main",
    deps = [":another_target", "//some/other" + ":target"]
)
"#;

const PYTHON_BINARY_TARGET_2: &str = r#"
python_binary(
    name = "binary_target_2",
    deps = [],
    srcs = ["a.py"],
)
"#;

const PYTHON_BINARY_TARGET_3: &str = r#"
python_binary(
    name = 1234,
)
"#;

const PYTHON_LIBRARY_TARGET_1: &str = r#"
python_library(
    name = "library_target_1",
    srcs = ["a.py", "b.py"],
    deps = [":other_target"],
)
"#;

const PYTHON_LIBRARY_TARGET_2: &str = r#"
python_library(
    name = "library_target_2",
    base_module = "a.b.c",
    srcs = glob(["folder/*.py", "other/**/*.py"], exclude=["other/exclude/**.py"]),
)
"#;

const PYTHON_LIBRARY_TARGET_3: &str = r#"
python_library(
    name = "library_target_3",
    srcs = ["a.py", "b.py"] + glob(["folder/*.py", "other/**/*.py"]),
)
"#;

const PYTHON_UNIT_TEST_TARGET: &str = r#"
python_unittest(
    name = "test_target",
    srcs = glob(["tests/*.py"]),
    deps = [":library_target_1"],
)
"#;

const NON_PYTHON_TARGET: &str = r#"
non_python(
    name = "non_python_target",
    field = 1234,
    other_field = "abc",
    deps = [":other_target"],
)
"#;

const ROOT: &str = "/ROOT";
const PROJECT: &str = "some/project";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn assert_sources_equal(sources: &Sources, files: &[&str], globs: Vec<Glob>) {
    assert_eq!(sources.files, strings(files));
    assert_eq!(sources.globs, globs);
}

#[test]
fn test_python_binary() {
    let call = parse_call(PYTHON_BINARY_TARGET_1).unwrap();
    let target = parse_python_binary(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:binary_target_1");
    assert_eq!(target.name, "binary_target_1");
    assert_eq!(
        target.dependencies,
        strings(&["//some/project:another_target", "//some/other:target"])
    );
    assert_sources_equal(&target.sources, &[], vec![]);
    assert_eq!(target.base_module, None);

    let call = parse_call(PYTHON_BINARY_TARGET_2).unwrap();
    let target = parse_python_binary(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:binary_target_2");
    assert_eq!(target.name, "binary_target_2");
    assert!(target.dependencies.is_empty());
    assert_sources_equal(&target.sources, &["a.py"], vec![]);
    assert_eq!(target.base_module, None);

    let call = parse_call(PYTHON_BINARY_TARGET_3).unwrap();
    let err = parse_python_binary(&call, Path::new(ROOT), PROJECT).unwrap_err();
    assert!(matches!(err, Error::InvalidTargetName(_)));
}

#[test]
fn test_python_library() {
    let call = parse_call(PYTHON_LIBRARY_TARGET_1).unwrap();
    let target = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:library_target_1");
    assert_eq!(target.name, "library_target_1");
    assert_eq!(target.base_module, None);
    assert_sources_equal(&target.sources, &["a.py", "b.py"], vec![]);
    assert_eq!(target.dependencies, strings(&["//some/project:other_target"]));

    let call = parse_call(PYTHON_LIBRARY_TARGET_2).unwrap();
    let target = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:library_target_2");
    assert_eq!(target.base_module.as_deref(), Some("a.b.c"));
    assert_sources_equal(
        &target.sources,
        &[],
        vec![Glob::new(
            strings(&["folder/*.py", "other/**/*.py"]),
            strings(&["other/exclude/**.py"]),
        )],
    );
    assert!(target.dependencies.is_empty());

    let call = parse_call(PYTHON_LIBRARY_TARGET_3).unwrap();
    let target = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:library_target_3");
    assert_eq!(target.base_module, None);
    assert_sources_equal(
        &target.sources,
        &["a.py", "b.py"],
        vec![Glob::new(strings(&["folder/*.py", "other/**/*.py"]), vec![])],
    );
    assert!(target.dependencies.is_empty());
}

#[test]
fn test_python_unittest() {
    let call = parse_call(PYTHON_UNIT_TEST_TARGET).unwrap();
    let target = parse_python_unittest(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:test_target");
    assert_eq!(target.name, "test_target");
    assert_sources_equal(&target.sources, &[], vec![Glob::new(strings(&["tests/*.py"]), vec![])]);
    assert_eq!(target.dependencies, strings(&["//some/project:library_target_1"]));
    assert_eq!(target.base_module, None);
}

#[test]
fn test_non_python_target() {
    let call = parse_call(NON_PYTHON_TARGET).unwrap();
    let target = make_fallback_parser("non_python")
        .parse(&call, Path::new(ROOT), PROJECT)
        .unwrap();

    assert_eq!(
        target,
        BuildTarget {
            name: "non_python_target".to_string(),
            target: "//some/project:non_python_target".to_string(),
            dependencies: strings(&["//some/project:other_target"]),
            sources: Sources::default(),
            base_module: None,
        }
    );
}

#[test]
fn test_dispatch_matches_direct_parsers() {
    let registry = RuleRegistry::new();

    for source in [
        PYTHON_BINARY_TARGET_1,
        PYTHON_LIBRARY_TARGET_2,
        PYTHON_UNIT_TEST_TARGET,
    ] {
        let call = parse_call(source).unwrap();
        let direct = match call.function_name() {
            Some("python_binary") => parse_python_binary(&call, Path::new(ROOT), PROJECT),
            Some("python_library") => parse_python_library(&call, Path::new(ROOT), PROJECT),
            _ => parse_python_unittest(&call, Path::new(ROOT), PROJECT),
        }
        .unwrap();

        assert_eq!(
            registry.parse_call(&call, Path::new(ROOT), PROJECT).unwrap(),
            direct
        );
    }
}

#[test]
fn test_reparsing_is_idempotent() {
    let call = parse_call(PYTHON_LIBRARY_TARGET_3).unwrap();
    let first = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    let second = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unsupported_srcs() {
    for srcs in [
        r#"{"a": "a.py"}"#,
        r#"select({"DEFAULT": ["a.py"]})"#,
        r#"["a.py"] * 2"#,
        r#""a.py""#,
        "SRCS",
        "[f for f in FILES]",
    ] {
        let source = format!("python_library(name = \"lib\", srcs = {srcs})\n");
        let call = parse_call(&source).unwrap();
        let err = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedExpression(_)),
            "expected UnsupportedExpression for {srcs}, got {err}"
        );
    }
}

#[test]
fn test_invalid_dependency_label() {
    let call = parse_call("python_library(name = \"lib\", deps = [\"other:target\"])\n").unwrap();
    let err = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap_err();
    assert!(matches!(err, Error::InvalidDependencyLabel(ref label) if label == "other:target"));
}

#[test]
fn test_signed_number_name() {
    let call = parse_call("python_binary(name = -1)\n").unwrap();
    let err = parse_python_binary(&call, Path::new(ROOT), PROJECT).unwrap_err();
    assert!(matches!(err, Error::InvalidTargetName(_)));
}

#[test]
fn test_escaped_name() {
    let call = parse_call("python_library(name = \"a\\u00e9\\x41\")\n").unwrap();
    let target = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_eq!(target.target, "//some/project:a\u{e9}A");

    let call = parse_call("python_library(name = \"\\ud800\")\n").unwrap();
    let err = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap_err();
    assert!(matches!(err, Error::UnsupportedExpression(_)));
}

#[test]
fn test_missing_name() {
    let call = parse_call("python_unittest(srcs = [\"t.py\"])\n").unwrap();
    let err = parse_python_unittest(&call, Path::new(ROOT), PROJECT).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField(ref field) if field == "name"));
}

#[test]
fn test_mixed_chain_of_lists_and_globs() {
    let call = parse_call(
        r#"
python_library(
    name = "chained",
    srcs = glob(["x/*.py"]) + ["a.py"] + glob(["y/*.py"], exclude = ["y/skip.py"]) + ["b.py"],
)
"#,
    )
    .unwrap();

    let target = parse_python_library(&call, Path::new(ROOT), PROJECT).unwrap();
    assert_sources_equal(
        &target.sources,
        &["a.py", "b.py"],
        vec![
            Glob::new(strings(&["x/*.py"]), vec![]),
            Glob::new(strings(&["y/*.py"]), strings(&["y/skip.py"])),
        ],
    );
}
