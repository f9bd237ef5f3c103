mod common;

use std::fs;

use serde_json::Value;

fn seed_examples(root: &std::path::Path) {
    common::write_file(
        root,
        "registry/examples/intro.tsx",
        "/** @tags getting-started */\nexport default function Intro() {}\n",
    );
    common::write_file(
        root,
        "registry/examples/button/primary.tsx",
        "/** @tags button, action */\nexport default function Primary() {}\n",
    );
    common::write_file(
        root,
        "registry/examples/button/disabled.tsx",
        "export default function Disabled() {}\n",
    );
    common::write_file(
        root,
        "registry/examples/dialog/form.tsx",
        "/** @tags */\nexport default function Form() {}\n",
    );
    common::write_file(root, "registry/examples/dialog/_utils.tsx", "");
    common::write_file(root, "registry/examples/_drafts/wip.tsx", "");
    common::write_file(root, "registry/examples/dialog/notes.mdx", "");
}

#[test]
fn index_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    seed_examples(dir.path());

    let output = common::run_in(dir.path(), &["index"]);
    assert!(output.status.success(), "{}", common::stderr(&output));
    assert!(common::stderr(&output).contains("Indexed 4 examples in 3 groups"));

    let json = fs::read_to_string(dir.path().join("public/examples-index.json")).unwrap();
    let index: Value = serde_json::from_str(&json).unwrap();

    let groups: Vec<_> = index.as_object().unwrap().keys().cloned().collect();
    assert_eq!(groups, vec!["button", "dialog", "root"]);

    assert_eq!(index["button"][0]["name"], "disabled");
    assert_eq!(index["button"][0]["tags"], serde_json::json!([]));
    assert_eq!(index["button"][1]["name"], "primary");
    assert_eq!(index["button"][1]["filePath"], "button/primary.tsx");
    assert_eq!(index["button"][1]["tags"], serde_json::json!(["button", "action"]));
    assert_eq!(index["dialog"].as_array().unwrap().len(), 1);
    assert_eq!(index["dialog"][0]["tags"], serde_json::json!([]));
    assert_eq!(index["root"][0]["tags"], serde_json::json!(["getting-started"]));

    assert!(!json.contains("_utils"));
    assert!(!json.contains("wip"));
    assert!(json.starts_with("{\n  \""));
}

#[test]
fn index_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    seed_examples(dir.path());

    let output = common::run_in(dir.path(), &["index", "--format", "json"]);
    assert!(output.status.success());

    let summary: Value = serde_json::from_str(&common::stdout(&output)).unwrap();
    assert_eq!(summary["entries"], 4);
    assert_eq!(summary["groups"], 3);
}

#[test]
fn index_flags_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(dir.path(), "demos/card/basic.tsx", "");

    let output = common::run_in(
        dir.path(),
        &["index", "--root", "demos", "--output", "out/idx.json", "-q"],
    );
    assert!(output.status.success(), "{}", common::stderr(&output));
    assert!(common::stderr(&output).is_empty());
    assert!(dir.path().join("out/idx.json").exists());
}

#[test]
fn index_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(
        dir.path(),
        "site/storydoc.yaml",
        "index:\n  root: demos\n  output: gen/index.json\n  default_group: top\n",
    );
    common::write_file(dir.path(), "site/demos/hello.tsx", "");

    let output = common::run_in(dir.path(), &["--config", "site/storydoc.yaml", "index"]);
    assert!(output.status.success(), "{}", common::stderr(&output));

    let json = fs::read_to_string(dir.path().join("site/gen/index.json")).unwrap();
    let index: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(index["top"][0]["name"], "hello");
}

#[test]
fn index_missing_root_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(dir.path(), "public/examples-index.json", "{\"keep\": []}\n");

    let output = common::run_in(dir.path(), &["index"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    assert!(common::stderr(&output).contains("registry/examples"));

    let json = fs::read_to_string(dir.path().join("public/examples-index.json")).unwrap();
    assert_eq!(json, "{\"keep\": []}\n", "existing index must be left untouched");
}

#[test]
fn index_empty_root_writes_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("registry/examples")).unwrap();

    let output = common::run_in(dir.path(), &["index"]);
    assert!(output.status.success());

    let json = fs::read_to_string(dir.path().join("public/examples-index.json")).unwrap();
    assert_eq!(json.trim(), "{}");
}
