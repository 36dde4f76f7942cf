use std::fs;
use std::path::Path;
use std::process::Command;

use pubkit_publish::{C_ENTRY_POINT_TEMPLATE, SpecPublishConfig, prepare_publish};
use tempfile::TempDir;

fn write_text(path: &Path, txt: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, txt).expect("write text");
}

fn read_text(path: &Path) -> String {
    fs::read_to_string(path).expect("read text")
}

#[test]
fn fresh_publish_directory_gets_build_and_template() {
    let tmp = TempDir::new().expect("tempdir");
    let dir_dist = tmp.path().join("src/gui/dist");
    write_text(&dir_dist.join("a.txt"), "hi");
    write_text(&dir_dist.join("sub/b.txt"), "bye");

    prepare_publish(&SpecPublishConfig::from_project_root(tmp.path())).expect("publish");

    let dir_public = tmp.path().join("public");
    assert_eq!(read_text(&dir_public.join("a.txt")), "hi");
    assert_eq!(read_text(&dir_public.join("sub/b.txt")), "bye");
    assert_eq!(read_text(&dir_public.join("index.html")), C_ENTRY_POINT_TEMPLATE);
}

#[test]
fn custom_index_survives_repeated_runs() {
    let tmp = TempDir::new().expect("tempdir");
    write_text(&tmp.path().join("src/gui/dist/a.txt"), "hi");
    write_text(&tmp.path().join("public/index.html"), "custom");
    let spec_publish_conf = SpecPublishConfig::from_project_root(tmp.path());

    prepare_publish(&spec_publish_conf).expect("first run");
    prepare_publish(&spec_publish_conf).expect("second run");

    assert_eq!(read_text(&tmp.path().join("public/index.html")), "custom");
    assert_eq!(read_text(&tmp.path().join("public/a.txt")), "hi");
}

#[test]
fn binary_fails_without_build_output() {
    let tmp = TempDir::new().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_pubkit"))
        .arg("--project-root")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run pubkit");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Run the build first"), "stderr: {stderr}");
    assert!(!tmp.path().join("public").exists());
}

#[test]
fn binary_publishes_with_template_override() {
    let tmp = TempDir::new().expect("tempdir");
    write_text(&tmp.path().join("src/gui/dist/gui.js"), "function gui() {}");
    let path_template = tmp.path().join("index.tpl.html");
    write_text(&path_template, "<p>tpl</p>");

    let status = Command::new(env!("CARGO_BIN_EXE_pubkit"))
        .arg("--project-root")
        .arg(tmp.path())
        .arg("--template")
        .arg(&path_template)
        .status()
        .expect("run pubkit");

    assert!(status.success());
    assert_eq!(read_text(&tmp.path().join("public/gui.js")), "function gui() {}");
    assert_eq!(read_text(&tmp.path().join("public/index.html")), "<p>tpl</p>");
}
