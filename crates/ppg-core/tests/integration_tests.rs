//! Integration tests for ppg-core, run against the in-memory filesystem.

use std::path::{Path, PathBuf};

use ppg_adapters::MemoryFilesystem;
use ppg_core::{
    application::{ApplicationError, ScaffoldService},
    domain::{PluginRequest, TemplateLayout},
    error::PpgError,
};

const TEMPLATE: &str = "/repo/template/plugin-template";

fn template_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        format!("{TEMPLATE}/pom.xml"),
        "<groupId>__GROUP_ID__</groupId><artifactId>__ARTIFACT_ID__</artifactId>",
    );
    fs.add_file(
        format!("{TEMPLATE}/src/main/java/Plugin.java"),
        "public class __PLUGIN_NAME__ {}",
    );
    fs.add_file(format!("{TEMPLATE}/README.md"), "Plain readme");
    fs.add_file(format!("{TEMPLATE}/assets/logo.png"), vec![0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]);
    fs.add_dir(format!("{TEMPLATE}/src/test/java"));
    fs.add_dir("/repo/tools/sub");
    fs
}

fn request() -> PluginRequest {
    PluginRequest::new("Foo", "com.example", "demo").unwrap()
}

fn relative_under(paths: Vec<PathBuf>, root: &str) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter_map(|p| p.strip_prefix(root).ok().map(Path::to_path_buf))
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

#[test]
fn test_full_scaffold_workflow() {
    let fs = template_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let outcome = service.scaffold(&request(), "/repo/tools/sub").unwrap();

    assert_eq!(outcome.output_dir(), Path::new("/repo/tools/sub/demo"));
    assert_eq!(outcome.template_root, PathBuf::from(TEMPLATE));
    assert_eq!(
        fs.read_file("/repo/tools/sub/demo/src/main/java/Plugin.java"),
        Some(b"public class Foo {}".to_vec())
    );
    assert_eq!(
        fs.read_file("/repo/tools/sub/demo/pom.xml"),
        Some(b"<groupId>com.example</groupId><artifactId>demo</artifactId>".to_vec())
    );
}

#[test]
fn test_structure_is_preserved() {
    let fs = template_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service.scaffold(&request(), "/repo").unwrap();

    assert_eq!(
        relative_under(fs.list_all_files(), "/repo/demo"),
        relative_under(fs.list_all_files(), TEMPLATE)
    );
    assert_eq!(
        relative_under(fs.list_all_directories(), "/repo/demo"),
        relative_under(fs.list_all_directories(), TEMPLATE)
    );
}

#[test]
fn test_binary_and_plain_files_are_byte_identical() {
    let fs = template_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let outcome = service.scaffold(&request(), "/repo").unwrap();

    assert_eq!(
        fs.read_file("/repo/demo/assets/logo.png"),
        fs.read_file(format!("{TEMPLATE}/assets/logo.png"))
    );
    assert_eq!(
        fs.read_file("/repo/demo/README.md"),
        Some(b"Plain readme".to_vec())
    );
    assert_eq!(outcome.substitution.visited, 4);
    assert_eq!(outcome.substitution.rewritten, 2);
    assert_eq!(outcome.substitution.unchanged, 1);
    assert_eq!(outcome.substitution.skipped, 1);
}

#[test]
fn test_template_is_left_untouched() {
    let fs = template_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service.scaffold(&request(), "/repo").unwrap();

    assert_eq!(
        fs.read_file(format!("{TEMPLATE}/src/main/java/Plugin.java")),
        Some(b"public class __PLUGIN_NAME__ {}".to_vec())
    );
}

#[test]
fn test_unwritable_file_is_skipped() {
    let fs = template_fs();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    fs.deny_writes("/repo/demo/pom.xml");

    let outcome = service.scaffold(&request(), "/repo").unwrap();

    assert_eq!(outcome.substitution.skipped, 2);
    assert_eq!(
        fs.read_file("/repo/demo/pom.xml"),
        Some(b"<groupId>__GROUP_ID__</groupId><artifactId>__ARTIFACT_ID__</artifactId>".to_vec())
    );
}

#[test]
fn test_existing_output_is_untouched() {
    let fs = template_fs();
    fs.add_file("/repo/demo/keep.txt", "mine");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let err = service.scaffold(&request(), "/repo").unwrap_err();

    assert!(matches!(
        err,
        PpgError::Application(ApplicationError::OutputExists { .. })
    ));
    assert_eq!(
        relative_under(fs.list_all_files(), "/repo/demo"),
        vec![PathBuf::from("keep.txt")]
    );
}

#[test]
fn test_missing_template_creates_nothing() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("/work/sub");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let err = service.scaffold(&request(), "/work/sub").unwrap_err();

    assert!(matches!(
        err,
        PpgError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(!ppg_core::application::ports::Filesystem::exists(
        &fs,
        Path::new("/work/sub/demo")
    ));
}

#[test]
fn test_custom_layout() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/repo/blueprints/plugin/App.txt", "__PLUGIN_NAME__");
    let service = ScaffoldService::new(Box::new(fs.clone()))
        .with_layout(TemplateLayout::new("blueprints/plugin").unwrap());

    service.scaffold(&request(), "/repo").unwrap();

    assert_eq!(fs.read_file("/repo/demo/App.txt"), Some(b"Foo".to_vec()));
}
