use osdk::core::idf::SDK_DIR;
use osdk::core::project;
use osdk::utils::error::CliError;
use osdk::{HelperRegistry, IdfForwarder, IdfInvocation, Platform, PlatformHelper, Workspace};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

struct CountingHelper {
    commands: Arc<Mutex<Vec<String>>>,
}

impl PlatformHelper for CountingHelper {
    fn platform(&self) -> Platform {
        Platform::Esp32
    }

    fn execute(&self, _platform_root: &Path, command: &str, _workdir: &Path) -> osdk::Result<()> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(())
    }
}

fn write_manifest(dir: &Path) {
    std::fs::write(
        dir.join("project.toml"),
        "[project]\nname = \"demo-app\"\nversion = \"1.0.0\"\n",
    )
    .unwrap();
}

#[test]
fn test_configure_rejects_unknown_platform() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path());

    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let result = project::configure(&workspace, "BK7231X");
    assert!(matches!(result, Err(CliError::UnknownPlatform { .. })));
    assert!(!temp_dir.path().join(".config").exists());
}

#[test]
fn test_configure_writes_platform_choice() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path());

    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let platform = project::configure(&workspace, "ESP32").unwrap();
    assert_eq!(platform, Platform::Esp32);

    let content = std::fs::read_to_string(temp_dir.path().join(".config")).unwrap();
    assert_eq!(content, "CONFIG_PLATFORM_CHOICE=\"ESP32\"\n");
}

#[test]
fn test_configure_preserves_existing_settings() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path());
    std::fs::write(
        temp_dir.path().join(".config"),
        "CONFIG_BOARD=\"devkit-c\"\nCONFIG_PLATFORM_CHOICE=\"BK7231X\"\n",
    )
    .unwrap();

    let workspace = Workspace::discover(temp_dir.path()).unwrap();
    project::configure(&workspace, "ESP32").unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join(".config")).unwrap();
    assert_eq!(
        content,
        "CONFIG_BOARD=\"devkit-c\"\nCONFIG_PLATFORM_CHOICE=\"ESP32\"\n"
    );
}

#[test]
fn test_status_reflects_configuration() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path());

    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let status = project::status(&workspace).unwrap();
    assert_eq!(status.name, "demo-app");
    assert_eq!(status.version, "1.0.0");
    assert!(!status.configured);
    assert_eq!(status.platform, None);

    project::configure(&workspace, "ESP32").unwrap();

    let status = project::status(&workspace).unwrap();
    assert!(status.configured);
    assert_eq!(status.platform.as_deref(), Some("ESP32"));
}

#[test]
fn test_configure_then_forward_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path());
    std::fs::create_dir_all(
        temp_dir
            .path()
            .join("platforms")
            .join("ESP32")
            .join(SDK_DIR),
    )
    .unwrap();

    let workspace = Workspace::discover(temp_dir.path()).unwrap();
    project::configure(&workspace, "ESP32").unwrap();

    let commands = Arc::new(Mutex::new(Vec::new()));
    let mut helpers = HelperRegistry::new();
    helpers.register(Box::new(CountingHelper {
        commands: commands.clone(),
    }));

    let invocation = IdfInvocation::new(
        vec!["set-target".to_string(), "esp32s3".to_string()],
        "-D IDF_TARGET=esp32s3",
    );
    IdfForwarder::new(&workspace, &helpers)
        .run(&invocation)
        .unwrap();

    let commands = commands.lock().unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0], "idf.py -D IDF_TARGET=esp32s3 set-target esp32s3");
}
