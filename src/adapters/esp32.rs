use crate::domain::model::Platform;
use crate::domain::ports::PlatformHelper;
use crate::utils::error::{CliError, Result};
use std::path::Path;
use std::process::Command;

/// ESP32 平台助手：透過 bash 執行組好的 idf.py 命令列
#[derive(Debug, Default)]
pub struct Esp32Helper;

impl Esp32Helper {
    pub fn new() -> Self {
        Self
    }

    /// idf.py 需要 ESP-IDF 環境；export.sh 存在時先 source 再執行
    fn shell_line(platform_root: &Path, command: &str) -> String {
        let export = platform_root.join("esp-idf").join("export.sh");
        if export.exists() {
            format!(". '{}' >/dev/null 2>&1 && {}", export.display(), command)
        } else {
            command.to_string()
        }
    }
}

impl PlatformHelper for Esp32Helper {
    fn platform(&self) -> Platform {
        Platform::Esp32
    }

    fn execute(&self, platform_root: &Path, command: &str, workdir: &Path) -> Result<()> {
        let mut cmd = Command::new("bash");
        cmd.arg("-c")
            .arg(Self::shell_line(platform_root, command))
            .current_dir(workdir);

        tracing::debug!("Spawning: {:?}", cmd);

        let status = cmd.status()?;

        if !status.success() {
            return Err(CliError::CommandFailed {
                command: command.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_shell_line_without_export_script() {
        let temp_dir = TempDir::new().unwrap();
        let line = Esp32Helper::shell_line(temp_dir.path(), "idf.py clean");
        assert_eq!(line, "idf.py clean");
    }

    #[test]
    fn test_shell_line_sources_export_script() {
        let temp_dir = TempDir::new().unwrap();
        let idf_dir = temp_dir.path().join("esp-idf");
        std::fs::create_dir_all(&idf_dir).unwrap();
        std::fs::write(idf_dir.join("export.sh"), "").unwrap();

        let line = Esp32Helper::shell_line(temp_dir.path(), "idf.py clean");
        assert!(line.starts_with(". '"));
        assert!(line.ends_with("&& idf.py clean"));
    }

    #[test]
    fn test_execute_reports_nonzero_exit() {
        let temp_dir = TempDir::new().unwrap();
        let helper = Esp32Helper::new();

        let result = helper.execute(temp_dir.path(), "exit 3", temp_dir.path());
        assert!(matches!(result, Err(CliError::CommandFailed { .. })));
    }

    #[test]
    fn test_execute_runs_in_workdir() {
        let temp_dir = TempDir::new().unwrap();
        let helper = Esp32Helper::new();

        helper
            .execute(temp_dir.path(), "touch marker", temp_dir.path())
            .unwrap();
        assert!(temp_dir.path().join("marker").exists());
    }
}
