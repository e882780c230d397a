use crate::config::manifest::ProjectManifest;
use crate::utils::error::{CliError, Result};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "project.toml";
pub const USING_CONFIG_FILE: &str = ".config";

/// 一次調用所需的全部專案路徑與 manifest。
/// 由 main 顯式建構並往下傳遞，取代任何行程層級的全域狀態。
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    manifest: ProjectManifest,
    platforms_root: PathBuf,
    using_config: PathBuf,
}

impl Workspace {
    /// 確認 dir 是專案根目錄（含 project.toml）並載入 manifest
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(CliError::NotAProject { path: root });
        }

        let manifest = ProjectManifest::from_file(&manifest_path)?;
        manifest.validate()?;

        let platforms_root = root.join(manifest.platforms_dir());
        let using_config = root.join(USING_CONFIG_FILE);

        Ok(Self {
            root,
            manifest,
            platforms_root,
            using_config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    pub fn platforms_root(&self) -> &Path {
        &self.platforms_root
    }

    /// 持久化設定檔（.config）的完整路徑；檔案可能尚未存在
    pub fn using_config(&self) -> &Path {
        &self.using_config
    }

    pub fn platform_root(&self, platform_name: &str) -> PathBuf {
        self.platforms_root.join(platform_name)
    }
}
