use crate::utils::error::{CliError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project: ProjectSection,
    pub paths: Option<PathsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    pub platforms: Option<String>,
}

impl ProjectManifest {
    /// 從 TOML 檔案載入 manifest
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CliError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析 manifest
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CliError::ManifestError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SDK_PLATFORMS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 平台目錄（相對專案根目錄），預設 "platforms"
    pub fn platforms_dir(&self) -> &str {
        self.paths
            .as_ref()
            .and_then(|p| p.platforms.as_deref())
            .unwrap_or("platforms")
    }
}

impl Validate for ProjectManifest {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;
        validation::validate_non_empty_string("project.version", &self.project.version)?;
        validation::validate_relative_path("paths.platforms", self.platforms_dir())?;
        Ok(())
    }
}
