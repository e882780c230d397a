use crate::utils::error::{CliError, Result};
use std::path::Path;

/// .config 中記錄使用中平台的鍵
pub const PLATFORM_CHOICE_KEY: &str = "CONFIG_PLATFORM_CHOICE";

/// 持久化的 key-value 建置設定（Kconfig 風格的 .config 檔）
///
/// 接受的行格式：
/// - `KEY=value` 或 `KEY="value"`
/// - `#` 開頭為註解；`# CONFIG_X is not set` 視為未設定
/// - 空白行忽略
#[derive(Debug, Clone, Default)]
pub struct UsingConfig {
    entries: Vec<(String, String)>,
}

impl UsingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CliError::IoError)?;
        Ok(Self::from_config_str(&content))
    }

    pub fn from_config_str(content: &str) -> Self {
        let mut config = Self::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                // 去掉值兩側的雙引號
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(value);
                config.set(key, value);
            }
        }

        config
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn platform_choice(&self) -> Option<&str> {
        self.get(PLATFORM_CHOICE_KEY)
    }

    /// 重複的 key 就地覆寫，否則按插入順序附加
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// 寫回 .config，每個值都加上雙引號
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut content = String::new();
        for (key, value) in &self.entries {
            content.push_str(&format!("{}=\"{}\"\n", key, value));
        }
        std::fs::write(path, content).map_err(CliError::IoError)
    }
}
