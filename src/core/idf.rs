use crate::config::using_config::UsingConfig;
use crate::config::workspace::Workspace;
use crate::domain::model::{IdfInvocation, Platform};
use crate::domain::ports::HelperRegistry;
use crate::utils::error::{CliError, Result};

/// idf.py 的工作目錄（平台根目錄下的 SDK checkout）
pub const SDK_DIR: &str = "open_sdk";

const IDF_TOOL: &str = "idf.py";

/// 把使用者的命令與旗標轉送給 idf.py 的引擎。
///
/// 檢查順序固定：專案已配置 → 平台為 ESP32 → 助手可用 →
/// 組命令列 → 工作目錄存在 → 執行。任一步失敗立即中止。
pub struct IdfForwarder<'a> {
    workspace: &'a Workspace,
    helpers: &'a HelperRegistry,
}

impl<'a> IdfForwarder<'a> {
    pub fn new(workspace: &'a Workspace, helpers: &'a HelperRegistry) -> Self {
        Self { workspace, helpers }
    }

    pub fn run(&self, invocation: &IdfInvocation) -> Result<()> {
        // 專案必須配置過才知道平台
        let using_path = self.workspace.using_config();
        if !using_path.exists() {
            return Err(CliError::NotConfigured);
        }

        let using = UsingConfig::from_file(using_path)?;
        let platform_name = using.platform_choice().unwrap_or("").to_string();

        let platform = match Platform::from_config_value(&platform_name) {
            Some(p @ Platform::Esp32) => p,
            _ => {
                return Err(CliError::UnsupportedPlatform {
                    platform: platform_name,
                });
            }
        };

        let platform_root = self.workspace.platform_root(platform.as_str());

        let helper = self.helpers.resolve(platform).ok_or_else(|| {
            CliError::HelperNotFound {
                platform: platform.to_string(),
            }
        })?;

        let command = assemble_command(invocation)?;

        let directory = platform_root.join(SDK_DIR);
        if !directory.exists() {
            return Err(CliError::DirectoryNotFound { path: directory });
        }

        tracing::info!("Running: {}", command);

        helper.execute(&platform_root, &command, &directory)?;

        tracing::info!("Command completed successfully.");
        Ok(())
    }
}

/// 組出完整命令列：工具名 + 切割後的旗標 + 命令 tokens，空白連接
pub fn assemble_command(invocation: &IdfInvocation) -> Result<String> {
    let mut cmd_parts = vec![IDF_TOOL.to_string()];

    if !invocation.flags.is_empty() {
        cmd_parts.extend(split_flags(&invocation.flags)?);
    }

    cmd_parts.extend(invocation.tokens.iter().cloned());

    Ok(cmd_parts.join(" "))
}

/// 依 shell 引號規則切割旗標字串；引號不成對視為錯誤
pub fn split_flags(flags: &str) -> Result<Vec<String>> {
    shlex::split(flags).ok_or_else(|| CliError::InvalidFlags {
        flags: flags.to_string(),
    })
}
