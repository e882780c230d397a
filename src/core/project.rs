use crate::config::using_config::{UsingConfig, PLATFORM_CHOICE_KEY};
use crate::config::workspace::Workspace;
use crate::domain::model::{Platform, ProjectStatus};
use crate::utils::error::{CliError, Result};

/// 設定專案使用的平台並寫回 .config
pub fn configure(workspace: &Workspace, platform_name: &str) -> Result<Platform> {
    let platform =
        Platform::from_config_value(platform_name).ok_or_else(|| CliError::UnknownPlatform {
            name: platform_name.to_string(),
        })?;

    let using_path = workspace.using_config();
    let mut using = if using_path.exists() {
        UsingConfig::from_file(using_path)?
    } else {
        UsingConfig::new()
    };

    using.set(PLATFORM_CHOICE_KEY, platform.as_str());
    using.save(using_path)?;

    tracing::info!("Platform set to {}", platform);
    Ok(platform)
}

/// 收集 info 子命令顯示的專案狀態
pub fn status(workspace: &Workspace) -> Result<ProjectStatus> {
    let manifest = workspace.manifest();
    let using_path = workspace.using_config();
    let configured = using_path.exists();

    let platform = if configured {
        UsingConfig::from_file(using_path)?
            .platform_choice()
            .map(|p| p.to_string())
    } else {
        None
    };

    Ok(ProjectStatus {
        name: manifest.project.name.clone(),
        version: manifest.project.version.clone(),
        configured,
        platform,
    })
}
