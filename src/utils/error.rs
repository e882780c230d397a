use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Not an SDK project directory: {}", .path.display())]
    NotAProject { path: PathBuf },

    #[error("Project not configured")]
    NotConfigured,

    #[error("The 'idf' command is only supported for the ESP32 platform, current platform: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("No helper available for platform: {platform}")]
    HelperNotFound { platform: String },

    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Cannot split flags string: {flags}")]
    InvalidFlags { flags: String },

    #[error("Unknown platform: {name}")]
    UnknownPlatform { name: String },

    #[error("Manifest error: {message}")]
    ManifestError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// 給使用者的修復建議，由 main 以 💡 形式輸出
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CliError::NotAProject { .. } => {
                "Run osdk from a project directory containing project.toml"
            }
            CliError::NotConfigured => {
                "Run 'osdk config --platform <name>' to configure the project first"
            }
            CliError::UnsupportedPlatform { .. } => {
                "Switch the project to ESP32 with 'osdk config --platform ESP32'"
            }
            CliError::HelperNotFound { .. } => {
                "Ensure the platform is properly set up under the platforms directory"
            }
            CliError::DirectoryNotFound { .. } => {
                "Check that the platform SDK checkout is complete"
            }
            CliError::InvalidFlags { .. } => {
                "Check the --idf-flags value for unbalanced quotes"
            }
            CliError::UnknownPlatform { .. } => "Use one of the supported platform names",
            CliError::ManifestError { .. } | CliError::InvalidConfigValueError { .. } => {
                "Fix the reported field in project.toml"
            }
            CliError::CommandFailed { .. } => "See the tool output above for details",
            CliError::IoError(_) => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
