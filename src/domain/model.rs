use std::fmt;

/// 專案可選的硬體平台（.config 中 CONFIG_PLATFORM_CHOICE 的值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Esp32,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[Platform::Esp32];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Esp32 => "ESP32",
        }
    }

    /// 由配置檔的值解析平台；不認識的值回傳 None
    pub fn from_config_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 要轉送給 idf.py 的一次調用：命令 tokens 加上可選的旗標字串
#[derive(Debug, Clone)]
pub struct IdfInvocation {
    pub tokens: Vec<String>,
    pub flags: String,
}

impl IdfInvocation {
    pub fn new(tokens: Vec<String>, flags: impl Into<String>) -> Self {
        Self {
            tokens,
            flags: flags.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectStatus {
    pub name: String,
    pub version: String,
    pub configured: bool,
    pub platform: Option<String>,
}
