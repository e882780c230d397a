use crate::domain::model::Platform;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// 平台助手：替某個硬體平台執行已組好的命令列
pub trait PlatformHelper: Send + Sync {
    fn platform(&self) -> Platform;

    /// 以 workdir 為工作目錄執行 command；非零結束碼視為失敗
    fn execute(&self, platform_root: &Path, command: &str, workdir: &Path) -> Result<()>;
}

/// 由呼叫端組裝、注入的助手註冊表
#[derive(Default)]
pub struct HelperRegistry {
    helpers: HashMap<Platform, Box<dyn PlatformHelper>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, helper: Box<dyn PlatformHelper>) {
        self.helpers.insert(helper.platform(), helper);
    }

    pub fn resolve(&self, platform: Platform) -> Option<&dyn PlatformHelper> {
        self.helpers.get(&platform).map(|h| h.as_ref())
    }
}
