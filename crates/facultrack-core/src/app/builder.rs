//! ServiceBuilder - StatusService の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use crate::app::StatusService;
use crate::config::Config;
use crate::ports::{Clock, InstructorStore, SystemClock};

/// ServiceBuilder は StatusService を構築
///
/// # 使用例
/// ```ignore
/// let service = ServiceBuilder::new()
///     .store(Arc::new(store))
///     .config(config)
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - store は必須。未設定なら build() が BuildError を返す
/// - clock は省略時 SystemClock
/// - config は省略時 Config::default()（UTC+08:00, 17:00）
#[derive(Default)]
pub struct ServiceBuilder {
    store: Option<Arc<dyn InstructorStore>>,
    clock: Option<Arc<dyn Clock>>,
    config: Option<Config>,
}

/// BuildError はサービス構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no instructor store configured; call ServiceBuilder::store() before build()")]
    MissingStore,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn InstructorStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<StatusService, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let config = self.config.unwrap_or_default();
        Ok(StatusService::new(store, clock, config))
    }
}
