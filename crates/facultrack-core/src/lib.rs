//! facultrack-core
//!
//! Faculty availability tracking: derives each instructor's "right now"
//! status, location and room from a weekly timetable plus a time-bounded
//! manual override.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, schedule, instructor, state, status_override, errors）
//! - **resolver**: ステータス解決（override > 現在のスロット > 既定値）
//! - **ports**: 抽象化レイヤー（InstructorStore, Clock）
//! - **impls**: 実装（InMemoryInstructorStore）
//! - **app**: アプリケーション層（StatusService, ServiceBuilder）
//! - **config**: TOML 設定（基準タイムゾーン、eod の時刻）

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod resolver;

pub use config::{Config, ConfigError};
pub use error::ServiceError;
pub use resolver::{SlotMatchPolicy, StatusResolver};
