//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **ServiceBuilder**: サービスの構築とワイヤリング
//! - **StatusService**: ストア読み出し + ステータス解決 + instructor による更新

pub mod builder;
pub mod service;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ServiceBuilder};
pub use self::service::StatusService;
