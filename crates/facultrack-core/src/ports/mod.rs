//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 外部システム（ドキュメントストア、システム時刻）へのインターフェースを提供し、
//! 実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - ドキュメントストアが source of truth（正本）
//! - 現在ステータスは保存せず、読み出しのたびに再計算

pub mod clock;
pub mod instructor_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::instructor_store::{InstructorStore, RecordEdit, StoreError};
