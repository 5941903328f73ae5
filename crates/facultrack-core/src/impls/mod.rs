//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryInstructorStore**: テスト・CLI 用のストア
//!
//! # 本番用実装
//! ドキュメントストア実装は API 層の側に置く（このクレートの外）。

pub mod inmem_store;

// 主要な型を再エクスポート
pub use self::inmem_store::InMemoryInstructorStore;
