//! InstructorStore port - ドキュメントストア（正本）への読み書き
//!
//! 本番のストア（MongoDB など）はこのクレートの外にある。ここでは
//! 解決ロジックとサービス層が必要とする最小限の操作だけを定義する。
//!
//! # 実装
//! - **InMemoryInstructorStore**: テスト・CLI 用（`impls::inmem_store`）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{InstructorId, InstructorRecord};

/// One in-place change to a stored record.
pub type RecordEdit<'a> = Box<dyn FnOnce(&mut InstructorRecord) + Send + 'a>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("instructor not found: {0}")]
    NotFound(InstructorId),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// InstructorStore は instructor ドキュメントの正本（source of truth）
///
/// # 設計原則
/// - `list` はストアの保持順で返す（並び替えは呼び出し側の責務）
/// - `update` は読み出し・変更・書き込みを 1 ステップで行う（同時更新で失われない）
#[async_trait]
pub trait InstructorStore: Send + Sync {
    async fn get(&self, id: &InstructorId) -> Result<InstructorRecord, StoreError>;

    async fn list(&self) -> Result<Vec<InstructorRecord>, StoreError>;

    /// `edit` を適用した後のドキュメントを返す。存在しない id は NotFound。
    async fn update(
        &self,
        id: &InstructorId,
        edit: RecordEdit<'_>,
    ) -> Result<InstructorRecord, StoreError>;
}
