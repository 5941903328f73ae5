//! InMemoryInstructorStore - テスト・CLI 用のストア
//!
//! # 学習ポイント
//! - tokio::sync::RwLock による読み取り並行・書き込み排他
//! - update は書き込みロックを保持したまま編集するので、同時更新が互いを上書きしない
//! - 保持順（挿入順）をそのまま返す

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{InstructorId, InstructorRecord};
use crate::ports::{InstructorStore, RecordEdit, StoreError};

/// InMemoryInstructorStore は Vec で instructor を保持する
///
/// # 使用例
/// ```ignore
/// let store = InMemoryInstructorStore::from_records(records);
/// let record = store.get(&id).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryInstructorStore {
    records: RwLock<Vec<InstructorRecord>>,
}

impl InMemoryInstructorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InstructorRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// 追加または置き換え（id が同じなら位置を保って置き換える）
    pub async fn insert(&self, record: InstructorRecord) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => records.push(record),
        }
    }

    /// 現在の内容を保持順で取り出す
    pub async fn snapshot(&self) -> Vec<InstructorRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl InstructorStore for InMemoryInstructorStore {
    async fn get(&self, id: &InstructorId) -> Result<InstructorRecord, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn list(&self) -> Result<Vec<InstructorRecord>, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn update(
        &self,
        id: &InstructorId,
        edit: RecordEdit<'_>,
    ) -> Result<InstructorRecord, StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        edit(record);
        debug!(instructor = %id, "updated instructor record");
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = InMemoryInstructorStore::new();
        store.insert(InstructorRecord::new("b", "Zeta")).await;
        store.insert(InstructorRecord::new("a", "Alpha")).await;

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let store = InMemoryInstructorStore::new();
        let err = store.get(&InstructorId::new("missing")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id.as_str() == "missing"));
    }

    #[tokio::test]
    async fn update_edits_in_place() {
        let store = InMemoryInstructorStore::from_records(vec![
            InstructorRecord::new("a", "Alpha"),
            InstructorRecord::new("b", "Beta"),
        ]);

        let edit = |r: &mut InstructorRecord| r.room = "R-3".to_string();
        let updated = store.update(&InstructorId::new("a"), Box::new(edit)).await.unwrap();
        assert_eq!(updated.room, "R-3");

        let records = store.snapshot().await;
        assert_eq!(records[0].room, "R-3");
        assert_eq!(records[1].name, "Beta");
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let store = InMemoryInstructorStore::new();
        let edit = |r: &mut InstructorRecord| r.name = "Nobody".to_string();
        let err = store.update(&InstructorId::new("x"), Box::new(edit)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_updates_touch_separate_fields() {
        let store = InMemoryInstructorStore::from_records(vec![
            InstructorRecord::new("a", "Alpha").with_location("Main Office", "100"),
        ]);
        let id = InstructorId::new("a");

        let rename = |r: &mut InstructorRecord| r.name = "Alpha Reyes".to_string();
        let relocate = |r: &mut InstructorRecord| r.location = "Rizal Building".to_string();
        let (first, second) = tokio::join!(
            store.update(&id, Box::new(rename)),
            store.update(&id, Box::new(relocate)),
        );
        first.unwrap();
        second.unwrap();

        let record = store.get(&id).await.unwrap();
        assert_eq!(record.name, "Alpha Reyes");
        assert_eq!(record.location, "Rizal Building");
    }
}
