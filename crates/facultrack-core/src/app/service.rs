//! StatusService - 読み出しのたびにステータスを解決するサービス層
//!
//! # 主要な操作
//! - current_status / instructor / list_instructors: 読み出し（毎回再計算）
//! - set_override / set_location / replace_schedule: instructor 自身による更新
//!
//! 解決結果はキャッシュしない。1 回の呼び出しにつき `now` は 1 度だけ読む。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{
    InstructorId, InstructorRecord, InstructorView, ResolvedStatus, ScheduleEntry,
    StatusOverride, overlapping_slots,
};
use crate::error::ServiceError;
use crate::ports::{Clock, InstructorStore};
use crate::resolver::StatusResolver;

pub struct StatusService {
    store: Arc<dyn InstructorStore>,
    clock: Arc<dyn Clock>,
    resolver: StatusResolver,
    config: Config,
}

impl StatusService {
    pub fn new(store: Arc<dyn InstructorStore>, clock: Arc<dyn Clock>, config: Config) -> Self {
        Self {
            store,
            clock,
            resolver: config.resolver(),
            config,
        }
    }

    pub fn resolver(&self) -> &StatusResolver {
        &self.resolver
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// "me": the resolved status of one instructor.
    pub async fn current_status(&self, id: &InstructorId) -> Result<ResolvedStatus, ServiceError> {
        let record = self.store.get(id).await?;
        Ok(self.resolver.resolve(&record, self.clock.now()))
    }

    pub async fn instructor(&self, id: &InstructorId) -> Result<InstructorView, ServiceError> {
        let record = self.store.get(id).await?;
        let current = self.resolver.resolve(&record, self.clock.now());
        Ok(InstructorView::new(&record, current))
    }

    /// All instructors with `currentStatus`, sorted by name.
    ///
    /// The sort is stable: instructors sharing a name keep store order.
    pub async fn list_instructors(&self) -> Result<Vec<InstructorView>, ServiceError> {
        let records = self.store.list().await?;
        let now = self.clock.now();
        let resolved = self.resolver.resolve_many(&records, now);
        debug!(count = records.len(), %now, "resolved instructor statuses");

        let mut views: Vec<InstructorView> = records
            .iter()
            .zip(resolved)
            .map(|(record, current)| InstructorView::new(record, current))
            .collect();
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }

    /// Stores the override and returns the updated record.
    pub async fn set_override(
        &self,
        id: &InstructorId,
        request: &StatusOverride,
    ) -> Result<InstructorRecord, ServiceError> {
        let now = self.clock.now();
        let Config {
            timezone,
            end_of_day,
        } = self.config;
        let record = self
            .store
            .update(
                id,
                Box::new(|record: &mut InstructorRecord| {
                    request.apply(record, now, timezone, end_of_day)
                }),
            )
            .await?;
        info!(
            instructor = %id,
            status = %request.status(),
            duration = %request.duration(),
            expires_at = ?record.override_expires_at,
            "status override set"
        );
        Ok(record)
    }

    pub async fn set_location(
        &self,
        id: &InstructorId,
        location: impl Into<String>,
        room: impl Into<String>,
    ) -> Result<InstructorRecord, ServiceError> {
        let location: String = location.into();
        let room: String = room.into();
        let record = self
            .store
            .update(
                id,
                Box::new(move |record: &mut InstructorRecord| {
                    record.location = location;
                    record.room = room;
                }),
            )
            .await?;
        info!(
            instructor = %id,
            location = %record.location,
            room = %record.room,
            "location updated"
        );
        Ok(record)
    }

    /// Replaces the weekly schedule, keeping the given order.
    ///
    /// Entries with `start >= end` are rejected. Overlapping same-day slots are
    /// accepted and logged; they resolve first-match-wins.
    pub async fn replace_schedule(
        &self,
        id: &InstructorId,
        schedule: Vec<ScheduleEntry>,
    ) -> Result<InstructorRecord, ServiceError> {
        for (index, entry) in schedule.iter().enumerate() {
            entry
                .validate()
                .map_err(|source| ServiceError::Schedule { index, source })?;
        }
        for (first, second) in overlapping_slots(&schedule) {
            warn!(
                instructor = %id,
                first,
                second,
                day = %schedule[first].day,
                "overlapping schedule slots; the earlier entry takes precedence"
            );
        }

        let record = self
            .store
            .update(
                id,
                Box::new(move |record: &mut InstructorRecord| record.schedule = schedule),
            )
            .await?;
        info!(instructor = %id, slots = record.schedule.len(), "schedule replaced");
        Ok(record)
    }
}
