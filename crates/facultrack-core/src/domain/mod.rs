//! Domain model (ids, statuses, schedules, records, resolved views).
//!
//! ストレージにも HTTP にも依存しない純粋な値型のみを置く。

pub mod errors;
pub mod ids;
pub mod instructor;
pub mod schedule;
pub mod state;
pub mod status;
pub mod status_override;

pub use errors::{OverrideError, ScheduleError};
pub use ids::InstructorId;
pub use instructor::{InstructorRecord, InstructorView};
pub use schedule::{Day, ScheduleEntry, TimeOfDay, overlapping_slots};
pub use state::{ResolvedStatus, StatusSource};
pub use status::InstructorStatus;
pub use status_override::{OverrideDuration, StatusOverride};
