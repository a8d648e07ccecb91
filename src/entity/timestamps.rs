use sea_orm::ActiveValue;
use time::OffsetDateTime;

/// Bookkeeping values for a single write.
///
/// Two kinds of timestamp columns exist: insert-only columns (`created_at`,
/// `worn_at`) which are stamped once and frozen afterwards, and touch
/// columns (`updated_at`) which are stamped on every write.
pub(crate) struct Stamp {
    now: OffsetDateTime,
    insert: bool,
}

impl Stamp {
    pub(crate) fn new(insert: bool) -> Self {
        Self {
            now: OffsetDateTime::now_utc(),
            insert,
        }
    }

    /// Insert-only column. Any value set on an update is discarded.
    pub(crate) fn frozen(
        &self,
        current: ActiveValue<OffsetDateTime>,
    ) -> ActiveValue<OffsetDateTime> {
        if self.insert {
            return ActiveValue::Set(self.now);
        }

        match current {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => ActiveValue::Unchanged(v),
            ActiveValue::NotSet => ActiveValue::NotSet,
        }
    }

    /// Touch column, written on every save.
    pub(crate) fn touched(&self) -> ActiveValue<OffsetDateTime> {
        ActiveValue::Set(self.now)
    }
}
