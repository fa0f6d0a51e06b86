use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::{
    error::schedule::ScheduleError,
    model::{availability::SetAvailabilityParams, interval::Interval},
};

pub struct AvailabilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new availability interval for a user inside a slot.
    ///
    /// Validation order: interval well-formedness, containment within the
    /// slot bounds, then overlap against the user's stored intervals for the
    /// slot. Touching endpoints are not an overlap; adjacent intervals stay
    /// distinct rows and are never merged.
    ///
    /// The overlap check and the insert run in one transaction that first
    /// re-reads the parent slot row with an exclusive lock, so two
    /// concurrent writers to the same slot serialize and each overlap scan
    /// observes the previous writer's commit. On Sqlite the lock clause is
    /// omitted by the query builder, but the single-writer database model
    /// yields the same serialization.
    ///
    /// # Arguments
    /// - `slot`: The parent slot (already resolved by the caller)
    /// - `user_id`: Owner of the interval; always the caller's own identity
    /// - `params`: Interval bounds and optional note
    ///
    /// # Returns
    /// - `Ok(Model)`: The created availability row
    /// - `Err(ScheduleError::InvalidInterval)`: End not strictly after start
    /// - `Err(ScheduleError::OutOfBounds)`: Interval exceeds the slot bounds
    /// - `Err(ScheduleError::OverlapConflict)`: Overlaps a stored interval;
    ///   carries the stored interval's bounds
    /// - `Err(ScheduleError::SlotNotFound)`: Slot deleted concurrently
    /// - `Err(ScheduleError::Db)`: Database error
    pub async fn set(
        &self,
        slot: &entity::session_slot::Model,
        user_id: i32,
        params: SetAvailabilityParams,
    ) -> Result<entity::user_availability::Model, ScheduleError> {
        let interval = Interval::new(params.available_from, params.available_to);
        if !interval.is_well_formed() {
            return Err(ScheduleError::InvalidInterval {
                from: interval.from,
                to: interval.to,
            });
        }

        let txn = self.db.begin().await?;

        // Re-read under lock; slot bounds may have moved since the caller's read.
        let slot = entity::prelude::SessionSlot::find_by_id(slot.id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ScheduleError::SlotNotFound(slot.id))?;

        let bounds = Interval::new(slot.slot_from, slot.slot_to);
        if !bounds.contains(&interval) {
            return Err(ScheduleError::OutOfBounds {
                from: interval.from,
                to: interval.to,
            });
        }

        let existing = entity::prelude::UserAvailability::find()
            .filter(entity::user_availability::Column::UserId.eq(user_id))
            .filter(entity::user_availability::Column::SlotId.eq(slot.id))
            .all(&txn)
            .await?;

        for record in &existing {
            let stored = Interval::new(record.available_from, record.available_to);
            if interval.overlaps(&stored) {
                return Err(ScheduleError::OverlapConflict {
                    existing_from: stored.from,
                    existing_to: stored.to,
                });
            }
        }

        let now = Utc::now();
        let availability = entity::user_availability::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            slot_id: ActiveValue::Set(slot.id),
            available_from: ActiveValue::Set(params.available_from),
            available_to: ActiveValue::Set(params.available_to),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(availability)
    }

    /// Deletes a user's availability for a slot, wholesale or by window.
    ///
    /// With a window, every stored interval overlapping it is removed (same
    /// overlap predicate as creation), which supports "clear my availability
    /// between 2pm and 4pm" without knowing exact record boundaries. Without
    /// a window, all of the user's intervals for the slot are removed.
    ///
    /// Deleting nothing is not an error; the result reports whether any row
    /// was removed, so repeated calls are safe.
    ///
    /// # Arguments
    /// - `slot`: The parent slot
    /// - `user_id`: Owner of the intervals; always the caller's own identity
    /// - `window`: Optional deletion window
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether at least one row was deleted
    /// - `Err(ScheduleError::InvalidInterval)`: Window end not after start
    /// - `Err(ScheduleError::OutOfBounds)`: Window exceeds the slot bounds
    /// - `Err(ScheduleError::Db)`: Database error
    pub async fn delete_for_user(
        &self,
        slot: &entity::session_slot::Model,
        user_id: i32,
        window: Option<Interval>,
    ) -> Result<bool, ScheduleError> {
        let mut query = entity::prelude::UserAvailability::delete_many()
            .filter(entity::user_availability::Column::UserId.eq(user_id))
            .filter(entity::user_availability::Column::SlotId.eq(slot.id));

        if let Some(window) = window {
            if !window.is_well_formed() {
                return Err(ScheduleError::InvalidInterval {
                    from: window.from,
                    to: window.to,
                });
            }

            let bounds = Interval::new(slot.slot_from, slot.slot_to);
            if !bounds.contains(&window) {
                return Err(ScheduleError::OutOfBounds {
                    from: window.from,
                    to: window.to,
                });
            }

            query = query
                .filter(entity::user_availability::Column::AvailableFrom.lt(window.to))
                .filter(entity::user_availability::Column::AvailableTo.gt(window.from));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all of one user's intervals for a slot, ordered by start time.
    ///
    /// # Returns
    /// - `Ok(intervals)`: Possibly empty vector of availability rows
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_user_and_slot(
        &self,
        user_id: i32,
        slot_id: i32,
    ) -> Result<Vec<entity::user_availability::Model>, DbErr> {
        entity::prelude::UserAvailability::find()
            .filter(entity::user_availability::Column::UserId.eq(user_id))
            .filter(entity::user_availability::Column::SlotId.eq(slot_id))
            .order_by_asc(entity::user_availability::Column::AvailableFrom)
            .all(self.db)
            .await
    }

    /// Gets paginated availability across all users of a slot.
    ///
    /// Rows carry the submitting user's id; ordering is by interval start,
    /// then user, so a scheduler-facing view is stable.
    ///
    /// # Arguments
    /// - `slot_id`: Slot to list
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((rows, total))`: Vector of availability rows and the total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_slot(
        &self,
        slot_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user_availability::Model>, u64), DbErr> {
        let query = entity::prelude::UserAvailability::find()
            .filter(entity::user_availability::Column::SlotId.eq(slot_id))
            .order_by_asc(entity::user_availability::Column::AvailableFrom)
            .order_by_asc(entity::user_availability::Column::UserId);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, total))
    }

    /// Gets every availability row across all slots of a session.
    ///
    /// Joins through the slot table and orders by slot, then interval start,
    /// for building the full user x slot x interval matrix in one read.
    ///
    /// # Arguments
    /// - `session_id`: Session whose slots are aggregated
    ///
    /// # Returns
    /// - `Ok(rows)`: Availability rows across all of the session's slots
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_by_session(
        &self,
        session_id: i32,
    ) -> Result<Vec<entity::user_availability::Model>, DbErr> {
        entity::prelude::UserAvailability::find()
            .join(
                JoinType::InnerJoin,
                entity::user_availability::Relation::SessionSlot.def(),
            )
            .filter(entity::session_slot::Column::SessionId.eq(session_id))
            .order_by_asc(entity::user_availability::Column::SlotId)
            .order_by_asc(entity::user_availability::Column::AvailableFrom)
            .all(self.db)
            .await
    }
}
