use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::schedule::ScheduleError,
    model::{
        interval::Interval,
        slot::{CreateSlotParams, UpdateSlotParams},
    },
};

pub struct SlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new slot for a session.
    ///
    /// The caller is responsible for having verified that the session exists
    /// and that the caller holds the GM role; this function only enforces the
    /// interval invariant.
    ///
    /// # Arguments
    /// - `session_id`: ID of the owning game session
    /// - `params`: Slot bounds and optional note
    ///
    /// # Returns
    /// - `Ok(Model)`: The created slot
    /// - `Err(ScheduleError::InvalidInterval)`: `slot_to` is not after `slot_from`
    /// - `Err(ScheduleError::Db)`: Database error
    pub async fn create(
        &self,
        session_id: i32,
        params: CreateSlotParams,
    ) -> Result<entity::session_slot::Model, ScheduleError> {
        let bounds = Interval::new(params.slot_from, params.slot_to);
        if !bounds.is_well_formed() {
            return Err(ScheduleError::InvalidInterval {
                from: bounds.from,
                to: bounds.to,
            });
        }

        let now = Utc::now();
        let slot = entity::session_slot::ActiveModel {
            session_id: ActiveValue::Set(session_id),
            slot_from: ActiveValue::Set(params.slot_from),
            slot_to: ActiveValue::Set(params.slot_to),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(slot)
    }

    /// Gets a slot by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The slot
    /// - `Ok(None)`: Slot not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::session_slot::Model>, DbErr> {
        entity::prelude::SessionSlot::find_by_id(id).one(self.db).await
    }

    /// Gets paginated slots for a session, ordered ascending by `slot_from`.
    ///
    /// # Arguments
    /// - `session_id`: Owning game session ID
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((slots, total))`: Vector of slots and the total row count
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_session(
        &self,
        session_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::session_slot::Model>, u64), DbErr> {
        let query = entity::prelude::SessionSlot::find()
            .filter(entity::session_slot::Column::SessionId.eq(session_id))
            .order_by_asc(entity::session_slot::Column::SlotFrom);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let slots = paginator.fetch_page(page).await?;

        Ok((slots, total))
    }

    /// Updates a slot, merging provided fields onto the stored row.
    ///
    /// The `slot_to > slot_from` invariant is re-validated against the
    /// *resulting* bounds: if only one bound is provided, the check uses the
    /// stored value of the other. On failure nothing is written.
    ///
    /// # Arguments
    /// - `id`: ID of the slot to update
    /// - `params`: Optional new bounds and note
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated slot
    /// - `Err(ScheduleError::SlotNotFound)`: No slot with this ID
    /// - `Err(ScheduleError::InvalidInterval)`: Resulting bounds are invalid
    /// - `Err(ScheduleError::Db)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateSlotParams,
    ) -> Result<entity::session_slot::Model, ScheduleError> {
        let slot = entity::prelude::SessionSlot::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ScheduleError::SlotNotFound(id))?;

        let bounds = Interval::new(
            params.slot_from.unwrap_or(slot.slot_from),
            params.slot_to.unwrap_or(slot.slot_to),
        );
        if !bounds.is_well_formed() {
            return Err(ScheduleError::InvalidInterval {
                from: bounds.from,
                to: bounds.to,
            });
        }

        let mut active: entity::session_slot::ActiveModel = slot.into();
        if let Some(slot_from) = params.slot_from {
            active.slot_from = ActiveValue::Set(slot_from);
        }
        if let Some(slot_to) = params.slot_to {
            active.slot_to = ActiveValue::Set(slot_to);
        }
        if let Some(note) = params.note {
            active.note = ActiveValue::Set(note);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let slot = active.update(self.db).await?;

        Ok(slot)
    }

    /// Deletes a slot along with every availability interval recorded in it.
    ///
    /// The cascade is issued explicitly inside a transaction so it holds on
    /// any backend regardless of foreign key enforcement settings.
    ///
    /// # Arguments
    /// - `id`: ID of the slot to delete
    ///
    /// # Returns
    /// - `Ok(Model)`: The deleted slot
    /// - `Err(ScheduleError::SlotNotFound)`: No slot with this ID
    /// - `Err(ScheduleError::Db)`: Database error
    pub async fn delete(&self, id: i32) -> Result<entity::session_slot::Model, ScheduleError> {
        let slot = entity::prelude::SessionSlot::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ScheduleError::SlotNotFound(id))?;

        let txn = self.db.begin().await?;

        entity::prelude::UserAvailability::delete_many()
            .filter(entity::user_availability::Column::SlotId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::SessionSlot::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(slot)
    }
}
