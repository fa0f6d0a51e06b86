use super::*;

/// Tests updating both bounds and the note.
///
/// Expected: Ok with all fields updated
#[tokio::test]
async fn updates_bounds_and_note() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(12, 0)).await?;

    let repo = SlotRepository::new(db);
    let updated = repo
        .update(
            slot.id,
            UpdateSlotParams {
                slot_from: Some(at(14, 0)),
                slot_to: Some(at(18, 0)),
                note: Some(Some("Moved to the afternoon".to_string())),
            },
        )
        .await?;

    assert_eq!(updated.slot_from, at(14, 0));
    assert_eq!(updated.slot_to, at(18, 0));
    assert_eq!(updated.note, Some("Moved to the afternoon".to_string()));

    Ok(())
}

/// Tests updating a single bound keeps the other stored value.
///
/// Expected: Ok with only `slot_to` changed
#[tokio::test]
async fn updates_single_bound() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(12, 0)).await?;

    let repo = SlotRepository::new(db);
    let updated = repo
        .update(
            slot.id,
            UpdateSlotParams {
                slot_to: Some(at(13, 0)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.slot_from, at(10, 0));
    assert_eq!(updated.slot_to, at(13, 0));

    Ok(())
}

/// Tests that the interval invariant is checked against the merged bounds.
///
/// Moving only `slot_from` past the stored `slot_to` must be rejected even
/// though the new value alone looks harmless.
///
/// Expected: Err(ScheduleError::InvalidInterval)
#[tokio::test]
async fn rejects_single_bound_inverting_interval() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(12, 0)).await?;

    let repo = SlotRepository::new(db);
    let result = repo
        .update(
            slot.id,
            UpdateSlotParams {
                slot_from: Some(at(13, 0)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::InvalidInterval { .. })
    ));

    Ok(())
}

/// Tests that a rejected update leaves the stored row unchanged.
///
/// Expected: stored bounds and note identical to before the attempt
#[tokio::test]
async fn rejected_update_leaves_row_unchanged() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(12, 0)).await?;

    let repo = SlotRepository::new(db);
    let result = repo
        .update(
            slot.id,
            UpdateSlotParams {
                slot_from: Some(at(18, 0)),
                slot_to: Some(at(16, 0)),
                note: Some(Some("should not be written".to_string())),
            },
        )
        .await;
    assert!(result.is_err());

    let stored = entity::prelude::SessionSlot::find_by_id(slot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.slot_from, slot.slot_from);
    assert_eq!(stored.slot_to, slot.slot_to);
    assert_eq!(stored.note, slot.note);

    Ok(())
}

/// Tests clearing the note with an explicit null.
///
/// Expected: Ok with note set to None
#[tokio::test]
async fn clears_note_with_explicit_null() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::session_slot::SessionSlotFactory::new(db, session.id)
        .bounds(at(10, 0), at(12, 0))
        .note(Some("to be cleared".to_string()))
        .build()
        .await?;

    let repo = SlotRepository::new(db);
    let updated = repo
        .update(
            slot.id,
            UpdateSlotParams {
                note: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.note.is_none());

    Ok(())
}

/// Tests updating a slot that does not exist.
///
/// Expected: Err(ScheduleError::SlotNotFound)
#[tokio::test]
async fn returns_not_found_for_missing_slot() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SlotRepository::new(db);
    let result = repo
        .update(
            9999,
            UpdateSlotParams {
                slot_to: Some(at(13, 0)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(ScheduleError::SlotNotFound(9999))));

    Ok(())
}
