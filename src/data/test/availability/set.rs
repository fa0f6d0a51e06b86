use super::*;

/// Tests recording an interval inside the slot bounds.
///
/// Expected: Ok with the row stored and linked to user and slot
#[tokio::test]
async fn accepts_interval_within_slot() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let availability = repo
        .set(
            &slot,
            gm.id,
            SetAvailabilityParams {
                available_from: at(11, 0),
                available_to: at(13, 0),
                note: Some("after lunch".to_string()),
            },
        )
        .await?;

    assert_eq!(availability.user_id, gm.id);
    assert_eq!(availability.slot_id, slot.id);
    assert_eq!(availability.available_from, at(11, 0));
    assert_eq!(availability.available_to, at(13, 0));
    assert_eq!(availability.note, Some("after lunch".to_string()));

    // Verify row exists in database
    let db_row = entity::prelude::UserAvailability::find_by_id(availability.id)
        .one(db)
        .await?;
    assert!(db_row.is_some());

    Ok(())
}

/// Tests an interval matching the slot bounds exactly.
///
/// Containment is inclusive at both ends, so covering the whole slot is
/// valid.
///
/// Expected: Ok with the row stored
#[tokio::test]
async fn accepts_interval_matching_slot_bounds() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let availability = repo
        .set(&slot, gm.id, interval_params(at(10, 0), at(18, 0)))
        .await?;

    assert_eq!(availability.available_from, at(10, 0));
    assert_eq!(availability.available_to, at(18, 0));

    Ok(())
}

/// Tests that an overlapping interval is rejected.
///
/// The user already holds 10:00-12:00; a new 11:00-13:00 interval overlaps
/// and must be refused, reporting the stored interval's bounds so the client
/// can show which record conflicts.
///
/// Expected: Err(ScheduleError::OverlapConflict) carrying 10:00-12:00
#[tokio::test]
async fn rejects_overlapping_interval() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    repo.set(&slot, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await?;

    let result = repo
        .set(&slot, gm.id, interval_params(at(11, 0), at(13, 0)))
        .await;

    match result {
        Err(ScheduleError::OverlapConflict {
            existing_from,
            existing_to,
        }) => {
            assert_eq!(existing_from, at(10, 0));
            assert_eq!(existing_to, at(12, 0));
        }
        other => panic!("Expected OverlapConflict, got: {:?}", other),
    }

    // Verify only the original row was stored
    let rows = repo.get_by_user_and_slot(gm.id, slot.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].available_from, at(10, 0));

    Ok(())
}

/// Tests that touching intervals are accepted as distinct rows.
///
/// 10:00-12:00 followed by 12:00-14:00 share only an endpoint; half-open
/// semantics mean they do not overlap and both stay stored separately,
/// never merged.
///
/// Expected: Ok with two rows stored
#[tokio::test]
async fn accepts_touching_intervals() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    repo.set(&slot, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await?;
    repo.set(&slot, gm.id, interval_params(at(12, 0), at(14, 0)))
        .await?;

    let rows = repo.get_by_user_and_slot(gm.id, slot.id).await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].available_to, at(12, 0));
    assert_eq!(rows[1].available_from, at(12, 0));

    Ok(())
}

/// Tests that an interval starting before the slot is rejected.
///
/// Expected: Err(ScheduleError::OutOfBounds)
#[tokio::test]
async fn rejects_interval_before_slot_start() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .set(&slot, gm.id, interval_params(at(9, 59), at(12, 0)))
        .await;

    assert!(matches!(result, Err(ScheduleError::OutOfBounds { .. })));

    Ok(())
}

/// Tests that an interval running past the slot end is rejected.
///
/// Expected: Err(ScheduleError::OutOfBounds)
#[tokio::test]
async fn rejects_interval_past_slot_end() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .set(&slot, gm.id, interval_params(at(16, 0), at(18, 1)))
        .await;

    assert!(matches!(result, Err(ScheduleError::OutOfBounds { .. })));

    Ok(())
}

/// Tests that an inverted interval is rejected.
///
/// Expected: Err(ScheduleError::InvalidInterval)
#[tokio::test]
async fn rejects_inverted_interval() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .set(&slot, gm.id, interval_params(at(14, 0), at(12, 0)))
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::InvalidInterval { .. })
    ));

    Ok(())
}

/// Tests that a zero-length interval is rejected.
///
/// Expected: Err(ScheduleError::InvalidInterval)
#[tokio::test]
async fn rejects_zero_length_interval() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .set(&slot, gm.id, interval_params(at(12, 0), at(12, 0)))
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::InvalidInterval { .. })
    ));

    Ok(())
}

/// Tests that overlap is scoped per user.
///
/// Two users recording the same interval in the same slot never conflict
/// with each other.
///
/// Expected: Ok for both users
#[tokio::test]
async fn different_users_may_overlap() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    repo.set(&slot, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await?;
    repo.set(&slot, other_user.id, interval_params(at(10, 0), at(12, 0)))
        .await?;

    let (rows, total) = repo.get_by_slot(slot.id, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests writing into a slot that was deleted after the caller resolved it.
///
/// The repository re-reads the slot inside its transaction, so a stale slot
/// model must surface as not-found rather than an orphaned row.
///
/// Expected: Err(ScheduleError::SlotNotFound)
#[tokio::test]
async fn fails_when_slot_deleted_concurrently() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    slot.clone().delete(db).await?;

    let repo = AvailabilityRepository::new(db);
    let result = repo
        .set(&slot, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await;

    assert!(matches!(result, Err(ScheduleError::SlotNotFound(_))));

    Ok(())
}
