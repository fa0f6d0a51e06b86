use super::*;

/// Tests a user's intervals for a slot come back ordered by start time.
///
/// Expected: Ok with intervals sorted ascending
#[tokio::test]
async fn lists_user_intervals_ordered_by_start() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let slot = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(18, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    repo.set(&slot, gm.id, interval_params(at(15, 0), at(17, 0)))
        .await?;
    repo.set(&slot, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await?;

    let rows = repo.get_by_user_and_slot(gm.id, slot.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].available_from, at(10, 0));
    assert_eq!(rows[1].available_from, at(15, 0));

    Ok(())
}

/// Tests paginated listing of all users' intervals for a slot.
///
/// Rows are ordered by interval start, then user id, so equal intervals from
/// different users keep a stable order across pages.
///
/// Expected: Ok with stable ordering and correct total
#[tokio::test]
async fn paginates_slot_availability() -> Result<(), ScheduleError> {
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
    repo.set(&slot, gm.id, interval_params(at(14, 0), at(16, 0)))
        .await?;

    let (page0, total) = repo.get_by_slot(slot.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page0.len(), 2);
    assert_eq!(page0[0].available_from, at(10, 0));
    assert_eq!(page0[0].user_id, gm.id);
    assert_eq!(page0[1].available_from, at(10, 0));
    assert_eq!(page0[1].user_id, other_user.id);

    let (page1, _) = repo.get_by_slot(slot.id, 1, 2).await?;
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].available_from, at(14, 0));

    Ok(())
}

/// Tests the session-wide aggregation across slots.
///
/// Intervals live in two slots of the session plus one slot of another
/// session. The aggregation must return the first two groups ordered by
/// slot then start time and exclude the foreign session entirely.
///
/// Expected: Ok with three rows from the session's own slots
#[tokio::test]
async fn aggregates_across_session_slots() -> Result<(), ScheduleError> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (gm, campaign, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let other_session = factory::create_game_session(db, campaign.id).await?;

    let slot_a = factory::create_slot_with_bounds(db, session.id, at(10, 0), at(14, 0)).await?;
    let slot_b = factory::create_slot_with_bounds(db, session.id, at(14, 0), at(18, 0)).await?;
    let foreign = factory::create_slot_with_bounds(db, other_session.id, at(10, 0), at(14, 0)).await?;

    let repo = AvailabilityRepository::new(db);
    repo.set(&slot_b, gm.id, interval_params(at(14, 0), at(16, 0)))
        .await?;
    repo.set(&slot_a, gm.id, interval_params(at(12, 0), at(13, 0)))
        .await?;
    repo.set(&slot_a, gm.id, interval_params(at(10, 0), at(11, 0)))
        .await?;
    repo.set(&foreign, gm.id, interval_params(at(10, 0), at(12, 0)))
        .await?;

    let rows = repo.get_all_by_session(session.id).await?;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].slot_id, slot_a.id);
    assert_eq!(rows[0].available_from, at(10, 0));
    assert_eq!(rows[1].slot_id, slot_a.id);
    assert_eq!(rows[1].available_from, at(12, 0));
    assert_eq!(rows[2].slot_id, slot_b.id);

    Ok(())
}

/// Tests the aggregation of a session with no availability.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_session_without_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_gm, _campaign, session) = factory::helpers::create_session_with_dependencies(db)
        .await
        .unwrap();
    factory::create_slot_with_bounds(db, session.id, at(10, 0), at(14, 0))
        .await
        .unwrap();

    let repo = AvailabilityRepository::new(db);
    let rows = repo.get_all_by_session(session.id).await?;

    assert!(rows.is_empty());

    Ok(())
}
