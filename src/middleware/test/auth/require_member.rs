use super::*;

/// Tests that a campaign member passes the membership check.
///
/// Expected: Ok(User) for a player-role member
#[tokio::test]
async fn grants_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let campaign = factory::create_campaign(db).await?;
    factory::create_member(db, campaign.id, user.id).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignMember(campaign.id)])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that a spectator passes the membership check.
///
/// Membership is satisfied by any role, spectators included.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_spectator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let campaign = factory::create_campaign(db).await?;
    factory::create_member_with_role(db, campaign.id, user.id, CampaignRole::Spectator).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignMember(campaign.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a logged-in non-member is denied.
///
/// Expected: Err(AuthError::MembershipRequired)
#[tokio::test]
async fn denies_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let campaign = factory::create_campaign(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignMember(campaign.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::MembershipRequired {
            user_id,
            campaign_id,
        })) => {
            assert_eq!(user_id, user.id);
            assert_eq!(campaign_id, campaign.id);
        }
        other => panic!("Expected MembershipRequired, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a request without a logged-in user is denied.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn denies_when_not_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let campaign = factory::create_campaign(db).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignMember(campaign.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_scheduling_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let campaign = factory::create_campaign(db).await?;

    AuthSession::new(session).set_user_id(9999).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignMember(campaign.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}
