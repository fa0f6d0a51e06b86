use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use entity::campaign_member::CampaignRole;

use crate::{
    data::{campaign_member::CampaignMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    /// Caller must hold any role in the campaign (GM, player, or spectator).
    CampaignMember(i32),
    /// Caller must hold the GM role in the campaign.
    CampaignGm(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the calling user from the session and checks each requested
    /// permission against their campaign memberships.
    ///
    /// # Returns
    /// - `Ok(user)`: The authenticated user, all permissions satisfied
    /// - `Err(AppError::AuthErr)`: Not logged in (401) or missing role (403)
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let member_repo = CampaignMemberRepository::new(self.db);

        for permission in permissions {
            match permission {
                Permission::CampaignMember(campaign_id) => {
                    let role = member_repo.get_role(*campaign_id, user.id).await?;
                    if role.is_none() {
                        return Err(AuthError::MembershipRequired {
                            user_id: user.id,
                            campaign_id: *campaign_id,
                        }
                        .into());
                    }
                }
                Permission::CampaignGm(campaign_id) => {
                    let role = member_repo.get_role(*campaign_id, user.id).await?;
                    if role != Some(CampaignRole::Gm) {
                        return Err(AuthError::GmRequired {
                            user_id: user.id,
                            campaign_id: *campaign_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
