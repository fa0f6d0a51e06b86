use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use entity::campaign_member::CampaignRole;

/// Campaign membership lookups backing the authorization gate.
///
/// Role assignment itself (invites, membership CRUD) is handled outside the
/// scheduling subsystem; this repository only answers "which role does this
/// user hold in this campaign".
pub struct CampaignMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a user's role within a campaign.
    ///
    /// # Arguments
    /// - `campaign_id`: Campaign to check membership in
    /// - `user_id`: User whose role is requested
    ///
    /// # Returns
    /// - `Ok(Some(role))`: The user's role in the campaign
    /// - `Ok(None)`: The user is not a member of the campaign
    /// - `Err(DbErr)`: Database error
    pub async fn get_role(
        &self,
        campaign_id: i32,
        user_id: i32,
    ) -> Result<Option<CampaignRole>, DbErr> {
        let membership = entity::prelude::CampaignMember::find()
            .filter(entity::campaign_member::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(membership.map(|m| m.role))
    }
}
