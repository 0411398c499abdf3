//! Delete logic for the branch-policy service

use crate::error::ControllerResult;
use crate::identifier::ResourceId;
use log::debug;

impl super::service::BranchPolicyService {
    /// Delete the remote branch policy.
    ///
    /// Unlike `read`, a policy that is already gone is NOT suppressed here:
    /// deleting an absent resource surfaces the remote 404 as an error.
    pub async fn delete(&self, id: &ResourceId) -> ControllerResult<()> {
        self.client
            .delete_branch_policy(&self.owner, &id.repository, &id.environment, id.policy_id)
            .await?;

        debug!(
            "deleted branch policy {} for {}/{}/{}",
            id.policy_id, self.owner, id.repository, id.environment
        );
        Ok(())
    }
}
