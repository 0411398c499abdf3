//! Update logic for the branch-policy service

use crate::error::ControllerResult;
use crate::identifier::{escape_environment, ResourceId};
use crate::types::{DesiredPolicy, ReadOutcome};
use log::debug;

impl super::service::BranchPolicyService {
    /// Change the branch pattern of an existing policy in place.
    ///
    /// Only the policy id is taken from the stored identifier; repository
    /// and environment come from the desired state, which must match the
    /// immutable values recorded at create time. The identifier is
    /// re-encoded from the returned policy id (the remote may issue a new
    /// one) and confirmed with a read.
    pub async fn update(
        &self,
        id: &ResourceId,
        desired: &DesiredPolicy,
    ) -> ControllerResult<(ResourceId, ReadOutcome)> {
        let escaped_env = escape_environment(&desired.environment);

        let payload = self
            .client
            .update_branch_policy(
                &self.owner,
                &desired.repository,
                &escaped_env,
                id.policy_id,
                &desired.branch_pattern,
            )
            .await?;

        debug!(
            "updated branch policy {} for {}/{}/{}",
            payload.id, self.owner, desired.repository, desired.environment
        );

        let id = ResourceId::new(desired.repository.clone(), escaped_env, payload.id)?;
        let outcome = self.read(&id).await?;
        Ok((id, outcome))
    }
}
