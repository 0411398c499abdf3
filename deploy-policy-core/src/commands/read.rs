//! Read/refresh logic for the branch-policy service

use crate::error::ControllerResult;
use crate::github::GithubError;
use crate::identifier::{unescape_environment, ResourceId};
use crate::types::{PolicyState, ReadOutcome};
use log::info;

impl super::service::BranchPolicyService {
    /// Refresh the observed state of a branch policy.
    ///
    /// A 404 means the policy was deleted out of band: the caller should
    /// drop the stored identifier, and that drift observation is not an
    /// error. A 304 means nothing changed and prior observed state stands.
    /// Every other remote failure surfaces to the caller.
    pub async fn read(&self, id: &ResourceId) -> ControllerResult<ReadOutcome> {
        let result = self
            .client
            .get_branch_policy(&self.owner, &id.repository, &id.environment, id.policy_id)
            .await;

        match result {
            Ok(payload) => Ok(ReadOutcome::Found(PolicyState {
                id: id.encode(),
                repository: id.repository.clone(),
                environment: unescape_environment(&id.environment)?,
                branch_pattern: payload.name,
            })),
            Err(GithubError::NotModified) => Ok(ReadOutcome::NotModified),
            Err(GithubError::NotFound) => {
                info!(
                    "removing branch policy {} for {}/{}/{} from state because it no longer exists on GitHub",
                    id.policy_id, self.owner, id.repository, id.environment
                );
                Ok(ReadOutcome::Gone)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Decode an opaque token and refresh it. Fails with
    /// `MalformedIdentifier` / `InvalidPolicyId` before any remote call when
    /// the token is unusable.
    pub async fn read_token(&self, token: &str) -> ControllerResult<ReadOutcome> {
        let id = ResourceId::decode(token)?;
        self.read(&id).await
    }
}
