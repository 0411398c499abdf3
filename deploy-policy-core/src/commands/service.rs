//! Branch-Policy Service Layer
//!
//! This module provides the main service interface that encapsulates the
//! lifecycle logic for deployment branch policies. The service holds the
//! GitHub client and the owner namespace and provides the CRUD operations
//! invoked by an external reconciler (CLI, automation).

use crate::config::ProviderConfig;
use crate::error::ControllerResult;
use crate::github::branch_policy_client::GithubClient;

/// Main service struct that holds the remote client and owner context.
///
/// Both fields are read-only after construction, so a single instance may
/// be shared across tasks operating on different resources. Ordering of
/// concurrent operations on the *same* identifier is the caller's
/// responsibility.
pub struct BranchPolicyService {
    pub(crate) client: GithubClient,
    pub(crate) owner: String,
}

impl BranchPolicyService {
    /// Create a new service instance from a typed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed from the
    /// configured credentials.
    pub fn new(config: &ProviderConfig) -> ControllerResult<Self> {
        Ok(Self {
            client: GithubClient::new(config)?,
            owner: config.owner.clone(),
        })
    }

    // create() implementation is in create.rs
    // read() implementation is in read.rs
    // update() implementation is in update.rs
    // delete() implementation is in delete.rs
    // import() implementation is in import.rs
}
