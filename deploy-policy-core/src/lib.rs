//! This crate provides the core business logic for deployment branch-policy
//! management:
//! - Identifier codec for the `repository:environment:policyId` token
//! - GitHub Environment deployment-branch-policy API client
//! - CRUD lifecycle controller driven by an external reconciler
//!

mod commands;
mod config;
mod error;
mod github;
mod identifier;
mod types;

// Re-exports for a small, focused public API
pub use commands::BranchPolicyService;
pub use config::{ProviderConfig, BASE_URL_ENV, OWNER_ENV, TOKEN_ENV};
pub use error::{ControllerError, ControllerResult};
pub use github::GithubError;
pub use identifier::{escape_environment, unescape_environment, ResourceId};
pub use types::{DesiredPolicy, PolicyState, ReadOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        let id = ResourceId::new("r1", escape_environment("test"), 99).expect("valid components");
        assert_eq!(id.encode(), "r1:test:99");
        assert_eq!(ResourceId::decode("r1:test:99").expect("should decode"), id);
    }
}
