//! GitHub client wrapper for deployment branch-policy operations.

use crate::config::ProviderConfig;
use crate::github::{GithubError, GithubResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};

const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// A deployment branch policy as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BranchPolicyPayload {
    pub id: u64,
    /// The branch name pattern the policy matches.
    pub name: String,
}

#[derive(Serialize)]
struct BranchPolicyRequest<'a> {
    name: &'a str,
}

pub(crate) struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(config: &ProviderConfig) -> GithubResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| {
                GithubError::Config(
                    "authentication token contains characters not allowed in a header".to_string(),
                )
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(USER_AGENT, HeaderValue::from_static("deploy-policy"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `POST /repos/{owner}/{repo}/environments/{env}/deployment-branch-policies`
    pub async fn create_branch_policy(
        &self,
        owner: &str,
        repo: &str,
        escaped_env: &str,
        pattern: &str,
    ) -> GithubResult<BranchPolicyPayload> {
        let response = self
            .http
            .post(self.policies_url(owner, repo, escaped_env))
            .json(&BranchPolicyRequest { name: pattern })
            .send()
            .await?;
        into_payload(response).await
    }

    /// `GET /repos/{owner}/{repo}/environments/{env}/deployment-branch-policies/{id}`
    pub async fn get_branch_policy(
        &self,
        owner: &str,
        repo: &str,
        escaped_env: &str,
        policy_id: u64,
    ) -> GithubResult<BranchPolicyPayload> {
        let response = self
            .http
            .get(self.policy_url(owner, repo, escaped_env, policy_id))
            .send()
            .await?;
        into_payload(response).await
    }

    /// `PUT /repos/{owner}/{repo}/environments/{env}/deployment-branch-policies/{id}`
    pub async fn update_branch_policy(
        &self,
        owner: &str,
        repo: &str,
        escaped_env: &str,
        policy_id: u64,
        pattern: &str,
    ) -> GithubResult<BranchPolicyPayload> {
        let response = self
            .http
            .put(self.policy_url(owner, repo, escaped_env, policy_id))
            .json(&BranchPolicyRequest { name: pattern })
            .send()
            .await?;
        into_payload(response).await
    }

    /// `DELETE /repos/{owner}/{repo}/environments/{env}/deployment-branch-policies/{id}`
    pub async fn delete_branch_policy(
        &self,
        owner: &str,
        repo: &str,
        escaped_env: &str,
        policy_id: u64,
    ) -> GithubResult<()> {
        let response = self
            .http
            .delete(self.policy_url(owner, repo, escaped_env, policy_id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    fn policies_url(&self, owner: &str, repo: &str, escaped_env: &str) -> String {
        format!(
            "{}/repos/{}/{}/environments/{}/deployment-branch-policies",
            self.base_url, owner, repo, escaped_env
        )
    }

    fn policy_url(&self, owner: &str, repo: &str, escaped_env: &str, policy_id: u64) -> String {
        format!("{}/{}", self.policies_url(owner, repo, escaped_env), policy_id)
    }
}

/// Classify a response by HTTP status. 404 and 304 get their own variants
/// so the lifecycle controller can give them non-error meanings.
async fn check_status(response: Response) -> GithubResult<Response> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(GithubError::NotFound),
        StatusCode::NOT_MODIFIED => Err(GithubError::NotModified),
        status if status.is_success() => Ok(response),
        status => {
            let message = response.text().await.unwrap_or_default();
            Err(GithubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

async fn into_payload(response: Response) -> GithubResult<BranchPolicyPayload> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}
