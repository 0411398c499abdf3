//! Command-line adapter for the branch-policy lifecycle controller.
//!
//! The JSON state file passed via `--state` is the durable record an
//! external reconciler holds between invocations: the opaque identifier
//! plus the three declared fields. `read` refreshes it and clears it when
//! the remote reports the policy gone (out-of-band drift).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use deploy_policy_core::{
    BranchPolicyService, DesiredPolicy, PolicyState, ProviderConfig, ReadOutcome, ResourceId,
    BASE_URL_ENV, OWNER_ENV, TOKEN_ENV,
};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "deploy-policy",
    version,
    about = "Manage GitHub environment deployment branch policies"
)]
struct Cli {
    /// GitHub token with permission to manage repository environments.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    github_token: String,

    /// Organization or account that owns the repository.
    #[arg(long, env = OWNER_ENV)]
    github_owner: String,

    /// Base URL of the GitHub API (for GitHub Enterprise deployments).
    #[arg(long, env = BASE_URL_ENV)]
    github_base_url: Option<String>,

    /// Path of the JSON state record kept between invocations.
    #[arg(long, default_value = "deploy-policy.state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a branch policy and record its identifier.
    Create {
        /// Name of the repository (immutable after creation).
        #[arg(long)]
        repository: String,
        /// Name of the deployment environment (immutable after creation).
        #[arg(long)]
        environment: String,
        /// Pattern that branches must match to deploy to the environment.
        #[arg(long)]
        branch_pattern: String,
    },
    /// Refresh the recorded state from GitHub, detecting drift.
    Read,
    /// Change the branch pattern of the recorded policy.
    Update {
        #[arg(long)]
        branch_pattern: String,
    },
    /// Delete the recorded policy.
    Delete,
    /// Adopt an existing policy from its identifier token.
    Import {
        /// Opaque identifier, `repository:environment:policyId`.
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ProviderConfig::new(cli.github_token, cli.github_owner);
    if let Some(base_url) = cli.github_base_url {
        config = config.with_base_url(base_url);
    }
    let service = BranchPolicyService::new(&config)?;

    match cli.command {
        Command::Create {
            repository,
            environment,
            branch_pattern,
        } => {
            let desired = DesiredPolicy {
                repository,
                environment,
                branch_pattern,
            };
            let (id, outcome) = service.create(&desired).await?;
            let state = confirmed_state(&id, &desired, outcome)?;
            store_state(&cli.state, &state)?;
            eprintln!("created branch policy {}", state.id);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Read => {
            let prior = load_state(&cli.state)?;
            let id = ResourceId::decode(&prior.id)?;
            match service.read(&id).await? {
                ReadOutcome::Found(state) => {
                    store_state(&cli.state, &state)?;
                    println!("{}", serde_json::to_string_pretty(&state)?);
                }
                ReadOutcome::NotModified => {
                    eprintln!("branch policy {} unchanged", prior.id);
                    println!("{}", serde_json::to_string_pretty(&prior)?);
                }
                ReadOutcome::Gone => {
                    clear_state(&cli.state)?;
                    eprintln!(
                        "branch policy {} no longer exists on GitHub; cleared local record",
                        prior.id
                    );
                }
            }
        }
        Command::Update { branch_pattern } => {
            let prior = load_state(&cli.state)?;
            let id = ResourceId::decode(&prior.id)?;
            let desired = DesiredPolicy {
                repository: prior.repository,
                environment: prior.environment,
                branch_pattern,
            };
            let (id, outcome) = service.update(&id, &desired).await?;
            let state = confirmed_state(&id, &desired, outcome)?;
            store_state(&cli.state, &state)?;
            eprintln!("updated branch policy {}", state.id);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Delete => {
            let prior = load_state(&cli.state)?;
            let id = ResourceId::decode(&prior.id)?;
            service.delete(&id).await?;
            clear_state(&cli.state)?;
            eprintln!("deleted branch policy {}", prior.id);
        }
        Command::Import { id } => {
            let state = service.import(&id).await?;
            store_state(&cli.state, &state)?;
            eprintln!("imported branch policy {}", state.id);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    Ok(())
}

/// Resolve the confirmation-read outcome of create/update into the record
/// to persist.
fn confirmed_state(
    id: &ResourceId,
    desired: &DesiredPolicy,
    outcome: ReadOutcome,
) -> Result<PolicyState> {
    match outcome {
        ReadOutcome::Found(state) => Ok(state),
        // The confirmation read carries no cache validator, so a 304
        // effectively confirms the desired attributes.
        ReadOutcome::NotModified => Ok(PolicyState {
            id: id.encode(),
            repository: desired.repository.clone(),
            environment: desired.environment.clone(),
            branch_pattern: desired.branch_pattern.clone(),
        }),
        ReadOutcome::Gone => bail!(
            "branch policy {} disappeared before it could be confirmed",
            id.encode()
        ),
    }
}

fn load_state(path: &Path) -> Result<PolicyState> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!(
            "no state record at {}; run create or import first",
            path.display()
        )
    })?;
    serde_json::from_str(&raw)
        .with_context(|| format!("state record {} is not valid JSON", path.display()))
}

fn store_state(path: &Path, state: &PolicyState) -> Result<()> {
    let raw = serde_json::to_string_pretty(state)?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write state record {}", path.display()))?;
    info!("state record written to {}", path.display());
    Ok(())
}

fn clear_state(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove state record {}", path.display()))?;
    }
    Ok(())
}
