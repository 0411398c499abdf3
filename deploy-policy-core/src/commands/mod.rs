//! Commands module - lifecycle operations of the branch-policy service

mod create;
mod delete;
mod import;
mod read;
pub(crate) mod service;
mod update;

pub use service::BranchPolicyService;
