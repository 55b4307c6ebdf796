//! # bounty-core
//!
//! Pure parsing primitives shared by every bounty-sync crate:
//! - Hosted-VCS provider detection and canonical repository identity
//! - Issue / pull request / merge request number extraction
//! - Free-form money parsing
//! - Token normalization for fuzzy name matching
//! - `ParsedBounty` construction from CSV bounty slots
//!
//! Nothing in this crate touches the filesystem. Every string-derived parser
//! returns `None` for malformed input; callers treat that as "skip", never as
//! a fatal condition.

pub mod bounty;
pub mod errors;
pub mod identity;
pub mod money;
pub mod normalize;
pub mod provider;

pub use bounty::{MAX_BOUNTY_SLOTS, ParsedBounty, parse_bounty, parse_row_bounties, slot_columns};
pub use errors::CoreError;
pub use identity::{
    Namespace, RepoIdentity, canonical_url, parse_issue_number, parse_namespace, parse_provider,
    parse_repo_identity, parse_repo_key,
};
pub use money::parse_money;
pub use normalize::normalize_token;
pub use provider::Provider;
