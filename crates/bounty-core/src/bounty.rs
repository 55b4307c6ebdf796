//! Bounty candidates parsed from CSV bounty slots.

use serde::{Deserialize, Serialize};

use crate::identity::{parse_issue_number, parse_provider, parse_repo_key};
use crate::money::parse_money;
use crate::provider::Provider;

/// Number of parallel `Bounty URL` / `Bounty Amount` column groups.
pub const MAX_BOUNTY_SLOTS: usize = 6;

/// One bounty attached to an issue, pull request, or merge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBounty {
    pub issue_num: u64,
    pub value: u64,
    pub repo_key: String,
    pub provider: Provider,
}

/// Column names of bounty slot `slot` (1-based).
///
/// Slot 1 is unsuffixed (`Bounty URL`), later slots carry their number
/// (`Bounty 2 URL`).
#[must_use]
pub fn slot_columns(slot: usize) -> (String, String) {
    if slot == 1 {
        ("Bounty URL".to_string(), "Bounty Amount".to_string())
    } else {
        (format!("Bounty {slot} URL"), format!("Bounty {slot} Amount"))
    }
}

/// Build a bounty from one URL / amount pair.
///
/// Returns `None` when the URL is absent or blank, or when any of the issue
/// number, provider, repo key, or value fails to parse.
#[must_use]
pub fn parse_bounty(url: Option<&str>, amount: Option<&str>) -> Option<ParsedBounty> {
    let url = url.map(str::trim).filter(|url| !url.is_empty())?;

    let issue_num = parse_issue_number(url)?;
    let provider = parse_provider(url)?;
    let repo_key = parse_repo_key(url)?;
    let value = parse_money(amount)?;

    Some(ParsedBounty {
        issue_num,
        value,
        repo_key,
        provider,
    })
}

/// Collect every parseable bounty of a row, in slot order.
///
/// `column` looks a value up by header name and returns `None` for columns
/// the export does not have.
pub fn parse_row_bounties<'a, F>(column: F) -> Vec<ParsedBounty>
where
    F: Fn(&str) -> Option<&'a str>,
{
    (1..=MAX_BOUNTY_SLOTS)
        .filter_map(|slot| {
            let (url_column, amount_column) = slot_columns(slot);
            parse_bounty(column(&url_column), column(&amount_column))
        })
        .collect()
}
