//! Rendering of the `bounties:` block.

use bounty_core::ParsedBounty;

/// Render the `bounties:` block as header lines ending in `newline`.
///
/// `repo` is only written for bounties filed against a repository other
/// than `main_repo_key` (compared case-insensitively).
#[must_use]
pub fn render_bounties(
    bounties: &[ParsedBounty],
    main_repo_key: &str,
    newline: &str,
) -> Vec<String> {
    if bounties.is_empty() {
        return vec![format!("bounties: []{newline}")];
    }

    let mut lines = Vec::with_capacity(1 + bounties.len() * 3);
    lines.push(format!("bounties:{newline}"));
    for bounty in bounties {
        lines.push(format!("  - issue_num: {}{newline}", bounty.issue_num));
        lines.push(format!("    value: {}{newline}", bounty.value));
        if !bounty.repo_key.eq_ignore_ascii_case(main_repo_key) {
            lines.push(format!("    repo: {}{newline}", bounty.repo_key));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use bounty_core::{ParsedBounty, Provider};
    use pretty_assertions::assert_eq;

    use super::render_bounties;

    fn bounty(issue_num: u64, value: u64, repo_key: &str) -> ParsedBounty {
        ParsedBounty {
            issue_num,
            value,
            repo_key: repo_key.to_string(),
            provider: Provider::Github,
        }
    }

    #[test]
    fn empty_list_renders_inline() {
        assert_eq!(render_bounties(&[], "acme/widget", "\n"), vec!["bounties: []\n"]);
    }

    #[test]
    fn same_repo_bounties_omit_repo_field() {
        let lines = render_bounties(
            &[bounty(42, 1250, "Acme/Widget"), bounty(7, 300, "acme/core")],
            "acme/widget",
            "\n",
        );
        assert_eq!(
            lines.concat(),
            "bounties:\n  - issue_num: 42\n    value: 1250\n  - issue_num: 7\n    value: 300\n    repo: acme/core\n"
        );
    }

    #[test]
    fn follows_requested_line_ending() {
        let lines = render_bounties(&[bounty(1, 5, "acme/widget")], "acme/widget", "\r\n");
        assert!(lines.iter().all(|line| line.ends_with("\r\n")));
    }
}
