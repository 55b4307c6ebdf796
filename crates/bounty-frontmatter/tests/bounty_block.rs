//! End-to-end edits of project markdown text.

use bounty_core::{ParsedBounty, Provider};
use bounty_frontmatter::{FrontMatterError, update_bounties};
use pretty_assertions::assert_eq;

fn bounty(issue_num: u64, value: u64, repo_key: &str) -> ParsedBounty {
    ParsedBounty {
        issue_num,
        value,
        repo_key: repo_key.to_string(),
        provider: Provider::Github,
    }
}

const WITH_BLOCK: &str = "\
---
title: Widget
project_url: https://github.com/acme/widget
bounties:
  - issue_num: 1
    value: 100
tags: [x]
---
# Widget

Body stays as is.
";

#[test]
fn replaces_block_and_keeps_following_key() {
    let updated = update_bounties(WITH_BLOCK, &[bounty(42, 1250, "acme/widget")], None)
        .expect("edit should succeed");

    assert_eq!(
        updated,
        "\
---
title: Widget
project_url: https://github.com/acme/widget
bounties:
  - issue_num: 42
    value: 1250
tags: [x]
---
# Widget

Body stays as is.
"
    );
}

#[test]
fn appends_block_when_absent() {
    let text = "---\ntitle: Widget\nproject_url: https://github.com/acme/widget\n---\nbody\n";
    let updated = update_bounties(text, &[bounty(3, 10, "acme/other")], None)
        .expect("edit should succeed");

    assert_eq!(
        updated,
        "---\ntitle: Widget\nproject_url: https://github.com/acme/widget\nbounties:\n  - issue_num: 3\n    value: 10\n    repo: acme/other\n---\nbody\n"
    );
}

#[test]
fn empty_bounty_list_replaces_inline_value() {
    let text = "---\nproject_url: https://github.com/acme/widget\nbounties: []\nid: w\n---\n";
    let updated = update_bounties(text, &[], None).expect("edit should succeed");
    assert_eq!(updated, text);

    let filled =
        update_bounties(text, &[bounty(5, 50, "acme/widget")], None).expect("edit should succeed");
    assert_eq!(
        filled,
        "---\nproject_url: https://github.com/acme/widget\nbounties:\n  - issue_num: 5\n    value: 50\nid: w\n---\n"
    );
}

#[test]
fn second_application_is_a_no_op() {
    let bounties = [bounty(42, 1250, "acme/widget"), bounty(9, 75, "acme/core")];
    let once = update_bounties(WITH_BLOCK, &bounties, None).expect("first edit");
    let twice = update_bounties(&once, &bounties, None).expect("second edit");
    assert_eq!(once, twice);

    let synced = update_bounties(
        WITH_BLOCK,
        &bounties,
        Some("https://github.com/acme/widget-next"),
    )
    .expect("first synced edit");
    let synced_again = update_bounties(
        &synced,
        &bounties,
        Some("https://github.com/acme/widget-next"),
    )
    .expect("second synced edit");
    assert_eq!(synced, synced_again);
}

#[test]
fn override_rewrites_project_url_in_place_and_resolves_main_repo() {
    let updated = update_bounties(
        WITH_BLOCK,
        &[bounty(42, 1250, "acme/widget")],
        Some(" https://github.com/acme/widget-next "),
    )
    .expect("edit should succeed");

    assert_eq!(
        updated,
        "\
---
title: Widget
project_url: https://github.com/acme/widget-next
bounties:
  - issue_num: 42
    value: 1250
    repo: acme/widget
tags: [x]
---
# Widget

Body stays as is.
"
    );
}

#[test]
fn only_bounty_span_changes() {
    let updated = update_bounties(WITH_BLOCK, &[bounty(8, 1, "acme/widget")], None)
        .expect("edit should succeed");

    let before: Vec<&str> = WITH_BLOCK.lines().collect();
    let after: Vec<&str> = updated.lines().collect();
    assert_eq!(&before[..4], &after[..4]);
    assert_eq!(&before[6..], &after[6..]);
}

#[test]
fn preserves_crlf_line_endings() {
    let text = "---\r\ntitle: W\r\nproject_url: 'https://gitlab.com/acme/widget'\r\n---\r\nbody\r\n";
    let updated = update_bounties(
        text,
        &[ParsedBounty {
            issue_num: 2,
            value: 20,
            repo_key: "acme/widget".to_string(),
            provider: Provider::Gitlab,
        }],
        None,
    )
    .expect("edit should succeed");

    assert_eq!(
        updated,
        "---\r\ntitle: W\r\nproject_url: 'https://gitlab.com/acme/widget'\r\nbounties:\r\n  - issue_num: 2\r\n    value: 20\r\n---\r\nbody\r\n"
    );
}

#[test]
fn malformed_files_are_errors() {
    assert_eq!(
        update_bounties("no header\n", &[], None),
        Err(FrontMatterError::MissingOpeningDelimiter)
    );
    assert_eq!(
        update_bounties("---\ntitle: x\n", &[], None),
        Err(FrontMatterError::MissingClosingDelimiter)
    );
    assert_eq!(
        update_bounties("---\ntitle: x\n---\n", &[], None),
        Err(FrontMatterError::MissingField {
            field: "project_url"
        })
    );
    assert_eq!(
        update_bounties("---\nproject_url: https://example.com/x/y\n---\n", &[], None),
        Err(FrontMatterError::UnparseableProjectUrl {
            url: "https://example.com/x/y".to_string()
        })
    );
}
