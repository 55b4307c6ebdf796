//! # bounty-frontmatter
//!
//! Reads and edits the `---` delimited metadata header of project markdown
//! files without a YAML round-trip.
//!
//! The header is treated as plain lines. Edits replace the `bounties:` span
//! and, when asked, the `project_url:` line; every other byte of the file,
//! including the delimiter lines and the body, is carried over untouched.

mod document;
mod edit;
mod error;
mod fields;
mod render;

pub use document::FrontMatter;
pub use edit::{block_span, set_field, update_bounties};
pub use error::FrontMatterError;
pub use fields::{is_key_line, strip_matching_quotes};
pub use render::render_bounties;
