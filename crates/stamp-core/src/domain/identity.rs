//! Identity value types: what version control knows about the author, and
//! the defaults offered to the scaffolding flow.

use serde::Serialize;

use crate::domain::text::{namespace_form, slug};

/// Marker that provider automation puts in commit author names.
const BOT_MARKER: &str = "[bot]";

/// Local version-control identity (`user.name` / `user.email`).
///
/// Absent values are empty strings, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VcsIdentity {
    pub name: String,
    pub email: String,
}

impl VcsIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One author entry from repository history.
///
/// Scratch data for handle inference; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub name: String,
    pub email: String,
}

impl CommitRecord {
    /// Parse one `name:email` history line.
    ///
    /// The name is everything before the first `:`, the email everything
    /// between the first and second `:` (empty if missing). Blank lines
    /// yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut parts = line.split(':');
        let name = parts.next().unwrap_or_default().to_string();
        let email = parts.next().unwrap_or_default().to_string();
        Some(Self { name, email })
    }

    /// Parse raw multi-line history output, preserving order.
    pub fn parse_all(raw: &str) -> Vec<Self> {
        raw.lines().filter_map(Self::parse_line).collect()
    }

    /// Case-insensitive match on the author display name.
    pub fn is_authored_by(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn is_bot(&self) -> bool {
        self.name.contains(BOT_MARKER)
    }

    /// Local part of the email (text before the first `@`).
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

/// Author defaults: identity plus best-guess provider handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    /// Empty when no strategy produced a handle.
    pub handle: String,
}

/// Vendor defaults.
///
/// `slug` and `namespace` are derived from `display_name` at construction
/// and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorInfo {
    display_name: String,
    handle: String,
    slug: String,
    namespace: String,
}

impl VendorInfo {
    pub fn new(display_name: impl Into<String>, handle: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            slug: slug(&display_name),
            namespace: namespace_form(&display_name),
            handle: handle.into(),
            display_name,
        }
    }

    /// Vendor identity that is just the author acting as their own vendor.
    pub fn from_author(author_name: &str, author_handle: &str) -> Self {
        Self::new(author_name, author_handle)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Everything the scaffolding flow pre-fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityDefaults {
    pub author: AuthorInfo,
    pub vendor: VendorInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_name_and_email() {
        let line = "  Alice:alice@users.noreply.github.com ";
        let record = CommitRecord::parse_line(line).unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "alice@users.noreply.github.com");
    }

    #[test]
    fn parse_line_without_email() {
        let record = CommitRecord::parse_line("Alice").unwrap();
        assert_eq!(record.email, "");
        assert_eq!(record.email_local_part(), "");
    }

    #[test]
    fn parse_line_drops_text_after_second_colon() {
        let record = CommitRecord::parse_line("A:b@x:extra").unwrap();
        assert_eq!(record.name, "A");
        assert_eq!(record.email, "b@x");
    }

    #[test]
    fn parse_line_blank_is_none() {
        assert!(CommitRecord::parse_line("   ").is_none());
    }

    #[test]
    fn parse_all_preserves_order_and_skips_blanks() {
        let records = CommitRecord::parse_all("a:1@x\n\nb:2@x\n");
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn authored_by_ignores_case() {
        let record = CommitRecord::parse_line("ALICE:a@x").unwrap();
        assert!(record.is_authored_by("alice"));
        assert!(!record.is_authored_by("bob"));
    }

    #[test]
    fn bot_marker_detected() {
        let line = "dependabot[bot]:1+dependabot[bot]@x";
        let record = CommitRecord::parse_line(line).unwrap();
        assert!(record.is_bot());
    }

    #[test]
    fn vendor_derives_slug_and_namespace() {
        let vendor = VendorInfo::new("ACME Co.", "acme");
        assert_eq!(vendor.display_name(), "ACME Co.");
        assert_eq!(vendor.handle(), "acme");
        assert_eq!(vendor.slug(), "acme-co");
        assert_eq!(vendor.namespace(), "AcmeCo.");
    }

    #[test]
    fn vendor_serializes_all_fields() {
        let vendor = VendorInfo::new("john doe", "jd");
        let json = serde_json::to_value(vendor).unwrap();
        assert_eq!(json["display_name"], "john doe");
        assert_eq!(json["slug"], "john-doe");
        assert_eq!(json["namespace"], "JohnDoe");
    }
}
