//! Deterministic string transforms used to derive identifiers from free text.
//!
//! All functions are total: they accept any input, including the empty
//! string, and never fail.
//!
//! | Input              | `slug`            | `namespace_form` | `title_form`    |
//! |--------------------|-------------------|------------------|-----------------|
//! | `"john doe"`       | `john-doe`        | `JohnDoe`        | `JohnDoe`       |
//! | `"ACME Co."`       | `acme-co`         | `AcmeCo.`        | `AcmeCo.`       |
//! | `"my_cool-package"`| `my-cool-package` | `My_coolpackage` | `MyCoolPackage` |
//!
//! Only [`slug`] strips punctuation. The other two forms keep anything that
//! is not a separator embedded in the segment it appears in.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").expect("static pattern is valid"));

/// Lowercase, hyphen-delimited, identifier-safe form.
///
/// Every maximal run of characters outside `[a-z0-9-]` collapses to a single
/// `-`, then leading and trailing hyphens are stripped. Existing hyphens are
/// kept as they are, so `slug(slug(x)) == slug(x)`.
pub fn slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Capitalized-per-word form used as a code namespace prefix.
///
/// Splits on single spaces only; hyphens are removed *after* casing, so
/// `"mary-jane"` becomes `"Maryjane"`, not `"MaryJane"`.
pub fn namespace_form(input: &str) -> String {
    input
        .split(' ')
        .map(capitalize)
        .collect::<String>()
        .replace('-', "")
}

/// Capitalized-per-word form with `-` and `_` treated as word separators.
pub fn title_form(input: &str) -> String {
    input
        .replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect()
}

/// Uppercase the first character and lowercase the remainder.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
