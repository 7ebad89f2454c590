//! End-to-end identity resolution through the in-memory adapters.

use stamp_adapters::{MemoryVcs, OfflineDirectory, StaticDirectory};
use stamp_core::{
    application::IdentityService,
    domain::{ProviderHost, VendorInfo},
};

fn service(vcs: &MemoryVcs, directory: &StaticDirectory) -> IdentityService {
    IdentityService::new(
        Box::new(vcs.clone()),
        Box::new(directory.clone()),
        ProviderHost::default(),
    )
}

#[test]
fn author_from_noreply_history() {
    let vcs = MemoryVcs::new()
        .with_config("user.name", "Alice")
        .with_config("user.email", "alice@example.com")
        .with_history([
            "dependabot[bot]:49699333+dependabot[bot]@users.noreply.github.com",
            "Alice:alice@users.noreply.github.com",
            "Alice:alice-old@users.noreply.github.com",
        ])
        .with_session_status("Logged in to github.com as someone-else (keyring)")
        .with_remote("git@github.com:acme/widgets.git");
    let svc = service(&vcs, &StaticDirectory::new());

    let author = svc.resolve_author();
    assert_eq!(author.name, "Alice");
    assert_eq!(author.email, "alice@example.com");
    assert_eq!(author.handle, "alice");
    assert_eq!(vcs.history_patterns(), ["@users.noreply.github.com"]);
}

#[test]
fn enterprise_host_changes_noreply_pattern() {
    let vcs = MemoryVcs::new()
        .with_config("user.name", "Alice")
        .with_history(["Alice:alice@users.noreply.github.com"]);
    let svc = IdentityService::new(
        Box::new(vcs.clone()),
        Box::new(OfflineDirectory::new()),
        ProviderHost::new("git.example.org").unwrap(),
    );

    assert_eq!(svc.resolve_author_handle(), "");
    assert_eq!(vcs.history_patterns(), ["@users.noreply.git.example.org"]);
}

#[test]
fn author_from_session_when_history_is_empty() {
    let status = "github.com\n  ✓ Logged in to github.com as alice-cli (oauth_token)\n";
    let vcs = MemoryVcs::new()
        .with_config("user.name", "Alice")
        .with_history(Vec::<String>::new())
        .with_session_status(status);
    let svc = service(&vcs, &StaticDirectory::new());

    assert_eq!(svc.resolve_author_handle(), "alice-cli");
}

#[tokio::test]
async fn vendor_from_organization_lookup() {
    let vcs = MemoryVcs::new()
        .with_remote("git@github.com:acme/widgets.git");
    let directory = StaticDirectory::new()
        .with_organization("acme", Some("ACME Co."), Some("acme"));
    let svc = service(&vcs, &directory);

    let vendor = svc.resolve_vendor_info("Alice", "alice").await;
    assert_eq!(vendor.display_name(), "ACME Co.");
    assert_eq!(vendor.handle(), "acme");
    assert_eq!(vendor.slug(), "acme-co");
    assert_eq!(vendor.namespace(), "AcmeCo.");
    assert_eq!(directory.lookups(), ["acme"]);
}

#[tokio::test]
async fn vendor_unknown_organization_falls_back() {
    let vcs = MemoryVcs::new()
        .with_remote("git@github.com:alice/dotfiles.git");
    let directory = StaticDirectory::new();
    let svc = service(&vcs, &directory);

    let vendor = svc.resolve_vendor_info("Alice Smith", "alice").await;
    assert_eq!(vendor, VendorInfo::new("Alice Smith", "alice"));
    assert_eq!(vendor.slug(), "alice-smith");
    assert_eq!(vendor.namespace(), "AliceSmith");
    assert_eq!(directory.lookups(), ["alice"]);
}

#[tokio::test]
async fn vendor_without_remote_skips_lookup() {
    let directory = StaticDirectory::new();
    let svc = service(&MemoryVcs::new(), &directory);

    let vendor = svc.resolve_vendor_info("Alice", "alice").await;
    assert_eq!(vendor, VendorInfo::new("Alice", "alice"));
    assert!(directory.lookups().is_empty());
}

#[tokio::test]
async fn defaults_resolve_author_then_vendor() {
    let vcs = MemoryVcs::new()
        .with_config("user.name", "Alice")
        .with_config("user.email", "alice@example.com")
        .with_history(["Alice:alice@users.noreply.github.com"])
        .with_remote("git@github.com:acme/widgets.git");
    let directory = StaticDirectory::new()
        .with_organization("acme", None, Some("acme-hq"));
    let svc = service(&vcs, &directory);

    let defaults = svc.resolve_defaults().await;
    assert_eq!(defaults.author.handle, "alice");
    assert_eq!(defaults.vendor.display_name(), "Alice");
    assert_eq!(defaults.vendor.handle(), "acme-hq");
}
