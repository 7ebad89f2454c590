//! `stamp identity`: show inferred author and vendor defaults.

use stamp_adapters::{GitCliReader, GitHubDirectory, OfflineDirectory};
use stamp_core::application::{DirectoryClient, IdentityService};
use stamp_core::domain::{AuthorInfo, IdentityDefaults, VendorInfo};
use tracing::{debug, instrument};

use crate::{
    cli::{IdentityArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Resolve author then vendor, and render both.
#[instrument(skip_all, fields(offline = args.offline))]
pub fn execute(args: IdentityArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_service(&args, &config)?;

    // One lookup at most; a current-thread runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start the async runtime")?;

    let author = service.resolve_author();
    debug!(handle = %author.handle, "author resolved");

    let spinner = output.spinner("Looking up organization...");
    let lookup = service.resolve_vendor_info(&author.name, &author.handle);
    let vendor = runtime.block_on(lookup);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    render(&IdentityDefaults { author, vendor }, &output)
}

fn build_service(args: &IdentityArgs, config: &AppConfig) -> CliResult<IdentityService> {
    let mut vcs = GitCliReader::new();
    if let Some(dir) = &args.dir {
        vcs = vcs.in_dir(dir);
    }

    let directory: Box<dyn DirectoryClient> = if args.offline || !config.lookup.enabled {
        Box::new(OfflineDirectory::new())
    } else {
        let github = GitHubDirectory::new(
            config.provider.api_base_url.as_str(),
            &config.provider.user_agent,
        )
        .with_cli_context(|| "Failed to set up the organization lookup")?;
        Box::new(github)
    };

    Ok(IdentityService::new(
        Box::new(vcs),
        directory,
        config.provider.host.clone(),
    ))
}

fn render(defaults: &IdentityDefaults, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(defaults)?;
        return Ok(());
    }

    render_author(&defaults.author, output)?;
    output.print("")?;
    render_vendor(&defaults.vendor, output)?;
    Ok(())
}

fn render_author(author: &AuthorInfo, output: &OutputManager) -> CliResult<()> {
    output.header("Author")?;
    output.field("name", &author.name)?;
    output.field("email", &author.email)?;
    output.field("handle", &author.handle)?;
    Ok(())
}

fn render_vendor(vendor: &VendorInfo, output: &OutputManager) -> CliResult<()> {
    output.header("Vendor")?;
    output.field("name", vendor.display_name())?;
    output.field("handle", vendor.handle())?;
    output.field("slug", vendor.slug())?;
    output.field("namespace", vendor.namespace())?;
    Ok(())
}
