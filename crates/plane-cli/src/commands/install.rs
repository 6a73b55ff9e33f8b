//! Implementation of the `plane install` command.
//!
//! Responsibility: resolve the service selection and runtime, call the core
//! compose service, and write the document behind the overwrite guard. No
//! assembly logic lives here.

use tracing::{debug, info, instrument};

use plane_adapters::stubs::default_stubs;
use plane_core::{application::ComposeService, domain::ServiceCatalog};

use crate::{
    cli::{InstallArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `plane install` command.
///
/// Dispatch sequence:
/// 1. Resolve the service selection (`none` ⇒ empty, omitted ⇒ config default)
/// 2. Assemble the compose document (runtime validated inside the core)
/// 3. Guard the destination file unless `--overwrite`
/// 4. Write and report
#[instrument(skip_all, fields(output = %args.output.display()))]
pub fn execute(
    args: InstallArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve selection + runtime.
    let services = resolve_services(args.services.as_deref(), &config);
    let runtime = args
        .runtime
        .unwrap_or_else(|| config.defaults.runtime.clone());

    debug!(runtime = %runtime, services = ?services, "installing services");

    if services.is_empty() {
        output.header("Installing Plane (no services)...")?;
    } else {
        output.header(&format!("Installing Plane with {}...", services.join(", ")))?;
    }

    // 2. Assemble before touching the destination — validation failures must
    //    not leave a partial file behind.
    let catalog = ServiceCatalog::builtin();
    let stubs = default_stubs();
    let compose = ComposeService::new(&catalog, stubs.as_ref())
        .assemble(&runtime, &services)
        .map_err(CliError::Core)?;

    // 3. Overwrite guard, checked before the write call.
    if args.output.exists() && !args.overwrite {
        return Err(CliError::ComposeFileExists { path: args.output });
    }

    // 4. Write the document.
    std::fs::write(&args.output, &compose).map_err(|e| CliError::IoError {
        message: format!("Failed to write '{}'", args.output.display()),
        source: e,
    })?;

    info!(path = %args.output.display(), "compose file written");
    output.success(&format!(
        "Plane installed: {} written",
        args.output.display()
    ))?;

    if !global.quiet {
        if services.is_empty() {
            output.print("No services selected; the compose file only defines the app container.")?;
        } else {
            output.print(&format!("Services: {}", services.join(", ")))?;
        }
        output.print(&format!("Runtime:  {runtime}"))?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  plane publish        # copy the docker runtime files")?;
        output.print("  docker compose up -d")?;
    }

    Ok(())
}

/// Turn the raw SERVICES argument into the effective selection.
///
/// The literal `none` means an empty selection; an omitted or empty argument
/// falls back to the configured default set. Whitespace around commas is
/// tolerated, empty segments are dropped, order and duplicates are kept.
fn resolve_services(raw: Option<&str>, config: &AppConfig) -> Vec<String> {
    match raw {
        None => config.defaults.services.clone(),
        Some(raw) if raw.trim().is_empty() => config.defaults.services.clone(),
        Some("none") => Vec::new(),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_selection_uses_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_services(None, &config),
            vec!["mailhog", "postgres", "redis"]
        );
        assert_eq!(
            resolve_services(Some("  "), &config),
            vec!["mailhog", "postgres", "redis"]
        );
    }

    #[test]
    fn none_selects_nothing() {
        let config = AppConfig::default();
        assert!(resolve_services(Some("none"), &config).is_empty());
    }

    #[test]
    fn explicit_list_preserves_order_and_duplicates() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_services(Some("redis, postgres,redis"), &config),
            vec!["redis", "postgres", "redis"]
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_services(Some("redis,,postgres,"), &config),
            vec!["redis", "postgres"]
        );
    }
}
