//! Implementation of the `plane publish` command.
//!
//! Responsibility: validate the part list, then run the core publish service
//! for each requested part. Copy semantics live in the core; this module only
//! wires adapters and renders results.

use tracing::{info, instrument};

use plane_adapters::{BundledAssets, LocalFilesystem};
use plane_core::application::{PublishService, RewriteStatus};

use crate::{
    cli::{Part, PublishArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `plane publish` command.
///
/// Every part name is validated before any side effect, so a typo never
/// leaves a half-published project behind. Parts are then processed in the
/// order given on the command line.
#[instrument(skip_all, fields(parts = %args.parts))]
pub fn execute(
    args: PublishArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let parts = parse_parts(&args.parts)?;

    let fs = LocalFilesystem::new();
    let assets = BundledAssets::new();
    let service = PublishService::new(&fs, &assets);

    for part in parts {
        match part {
            Part::Bin => {
                output.info(&format!(
                    "Publishing Plane binary to {}",
                    args.bin_dest.display()
                ))?;
                let target = service
                    .publish_binary(&args.bin_dest, args.overwrite)
                    .map_err(CliError::Core)?;
                output.success(&format!("Binary published to {}", target.display()))?;
                output.warning(&format!(
                    "Remember to update any tools referencing the Plane binary to use {}",
                    target.display()
                ))?;
            }
            Part::Docker => {
                output.info(&format!(
                    "Publishing Plane docker files to {}",
                    args.docker_dest.display()
                ))?;
                let outcome = service
                    .publish_runtime_assets(&args.docker_dest, &args.compose_file, args.overwrite)
                    .map_err(CliError::Core)?;
                output.success(&format!(
                    "{} docker files published to {}",
                    outcome.files,
                    args.docker_dest.display()
                ))?;

                match outcome.rewrite {
                    RewriteStatus::Updated => {
                        output.info(&format!(
                            "{} now points at the published docker files",
                            args.compose_file.display()
                        ))?;
                    }
                    RewriteStatus::Unchanged => {
                        info!(compose = %args.compose_file.display(), "no runtime reference to rewrite");
                    }
                    RewriteStatus::Failed(reason) => {
                        output.warning(&format!(
                            "Failed to update {}: {reason}",
                            args.compose_file.display()
                        ))?;
                        output.warning(&format!(
                            "Update it manually to point at the docker files in {}",
                            args.docker_dest.display()
                        ))?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Parse the comma-separated part list, rejecting the whole request on the
/// first unrecognized name.
fn parse_parts(raw: &str) -> CliResult<Vec<Part>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| {
            Part::parse(name).ok_or_else(|| CliError::UnknownPart { part: name.into() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_parts_in_order() {
        assert_eq!(
            parse_parts("bin,docker").unwrap(),
            vec![Part::Bin, Part::Docker]
        );
        assert_eq!(parse_parts(" docker , bin ").unwrap(), vec![Part::Docker, Part::Bin]);
    }

    #[test]
    fn unknown_part_fails_the_whole_list() {
        let err = parse_parts("docker,everything").unwrap_err();
        assert!(matches!(err, CliError::UnknownPart { ref part } if part == "everything"));
    }

    #[test]
    fn empty_segments_are_ignored() {
        assert_eq!(parse_parts("docker,").unwrap(), vec![Part::Docker]);
    }
}
