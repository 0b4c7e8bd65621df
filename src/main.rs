//! Main entry point for the lichess-gist updater
//!
//! Reads credentials, fetches the player's ratings from lichess and rewrites
//! the configured gist, once per invocation.

use anyhow::Result;
use clap::Parser;
use lichess_gist::config::app::{
    ENV_VAR_GIST_ID, ENV_VAR_GITHUB_TOKEN, ENV_VAR_LICHESS_USERNAME,
};
use lichess_gist::config::AppConfig;
use lichess_gist::GistUpdater;
use std::collections::HashMap;
use std::env;
use tracing::{error, info};

/// Publish lichess ratings to a GitHub gist
#[derive(Parser)]
#[command(
    name = "lichess-gist",
    version,
    about = "Publish a lichess player's ratings to a GitHub gist",
    long_about = "Reads GIST_ID, GH_TOKEN and LICHESS_USERNAME from the environment, fetches \
                 the player's ratings from lichess and overwrites the first file of the gist. \
                 For manual runs the three values can be passed positionally after a mode word, \
                 e.g. `lichess-gist test <gist> <token> <user>`."
)]
struct Args {
    /// Mode word for manual runs; its value is ignored
    #[arg(
        value_name = "MODE",
        requires_all = ["gist_id", "github_token", "lichess_username"]
    )]
    mode: Option<String>,

    /// Gist to update, overrides GIST_ID
    #[arg(value_name = "GIST_ID")]
    gist_id: Option<String>,

    /// GitHub token, overrides GH_TOKEN
    #[arg(value_name = "GH_TOKEN")]
    github_token: Option<String>,

    /// lichess account, overrides LICHESS_USERNAME
    #[arg(value_name = "LICHESS_USERNAME")]
    lichess_username: Option<String>,
}

impl Args {
    fn overrides(&self) -> HashMap<&'static str, String> {
        [
            (ENV_VAR_GIST_ID, &self.gist_id),
            (ENV_VAR_GITHUB_TOKEN, &self.github_token),
            (ENV_VAR_LICHESS_USERNAME, &self.lichess_username),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|value| (name, value)))
        .collect()
    }
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Look a variable up in the argv overrides first, then in `fallback`
fn lookup_with_overrides<'a, F>(
    overrides: &'a HashMap<&'static str, String>,
    fallback: F,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'static,
{
    move |name: &str| overrides.get(name).cloned().or_else(|| fallback(name))
}

/// Load configuration, letting positional arguments win over the environment
fn load_config(args: &Args) -> Result<AppConfig> {
    let overrides = args.overrides();
    AppConfig::from_lookup(lookup_with_overrides(&overrides, |name| env::var(name).ok()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Nothing touches the network until the configuration is complete
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Updating gist {} for lichess user {}",
        config.credentials.gist_id, config.credentials.lichess_username
    );

    let updater = GistUpdater::from_config(&config)?;
    match updater.run().await {
        Ok(summary) => {
            info!(
                "Done: {} variants written to {}",
                summary.variant_count, summary.file_name
            );
            Ok(())
        }
        Err(e) => {
            error!("Update failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_positional_values_become_overrides() {
        let args = Args::try_parse_from(["lichess-gist", "test", "g", "t", "u"]).unwrap();
        let overrides = args.overrides();

        assert_eq!(overrides.len(), 3);
        assert_eq!(overrides[ENV_VAR_GIST_ID], "g");
        assert_eq!(overrides[ENV_VAR_GITHUB_TOKEN], "t");
        assert_eq!(overrides[ENV_VAR_LICHESS_USERNAME], "u");
    }

    #[test]
    fn test_no_arguments_means_no_overrides() {
        let args = Args::try_parse_from(["lichess-gist"]).unwrap();
        assert!(args.overrides().is_empty());
    }

    #[test]
    fn test_partial_positionals_are_rejected() {
        assert!(Args::try_parse_from(["lichess-gist", "test", "g"]).is_err());
        assert!(Args::try_parse_from(["lichess-gist", "test", "g", "t"]).is_err());
    }

    #[test]
    fn test_argv_wins_over_env() {
        let args = Args::try_parse_from([
            "lichess-gist",
            "test",
            "argv-gist",
            "argv-token",
            "argv-user",
        ])
        .unwrap();
        let overrides = args.overrides();
        let env = env_of(&[
            ("GIST_ID", "env-gist"),
            ("GH_TOKEN", "env-token"),
            ("LICHESS_USERNAME", "env-user"),
            ("LOG_LEVEL", "debug"),
        ]);

        let config = AppConfig::from_lookup(lookup_with_overrides(&overrides, env)).unwrap();
        assert_eq!(config.credentials.gist_id, "argv-gist");
        assert_eq!(config.credentials.github_token, "argv-token");
        assert_eq!(config.credentials.lichess_username, "argv-user");
        assert_eq!(config.service.log_level, "debug");
    }

    #[test]
    fn test_env_used_without_argv() {
        let args = Args::try_parse_from(["lichess-gist"]).unwrap();
        let overrides = args.overrides();
        let env = env_of(&[
            ("GIST_ID", "env-gist"),
            ("GH_TOKEN", "env-token"),
            ("LICHESS_USERNAME", "env-user"),
        ]);

        let config = AppConfig::from_lookup(lookup_with_overrides(&overrides, env)).unwrap();
        assert_eq!(config.credentials.gist_id, "env-gist");
        assert_eq!(config.credentials.lichess_username, "env-user");
    }
}
