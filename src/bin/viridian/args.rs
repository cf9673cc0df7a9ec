use std::path;

use anyhow::Context as _;

/// Static site generator for data-driven docs sites
#[derive(Debug, clap::Parser)]
#[command(name = "viridian", version, propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    Init(crate::new::InitArgs),
    Check(crate::check::CheckArgs),
    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _viridian.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Source content directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    root: Option<String>,

    /// Build destination directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    output: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<viridian_config::Config> {
        let mut config = if let Some(config_path) = self.config.as_deref() {
            viridian_config::Config::from_file(config_path)
                .with_context(|| format!("failed to load config `{}`", config_path.display()))?
        } else {
            let cwd =
                std::env::current_dir().context("failed to determine the current directory")?;
            viridian_config::Config::from_cwd(cwd)?
        };

        if let Some(root) = self.root.as_deref() {
            config.root = Some(root.try_into()?);
        }
        if let Some(output) = self.output.as_deref() {
            config.output = Some(output.try_into()?);
        }

        Ok(config)
    }
}
