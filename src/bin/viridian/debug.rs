use proc_exit::prelude::*;

use crate::args;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Print the post-defaulting config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Print the bundled theme names
    Themes,
}

impl DebugCommands {
    pub(crate) fn run(&self) -> proc_exit::ExitResult {
        match self {
            Self::Config { config } => {
                let config = config.load_config().with_code(proc_exit::Code::FAILURE)?;
                let config = viridian::model::Config::from_config(config)
                    .with_code(proc_exit::Code::FAILURE)?;
                println!("{config}");
            }
            Self::Themes => {
                for theme in viridian_config::Theme::all() {
                    println!("{theme}");
                }
            }
        }

        proc_exit::Code::SUCCESS.ok()
    }
}
