use proc_exit::prelude::*;

use crate::args;

/// Validate the site configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> proc_exit::ExitResult {
        let config = self.config.load_config().with_code(proc_exit::Code::FAILURE)?;
        let config =
            viridian::model::Config::from_config(config).with_code(proc_exit::Code::FAILURE)?;
        log::info!("config ok: site `{}`", config.title);
        proc_exit::Code::SUCCESS.ok()
    }
}
