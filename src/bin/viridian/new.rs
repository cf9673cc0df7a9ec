use std::path;

use proc_exit::prelude::*;

/// Create a new viridian site
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Directory to create the site in
    #[arg(default_value = "./")]
    directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> proc_exit::ExitResult {
        viridian::create_new_project(&self.directory).with_code(proc_exit::Code::FAILURE)?;
        log::info!("created new site in `{}`", self.directory.display());
        proc_exit::Code::SUCCESS.ok()
    }
}
