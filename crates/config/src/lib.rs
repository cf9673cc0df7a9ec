mod config;
mod pages;
mod theme;

pub mod path;

pub use self::config::*;
pub use self::pages::*;
pub use self::theme::*;

pub use self::path::RelPath;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
