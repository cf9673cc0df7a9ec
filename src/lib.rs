pub mod model;

mod new;

pub use new::create_new_project;
