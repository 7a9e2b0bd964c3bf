//! Hook declarations loaded from configuration files

mod file_loader;
mod hooks_config;

pub use file_loader::load_from_file;
pub use hooks_config::{HookDeclaration, HooksConfig};
