//! Registro de lanzamiento, claves reservadas y particionado de overrides.

mod args;
mod builder;
mod reserved;

pub use args::{LaunchArgs, OverrideEntry};
pub use builder::{build_and_dispatch, build_launch_args};
pub use reserved::ReservedKey;
