//! Developer tooling: read-only views of controller state for logs and HUDs.

pub mod inspector;

pub use inspector::{ControllerInspector, ControllerSummary};

pub fn crate_info() -> &'static str {
    "thirdperson-tools v0.1.0"
}
