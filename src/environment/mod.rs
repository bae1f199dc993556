//! The virtual environment itself.
//!
//! - [`locator`] finds a system interpreter to create the environment with
//! - [`layout`] knows where things live inside an environment directory
//! - [`provisioner`] creates the environment and performs the first install

pub mod layout;
pub mod locator;
pub mod provisioner;

pub use layout::VenvLayout;
pub use locator::{default_candidates, InterpreterLocator};
pub use provisioner::Provisioner;
