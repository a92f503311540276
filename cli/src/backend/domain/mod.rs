//! Domain layer: the check-in state machine and the share plumbing built
//! around the derivation engine in the `shared` crate.

pub mod check_in_service;
pub mod commands;
pub mod models;
pub mod share_service;

pub use check_in_service::CheckInService;
pub use share_service::ShareService;
