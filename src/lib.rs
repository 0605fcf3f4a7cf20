//! SupplyWorks - construction vehicle rental and material supply marketplace
//!
//! The heart of the crate is the step-gated registration wizard in
//! [`wizard`], driven by the per-role flows in [`flows`]. The remaining
//! modules cover the application shell around it: navigation and session
//! state, static catalogs, and where completed registrations are stored.

pub mod app;
pub mod catalog;
pub mod config;
pub mod flows;
pub mod logging;
pub mod session;
pub mod submission;
pub mod validate;
pub mod wizard;
