//! Form-state and validation engine for an insurance brokerage's product
//! quote intake.
//!
//! Three product forms (marine cargo, golfers/sportsman, family medisure)
//! each own their scalar fields, an optional line-item collection with a
//! staging buffer, a single-slot validation error, and a
//! validate -> aggregate -> emit -> reset submission pipeline. The only
//! outbound boundary is [`intake::SubmissionSink`]; rendering, visibility,
//! persistence, and transport belong to the host.

pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
