//! Offline wiring plans
//!
//! Resolves every deployment in a topology to an address and encodes the OApp
//! configuration calls an operator has to send. Nothing here signs or submits
//! transactions.

mod oapp;
mod plan;
mod resolver;

pub use oapp::{EnforcedOptionParam, IOApp};
pub use plan::{WireCall, WirePlan, WireTransaction};
pub use resolver::{DeploymentBook, DeploymentResolver};
