//! Admin access gate for the shoplink back office.
//!
//! This is the storefront's demo credential check, not real account
//! security: one configured username/password pair, verified without
//! short-circuiting, and short-lived session tokens minted on successful
//! login.

mod error;
mod gate;
mod session;

pub use error::AuthError;
pub use gate::{AdminCredentials, AdminGate};
pub use session::{AdminSession, SessionToken};
