//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculation crate.

pub mod logs;
pub mod profile;

pub use logs::LogService;
pub use profile::ProfileService;
