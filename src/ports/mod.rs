//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (ambient environment, filesystem, time, the platform
//! API). Implementations live in `src/adapters/`.

pub mod clock;
pub mod env;
pub mod fetch;
pub mod filesystem;

pub use clock::Clock;
pub use env::SystemProbe;
pub use fetch::{AliasFuture, AliasRequest, AliasSource, ServerAlias};
pub use filesystem::FileSystem;
