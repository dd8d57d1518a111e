//! Pure engines behind the dashboard widgets.
//!
//! Nothing in here knows about Dioxus, signals or hover state: every call takes
//! an immutable snapshot and hands back a freshly derived value (or an
//! [`EngineError`] the caller turns into a "no data" state).

mod error;
pub mod geometry;
pub mod heat;
pub mod table;

pub use error::EngineError;

pub type EngineResult<T> = Result<T, EngineError>;
