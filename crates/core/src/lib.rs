#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod session;
pub mod time;

pub use generator::{GenerateError, GeneratorConfig, generate, try_generate};
pub use session::{Navigation, SessionError, SessionPhase, SessionTracker};
pub use time::Clock;
