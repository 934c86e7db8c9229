//! Common types used across the application.

pub mod id;
pub mod locale;
pub mod money;


pub use id::ParticipantId;
pub use locale::Locale;
pub use money::AmountFormatter;
