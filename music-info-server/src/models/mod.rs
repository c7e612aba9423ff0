//! Domain models with validation
//!
//! All user input is validated before it reaches the database.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod song;
pub mod pagination;

pub use validation::ValidationError;
pub use song::{NewSong, SongKey, SongPatch};
pub use pagination::{ListParams, Pagination};
