//! Fetch raw county statistics for a state.
//!
//! The `CountySource` trait abstracts the statistics collaborator that sits
//! upstream of ranking. Callers name a state and receive one
//! [`CountyRecord`](crate::CountyRecord) per county, in no guaranteed order.
//!
//! Errors cover unknown states, transport failures, and malformed payloads.

mod error;
mod provider;

pub use error::CountySourceError;
pub use provider::CountySource;
