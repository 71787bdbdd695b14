//! Remote data access for the booking API: HTTP client, session token,
//! tag-invalidated query cache and the store components read through.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod store;

pub use cache::{Invalidation, QueryCache, QueryKey, Tag};
pub use client::{ApiClient, BookingBackend};
pub use error::{ApiError, ApiFailure, FailureKind};
pub use models::{Musician, MusicianId, MutationAck, User};
pub use session::Session;
pub use store::{use_api_store, ApiStore, MutationOutcome, QueryState};
