//! Externally-owned capabilities behind traits: the authentication session
//! and the persisted profile store. The directory logic never talks to a
//! backend directly; it receives these.

pub mod profile_store;
pub mod session;

mod error;

use std::sync::Arc;

pub use error::{Error, Result};
pub use profile_store::{MemoryProfileStore, ProfileStore};
pub use session::{AuthUser, Session, StaticSession};

/// Capability bundle handed to whatever layer needs auth or persistence.
#[derive(Clone)]
pub struct Providers {
	pub session: Arc<dyn Session>,
	pub profiles: Arc<dyn ProfileStore>,
}

impl Providers {
	pub fn new(session: Arc<dyn Session>, profiles: Arc<dyn ProfileStore>) -> Self {
		Self { session, profiles }
	}
}
