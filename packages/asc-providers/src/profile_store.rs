use std::{collections::HashMap, sync::Mutex};

use time::OffsetDateTime;
use uuid::Uuid;

use asc_domain::Profile;

use crate::{Error, Result};

/// Persistence contract for user profiles. The real backing store lives
/// outside this codebase; everything here only depends on these two
/// operations.
pub trait ProfileStore
where
	Self: Send + Sync,
{
	fn fetch(&self, id: Uuid) -> Result<Option<Profile>>;

	/// Inserts or replaces the row for `profile.id` and stamps `updated_at`
	/// with the store's clock. Returns the stored record.
	fn upsert(&self, profile: Profile) -> Result<Profile>;
}

/// In-process store keyed by profile id.
pub struct MemoryProfileStore {
	profiles: Mutex<HashMap<Uuid, Profile>>,
	clock: fn() -> OffsetDateTime,
}

impl MemoryProfileStore {
	pub fn new() -> Self {
		Self::with_clock(OffsetDateTime::now_utc)
	}

	pub fn with_clock(clock: fn() -> OffsetDateTime) -> Self {
		Self { profiles: Mutex::new(HashMap::new()), clock }
	}
}

impl Default for MemoryProfileStore {
	fn default() -> Self {
		Self::new()
	}
}

impl ProfileStore for MemoryProfileStore {
	fn fetch(&self, id: Uuid) -> Result<Option<Profile>> {
		let profiles = self.profiles.lock().unwrap_or_else(|err| err.into_inner());

		Ok(profiles.get(&id).cloned())
	}

	fn upsert(&self, profile: Profile) -> Result<Profile> {
		if profile.id.is_nil() {
			return Err(Error::InvalidProfile {
				message: "Profile id must not be nil.".to_string(),
			});
		}

		let mut stored = profile;

		stored.updated_at = (self.clock)();

		let mut profiles = self.profiles.lock().unwrap_or_else(|err| err.into_inner());

		profiles.insert(stored.id, stored.clone());

		Ok(stored)
	}
}
