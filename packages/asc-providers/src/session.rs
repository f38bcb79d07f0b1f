use uuid::Uuid;

/// Authenticated identity attached to a session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthUser {
	pub id: Uuid,
	pub email: Option<String>,
}

/// Read side of the externally-owned authentication provider. By the time
/// directory or profile logic runs, the session is already resolved; this
/// trait only reports it.
pub trait Session
where
	Self: Send + Sync,
{
	fn current_user(&self) -> Option<AuthUser>;

	fn is_signed_in(&self) -> bool {
		self.current_user().is_some()
	}
}

/// Session with a fixed answer, for local runs and tests.
pub struct StaticSession {
	user: Option<AuthUser>,
}

impl StaticSession {
	pub fn signed_in(id: Uuid, email: &str) -> Self {
		Self { user: Some(AuthUser { id, email: Some(email.to_string()) }) }
	}

	pub fn signed_out() -> Self {
		Self { user: None }
	}
}

impl Session for StaticSession {
	fn current_user(&self) -> Option<AuthUser> {
		self.user.clone()
	}
}
