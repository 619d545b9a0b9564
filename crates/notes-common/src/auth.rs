use sha2::{Digest, Sha256};

use crate::error::{NotesError, Result};

const DEMO_USERNAME: &str = "user";
const DEMO_PASSWORD: &str = "password";
const SESSION_SECRET: &str = "development-secret-key";

/// The one account the demo accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl DemoUser {
    fn demo() -> Self {
        Self {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

/// Signed-in state. The token only identifies the session inside the demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: DemoUser,
    pub token: String,
    pub issued_at: u64,
}

/// Exact literal match on the demo credentials; any other input is rejected
/// with the same error.
pub fn authorize(username: &str, password: &str, issued_at: u64) -> Result<Session> {
    if username != DEMO_USERNAME || password != DEMO_PASSWORD {
        tracing::warn!("Rejected sign-in attempt");
        return Err(NotesError::InvalidCredentials);
    }
    let user = DemoUser::demo();
    let token = session_token(&user.id, issued_at);
    tracing::info!("Signed in as {}", user.name);
    Ok(Session {
        user,
        token,
        issued_at,
    })
}

/// Hex sha256(len(secret) + secret + len(user_id) + user_id + issued_at).
pub fn session_token(user_id: &str, issued_at: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update((SESSION_SECRET.len() as u64).to_be_bytes());
    hasher.update(SESSION_SECRET.as_bytes());
    hasher.update((user_id.len() as u64).to_be_bytes());
    hasher.update(user_id.as_bytes());
    hasher.update(issued_at.to_be_bytes());
    let hash: [u8; 32] = hasher.finalize().into();
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Re-derive the token for a session and compare.
pub fn verify(session: &Session) -> bool {
    session_token(&session.user.id, session.issued_at) == session.token
}
