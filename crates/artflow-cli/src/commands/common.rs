//! Shared helpers for commands that operate on the signed-in user.

use artflow_core::{ActivityFlow, Authenticator, Database, UserProfile};

const FLOW_KEY_PREFIX: &str = "flow";

/// The signed-in user's snapshot, or a friendly error.
pub fn require_user(db: &Database) -> Result<UserProfile, Box<dyn std::error::Error>> {
    Authenticator::new(db)
        .current_user()?
        .ok_or_else(|| "not signed in (run `auth signup` or `auth signin` first)".into())
}

fn flow_key(user_id: &str) -> String {
    format!("{FLOW_KEY_PREFIX}:{user_id}")
}

/// Load the user's in-flight activity flow, falling back to a fresh one when
/// nothing (or something unreadable) is stored.
pub fn load_flow(db: &Database, user_id: &str) -> ActivityFlow {
    if let Ok(Some(json)) = db.kv_get(&flow_key(user_id)) {
        if let Ok(flow) = serde_json::from_str::<ActivityFlow>(&json) {
            return flow;
        }
    }
    ActivityFlow::new()
}

/// Persist the user's in-flight activity flow.
pub fn save_flow(
    db: &Database,
    user_id: &str,
    flow: &ActivityFlow,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(flow)?;
    db.kv_set(&flow_key(user_id), &json)?;
    Ok(())
}
