//! Session identifiers and the session payload.

use pitchside_alerts::{AlertLevel, FlashMessage};
use pitchside_commerce::cart::Cart;
use pitchside_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Per-visitor session payload.
///
/// Carries the signed-in user (if any), the cart, and flash messages
/// queued for the next rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopSession {
    /// Signed-in user, `None` for guests.
    pub user_id: Option<UserId>,
    /// Whether the signed-in user is an admin.
    pub is_admin: bool,
    /// The visitor's cart.
    pub cart: Cart,
    /// Flash messages not yet shown.
    pub flashes: Vec<FlashMessage>,
}

impl ShopSession {
    /// Create an empty guest session payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Sign a user in, setting the admin flag from the account.
    pub fn login(&mut self, user_id: UserId, is_admin: bool) {
        self.user_id = Some(user_id);
        self.is_admin = is_admin;
    }

    /// Sign the user out. The cart is kept, matching the storefront's
    /// behavior of per-visitor (not per-account) carts.
    pub fn logout(&mut self) {
        self.user_id = None;
        self.is_admin = false;
    }

    /// Queue a flash message for the next rendered page.
    pub fn flash(&mut self, level: AlertLevel, message: impl Into<String>) {
        self.flashes.push(FlashMessage::new(level, message));
    }

    /// Drain the queued flash messages.
    pub fn take_flashes(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flashes)
    }
}
