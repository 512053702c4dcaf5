//! # classgate-auth
//!
//! Authentication building blocks for ClassGate: the in-process session
//! store, the admin credential check, and the identity provider adapter.

pub mod credentials;
pub mod identity;
pub mod session;

pub use credentials::AdminCredentials;
pub use identity::{Identity, IdentityProvider, RestIdentityProvider};
pub use session::store::SessionStore;
