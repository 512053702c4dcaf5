//! Account flows delegated to the identity provider.

pub mod service;

pub use service::AccountService;
