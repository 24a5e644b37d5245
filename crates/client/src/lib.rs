//! Client side of the Makebetter site: the content backend, the hosted
//! identity provider, and the drivers that wire them into page state.

pub mod auth;
pub mod config;
pub mod driver;
pub mod error;
pub mod store;

pub use auth::{HostedAuthClient, IdentityProvider};
pub use config::ClientConfig;
pub use error::{AuthError, StoreError};
pub use store::{ContentStore, HttpContentStore};
