//! `snappoll-auth` — pure authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it takes a
//! token string and a shared secret and decides, with no I/O, whether the
//! credential is acceptable. The HTTP layer owns header plumbing and
//! response mapping; user lookup for credential issuance lives elsewhere.

pub mod bearer;
pub mod claims;
pub mod error;
pub mod principal;
pub mod sign;
pub mod verify;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::AuthError;
pub use principal::{CredentialAlgorithm, Principal};
pub use sign::{SignError, TokenSigner};
pub use verify::TokenVerifier;
