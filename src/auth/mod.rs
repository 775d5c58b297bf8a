//! Auth gate: credential hashing, bearer tokens, request extraction

pub mod extract;
pub mod password;
pub mod token;

pub use extract::AuthUser;
pub use password::{Argon2Hasher, CredentialHasher, PasswordError};
pub use token::{Claims, TokenError, TokenSigner, TOKEN_LIFETIME_DAYS};
