//! Mock partner login: form checks, the fixed account list and an in-memory
//! session store addressed by bearer tokens.

pub mod credentials;
pub mod router;
pub mod service;
pub mod session;

pub use credentials::{
    find_account, validate_form, LoginField, LoginForm, MockAccount, Role, MOCK_ACCOUNTS,
};
pub use router::auth_router;
pub use service::{AuthService, LoginError};
pub use session::{Session, SessionStore};
