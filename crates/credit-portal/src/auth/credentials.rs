use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Role attached to a mock partner account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "System Administrator")]
    SystemAdministrator,
    #[serde(rename = "Financial Partner")]
    FinancialPartner,
    #[serde(rename = "Lending Officer")]
    LendingOfficer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SystemAdministrator => "System Administrator",
            Self::FinancialPartner => "Financial Partner",
            Self::LendingOfficer => "Lending Officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const MOCK_ACCOUNTS: [MockAccount; 3] = [
    MockAccount {
        email: "admin@creditlend.gov",
        password: "Admin@123",
        role: Role::SystemAdministrator,
    },
    MockAccount {
        email: "partner@bankofbaroda.com",
        password: "Partner@456",
        role: Role::FinancialPartner,
    },
    MockAccount {
        email: "officer@sbi.co.in",
        password: "Officer@789",
        role: Role::LendingOfficer,
    },
];

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please use:\n\
Admin: admin@creditlend.gov / Admin@123\n\
Partner: partner@bankofbaroda.com / Partner@456\n\
Officer: officer@sbi.co.in / Officer@789";

const MIN_PASSWORD_CHARS: usize = 6;

/// Exact match on both email and password.
pub fn find_account(email: &str, password: &str) -> Option<&'static MockAccount> {
    MOCK_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
}

/// Body of the partner login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    Email,
    Password,
}

pub type FormErrors = BTreeMap<LoginField, &'static str>;

/// Field checks run before any credential lookup.
pub fn validate_form(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.email.is_empty() {
        errors.insert(LoginField::Email, "Email address is required");
    } else if !looks_like_email(&form.email) {
        errors.insert(LoginField::Email, "Please enter a valid email address");
    }

    if form.password.is_empty() {
        errors.insert(LoginField::Password, "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.insert(LoginField::Password, "Password must be at least 6 characters");
    }

    errors
}

/// Characters the login form treats as whitespace in `\S+@\S+\.\S+`. This is
/// the browser set, which counts U+FEFF and leaves out U+0085.
const NON_SPACE: &str =
    r"[^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&format!("{NON_SPACE}+@{NON_SPACE}+\\.{NON_SPACE}+")));

/// Unanchored `\S+@\S+\.\S+` match.
pub fn looks_like_email(raw: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(raw))
}
