//! Accounts Data

use wave::accounts::Role;

use crate::domain::accounts::records::AccountUuid;

/// New Account Data
#[derive(Clone, PartialEq)]
pub struct NewAccount {
    pub uuid: AccountUuid,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("uuid", &self.uuid)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish()
    }
}

/// Profile Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: Option<String>,
}
