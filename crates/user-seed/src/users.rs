//! The user record shape and the default roster.

use std::collections::BTreeMap;

/// Collection every seeded record lands in.
pub const USERS_COLLECTION: &str = "users";

/// Role assigned to every seeded account.
pub const DEFAULT_ROLE: &str = "empresa";

/// The twelve company accounts the platform ships with.
pub const DEFAULT_USERS: [&str; 12] = [
    "Vidal Puma",
    "Nelson Roldan",
    "Kalil Powell",
    "Carlos Medrano",
    "Helbert Galdos",
    "Tomas Gallegos",
    "Emilia Machuca",
    "Gherson Gonzales",
    "Marco Ayllon",
    "Samuel Saunders",
    "Joseph Yauri",
    "Jamin Yauri",
];

/// One user document ready for insertion.
///
/// The onboarding flow expects `username` and `password` to start out equal
/// to the display name; accounts are re-credentialed on first login. The
/// password is stored as the store receives it here, so this type must never
/// be fed real credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub rol: String,
}

impl UserRecord {
    /// Builds the default record for a display name.
    pub fn from_name(name: &str) -> Self {
        Self {
            full_name: name.to_string(),
            username: name.to_string(),
            password: name.to_string(),
            rol: DEFAULT_ROLE.to_string(),
        }
    }

    /// Flattens the record into the field mapping handed to the store.
    pub fn fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("full_name".to_string(), self.full_name.clone()),
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
            ("rol".to_string(), self.rol.clone()),
        ])
    }
}
