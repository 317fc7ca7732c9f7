use std::fmt;

/// Authorization level derived from the user credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Guest,
    /// Claim value the console does not know, kept verbatim.
    Unknown(String),
}

impl Role {
    /// Exact match on the wire identifier: no case folding, no trimming.
    pub fn from_claim(raw: &str) -> Self {
        match raw {
            "superAdmin" => Self::SuperAdmin,
            "admin" => Self::Admin,
            "guest" => Self::Guest,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SuperAdmin => "superAdmin",
            Self::Admin => "admin",
            Self::Guest => "guest",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human readable label for the header and entry page.
    pub fn label(&self) -> &str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Guest => "Guest",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_map_to_variants() {
        assert_eq!(Role::from_claim("superAdmin"), Role::SuperAdmin);
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("guest"), Role::Guest);
    }

    #[test]
    fn matching_is_case_and_whitespace_sensitive() {
        assert_eq!(Role::from_claim("SuperAdmin"), Role::Unknown("SuperAdmin".into()));
        assert_eq!(Role::from_claim("admin "), Role::Unknown("admin ".into()));
    }

    #[test]
    fn identifier_round_trips_through_as_str() {
        assert_eq!(Role::SuperAdmin.as_str(), "superAdmin");
        assert_eq!(Role::Unknown("operator".into()).to_string(), "operator");
    }

    #[test]
    fn labels() {
        assert_eq!(Role::Guest.label(), "Guest");
        assert_eq!(Role::SuperAdmin.label(), "Super Admin");
        assert_eq!(Role::Unknown("operator".into()).label(), "operator");
    }
}
