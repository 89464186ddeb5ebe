use serde::{Deserialize, Serialize};

/// User roles known to the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator
    Sysad,
    /// Public Employment Service Office officer
    Peso,
}

impl Role {
    /// Wire identifier, also the first segment of the role's routes
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sysad => "sysad",
            Role::Peso => "peso",
        }
    }

    /// Human readable name shown under the user's name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Sysad => "System Admin",
            Role::Peso => "PESO",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Sysad, Role::Peso]
    }

    /// Parse a backend role identifier. Unknown identifiers yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sysad" => Some(Role::Sysad),
            "peso" => Some(Role::Peso),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_parse_unknown_role() {
        assert_eq!(Role::parse("dean"), None);
        assert_eq!(Role::parse("SYSAD"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Peso).unwrap(), "\"peso\"");
        let role: Role = serde_json::from_str("\"sysad\"").unwrap();
        assert_eq!(role, Role::Sysad);
    }
}
