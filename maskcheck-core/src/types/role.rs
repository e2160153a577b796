//! The two file slots of the form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two parallel file-handling slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The masked element being validated.
    Element,
    /// The certificate that accompanies the element.
    Certificate,
}

impl Role {
    /// Both roles, in submission order.
    pub const ALL: [Role; 2] = [Role::Element, Role::Certificate];

    /// Lowercase name used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Element => "element",
            Role::Certificate => "certificate",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
