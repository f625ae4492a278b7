use std::collections::HashMap;

use serde_json::{Map, Value};

/// Claim carrying the user's id (UUID).
pub const CLAIM_USER_ID: &str = "userId";
/// Optional claim linking the user to a customer record (UUID).
pub const CLAIM_CLIENTE_ID: &str = "clienteId";
/// Repeatable claim, one value per granted role.
pub const CLAIM_ROLE: &str = "role";

/// Decoded token claims: claim name → ordered list of string values.
///
/// Transport-agnostic on purpose, so the actor factory can be exercised with
/// hand-built sets instead of real tokens. Value order is preserved as it
/// appeared in the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    claims: HashMap<String, Vec<String>>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the claim `name`, keeping earlier values.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.claims
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Builder-style [`ClaimSet::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// All values of a claim, in token order. Empty when the claim is absent.
    pub fn values(&self, name: &str) -> &[String] {
        self.claims.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.values(name).is_empty()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ClaimSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for ClaimSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}

/// Flatten a JSON claims object.
///
/// Arrays become one value per element (this is how a token carries several
/// `role` claims), scalars become their JSON text and `null` yields nothing.
impl From<Map<String, Value>> for ClaimSet {
    fn from(payload: Map<String, Value>) -> Self {
        let mut set = Self::new();
        for (name, value) in payload {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            set.push(name.clone(), text);
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        set.push(name, text);
                    }
                }
            }
        }
        set
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
