use crate::Error;
use std::fmt;

/// Selects which endpoint of a chain is queried and how requests are authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum RoutingMode {
    /// Gateway endpoint, authorized with a bearer api key.
    Direct { api_key: String },
    /// Fixed public endpoint, no authorization.
    Public,
}

impl RoutingMode {
    pub const MIN_API_KEY_LENGTH: usize = 20;

    pub fn direct(api_key: impl Into<String>) -> Result<Self, Error> {
        let mode = Self::Direct {
            api_key: api_key.into(),
        };
        mode.validate()?;
        Ok(mode)
    }

    /// A public-only caller may not pass a key: `None` selects [`RoutingMode::Public`],
    /// anything else is rejected.
    pub fn public_only(api_key: Option<&str>) -> Result<Self, Error> {
        match api_key {
            None => Ok(Self::Public),
            Some(_) => Err(Error::UnsupportedMode),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::Direct { api_key } => Some(api_key),
            Self::Public => None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Self::Direct { api_key } = self {
            let length = api_key.chars().count();
            if length < Self::MIN_API_KEY_LENGTH {
                return Err(Error::InvalidApiKey(format!(
                    "expected at least {} characters, got {length}",
                    Self::MIN_API_KEY_LENGTH
                )));
            }
        }
        Ok(())
    }
}

// Keeps api keys out of logs.
impl fmt::Debug for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct { .. } => f
                .debug_struct("Direct")
                .field("api_key", &"<hidden>")
                .finish(),
            Self::Public => f.write_str("Public"),
        }
    }
}
