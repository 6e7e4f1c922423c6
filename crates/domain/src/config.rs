//! Configuration records
//!
//! The config file is a flat JSON object: `cert_path` and `auto_start` sit
//! next to one object per environment name. Other top-level keys whose value
//! is not an object (a hand-added `"version": 2`, say) are ignored.
//!
//! ```json
//! {
//!   "cert_path": "C:/certs/corp-ca.pem",
//!   "auto_start": false,
//!   "PRD": { "url": "https://auth.example/token", "client_id": "id", "client_secret": "s" },
//!   "SDB": { "url": "", "client_id": "", "client_secret": "" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_ENVIRONMENTS;
use crate::impl_keyword_conversions;

/// Credentials and endpoint for one named environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Token endpoint URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// OAuth2 client identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: String,
    /// OAuth2 client secret, sent in the form body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_secret: String,
}

/// The three required fields of an [`EnvironmentConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentField {
    /// `url`
    Url,
    /// `client_id`
    ClientId,
    /// `client_secret`
    ClientSecret,
}

impl_keyword_conversions!(EnvironmentField {
    Url => "url",
    ClientId => "client_id",
    ClientSecret => "client_secret",
});

impl EnvironmentField {
    /// All fields, in file order.
    pub const ALL: [Self; 3] = [Self::Url, Self::ClientId, Self::ClientSecret];
}

impl EnvironmentConfig {
    /// Record from the three field values, taken as given.
    pub fn new(
        url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self { url: url.into(), client_id: client_id.into(), client_secret: client_secret.into() }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.url.trim(), self.client_id.trim(), self.client_secret.trim())
    }

    /// An environment is ready iff every required field is non-blank.
    ///
    /// The tray menu and the token request both rely on this rule; keep it the
    /// single place where readiness is decided.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        EnvironmentField::ALL.iter().all(|field| !self.field(*field).trim().is_empty())
    }

    /// Raw (untrimmed) value of one field.
    #[must_use]
    pub fn field(&self, field: EnvironmentField) -> &str {
        match field {
            EnvironmentField::Url => &self.url,
            EnvironmentField::ClientId => &self.client_id,
            EnvironmentField::ClientSecret => &self.client_secret,
        }
    }

    /// Replace one field's value.
    pub fn set_field(&mut self, field: EnvironmentField, value: impl Into<String>) {
        let slot = match field {
            EnvironmentField::Url => &mut self.url,
            EnvironmentField::ClientId => &mut self.client_id,
            EnvironmentField::ClientSecret => &mut self.client_secret,
        };
        *slot = value.into();
    }
}

/// Global configuration as persisted by the settings form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAppConfig")]
pub struct AppConfig {
    /// Custom CA bundle used instead of the platform trust store.
    pub cert_path: String,

    /// Only read by the run-at-startup integration.
    pub auto_start: bool,

    /// Every other top-level key holding an object is an environment.
    #[serde(flatten)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

/// The document as read from disk, before environments are picked out
#[derive(Deserialize)]
struct RawAppConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    cert_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    auto_start: bool,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl TryFrom<RawAppConfig> for AppConfig {
    type Error = String;

    fn try_from(raw: RawAppConfig) -> Result<Self, Self::Error> {
        let mut environments = BTreeMap::new();
        for (name, value) in raw.entries.into_iter().filter(|(_, value)| value.is_object()) {
            let env = EnvironmentConfig::deserialize(value)
                .map_err(|e| format!("environment {name}: {e}"))?;
            environments.insert(name, env);
        }

        Ok(Self { cert_path: raw.cert_path, auto_start: raw.auto_start, environments })
    }
}

impl AppConfig {
    /// Environment record for `name`, or an empty record when absent.
    ///
    /// An unknown name is deliberately indistinguishable from a blank one.
    #[must_use]
    pub fn environment(&self, name: &str) -> EnvironmentConfig {
        self.environments.get(name).cloned().unwrap_or_default()
    }

    /// Trimmed CA bundle path, `None` when blank.
    #[must_use]
    pub fn cert_path(&self) -> Option<&str> {
        let trimmed = self.cert_path.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether `name` exists and has every required field filled in.
    #[must_use]
    pub fn is_environment_ready(&self, name: &str) -> bool {
        self.environments.get(name).is_some_and(EnvironmentConfig::is_ready)
    }

    /// Default environments in menu order, followed by any extra ones from
    /// the file in alphabetical order.
    #[must_use]
    pub fn environment_names(&self) -> Vec<String> {
        let mut names: Vec<String> = DEFAULT_ENVIRONMENTS.iter().map(|s| (*s).to_string()).collect();
        names.extend(
            self.environments.keys().filter(|name| !DEFAULT_ENVIRONMENTS.contains(&name.as_str())).cloned(),
        );
        names
    }

    /// Ensure every default environment has an entry, blank if new.
    #[must_use]
    pub fn with_default_environments(mut self) -> Self {
        for name in DEFAULT_ENVIRONMENTS {
            self.environments.entry(name.to_string()).or_default();
        }
        self
    }

    /// Copy with every string value trimmed, as the settings form saves it.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            cert_path: self.cert_path.trim().to_string(),
            auto_start: self.auto_start,
            environments: self
                .environments
                .iter()
                .map(|(name, env)| (name.clone(), env.trimmed()))
                .collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
