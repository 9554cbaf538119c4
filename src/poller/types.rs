//! Type definitions for the version poller
//!
//! Defines the descriptor published by the backend's version endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version descriptor returned by the backend
///
/// The backend publishes the release number, the build commit hash, and the
/// release code name. Fields this component does not recognize are kept in
/// `extra` and carried through untouched; nothing here inspects the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Release number, e.g. "14.2.1"
    pub number: String,

    /// Build commit hash
    pub hash: String,

    /// Release code name
    pub name: String,

    /// Remaining server-defined fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.number, self.hash, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{"number":"14.2.1","hash":"d555a9","name":"nautilus","channel":"stable"}"#;
        let info: VersionInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.number, "14.2.1");
        assert_eq!(info.extra.get("channel"), Some(&Value::from("stable")));

        let reencoded = serde_json::to_value(&info).unwrap();
        assert_eq!(reencoded["channel"], "stable");
    }

    #[test]
    fn display_formats_like_a_release_line() {
        let info = VersionInfo {
            number: "14.2.1".into(),
            hash: "d555a9".into(),
            name: "nautilus".into(),
            extra: Map::new(),
        };
        assert_eq!(info.to_string(), "14.2.1 (d555a9) nautilus");
    }
}
