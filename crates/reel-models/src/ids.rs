//! Opaque identifiers for campaigns, scenes, and synthesis requests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Create from an existing string.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a campaign.
    CampaignId
}

uuid_id! {
    /// Unique identifier for a scene.
    SceneId
}

uuid_id! {
    /// Identity of a single keyframe synthesis request.
    ///
    /// Responses are correlated back to their issuing request by this id,
    /// never by arrival order, so a superseded request can be discarded.
    RequestId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CampaignId::new(), CampaignId::new());
        assert_ne!(SceneId::new(), SceneId::new());
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_id_display_roundtrip() {
        let id = SceneId::new();
        assert_eq!(id.to_string(), id.as_str());
        assert_eq!(SceneId::from_string(id.as_str()), id);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = RequestId::from_string("req-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-1\"");
    }
}
