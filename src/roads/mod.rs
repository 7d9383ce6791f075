//! Road snapping
//!
//! Snapping maps a sequence of raw coordinates onto nearby roads. The work is
//! done by a remote service; this module only defines the credential, the
//! result types and the backend trait.

pub mod google;

use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// API credential for a snapping service
///
/// Only constructed from a non-empty key, so holding one means snapping is
/// enabled.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Build a key from a configuration value
    ///
    /// Returns None for an empty or whitespace-only string.
    pub fn from_config(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// A coordinate returned by the snapping service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnappedPoint {
    pub coords: Coordinates,

    /// Index of the input point this was snapped from (None for
    /// interpolated points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_index: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// Result of a snapping request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapOutcome {
    /// Snapped points in path order
    pub points: Vec<SnappedPoint>,

    /// Number of response entries dropped because they had no usable location
    pub skipped: usize,

    /// Warning text passed through from the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SnapOutcome {
    /// Plain coordinates of the snapped points
    pub fn coordinates(&self) -> Vec<Coordinates> {
        self.points.iter().map(|p| p.coords).collect()
    }

    /// Append another batch, shifting its original indices by `offset`
    pub fn extend_from(&mut self, other: SnapOutcome, offset: usize) {
        self.points.extend(other.points.into_iter().map(|mut p| {
            p.original_index = p.original_index.map(|i| i + offset);
            p
        }));
        self.skipped += other.skipped;
        if let Some(warning) = other.warning {
            self.warning = Some(match self.warning.take() {
                Some(existing) if existing != warning => format!("{}; {}", existing, warning),
                _ => warning,
            });
        }
    }
}

/// Trait for road snapping backends
pub trait RoadSnapper: Send + Sync {
    /// Snap a path of coordinates to roads
    fn snap(
        &self,
        path: &[Coordinates],
    ) -> impl std::future::Future<Output = Result<SnapOutcome>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_config() {
        assert!(ApiKey::from_config("").is_none());
        assert!(ApiKey::from_config("   ").is_none());

        let key = ApiKey::from_config(" abc123 ").unwrap();
        assert_eq!(key.as_str(), "abc123");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::from_config("secret-key").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_outcome_extend_offsets_indices() {
        let point = |lat: f64, index: Option<usize>| SnappedPoint {
            coords: Coordinates::new(lat, 0.0),
            original_index: index,
            place_id: None,
        };

        let mut outcome = SnapOutcome {
            points: vec![point(1.0, Some(0))],
            skipped: 1,
            warning: None,
        };
        outcome.extend_from(
            SnapOutcome {
                points: vec![point(2.0, Some(3)), point(2.5, None)],
                skipped: 2,
                warning: Some("check path".to_string()),
            },
            100,
        );

        assert_eq!(outcome.points.len(), 3);
        assert_eq!(outcome.points[1].original_index, Some(103));
        assert_eq!(outcome.points[2].original_index, None);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.warning.as_deref(), Some("check path"));
        assert_eq!(outcome.coordinates()[1], Coordinates::new(2.0, 0.0));
    }
}
