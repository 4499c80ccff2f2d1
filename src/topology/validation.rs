/// Policy applied by [`TopologyConfig::with_validation`](crate::TopologyConfig::with_validation).
///
/// The structural invariants (unique descriptors, no dangling, self or duplicate
/// connections) are always enforced. This policy controls the optional checks.
///
/// # Examples
///
/// ```rust
/// use oapp_topology::ValidationConfig;
///
/// // Same-endpoint peers allowed, partial meshes allowed
/// let config = ValidationConfig::default();
///
/// // Every pair of deployments on distinct endpoints must be wired both ways
/// let config = ValidationConfig::strict();
/// assert!(config.require_full_mesh);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Allow a connection between two distinct contracts on the same endpoint.
    pub allow_same_endpoint_peers: bool,
    /// Require the connections to form the complete directed graph.
    ///
    /// Pairs on the same endpoint are exempt when `allow_same_endpoint_peers`
    /// is false.
    pub require_full_mesh: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_same_endpoint_peers: true,
            require_full_mesh: false,
        }
    }
}

impl ValidationConfig {
    /// Rejects same-endpoint peers and partial meshes.
    pub fn strict() -> Self {
        Self {
            allow_same_endpoint_peers: false,
            require_full_mesh: true,
        }
    }

    pub fn with_allow_same_endpoint_peers(mut self, allow: bool) -> Self {
        self.allow_same_endpoint_peers = allow;
        self
    }

    pub fn with_require_full_mesh(mut self, require: bool) -> Self {
        self.require_full_mesh = require;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.allow_same_endpoint_peers);
        assert!(!config.require_full_mesh);
    }

    #[test]
    fn test_strict_config() {
        let config = ValidationConfig::strict();
        assert!(!config.allow_same_endpoint_peers);
        assert!(config.require_full_mesh);
    }

    #[test]
    fn test_builder_methods() {
        let config = ValidationConfig::default()
            .with_allow_same_endpoint_peers(false)
            .with_require_full_mesh(true);
        assert_eq!(config, ValidationConfig::strict());
    }
}
