//! Tracker configuration

/// Tracker configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Load the demo dataset at construction
    pub load_demo_data: bool,
    /// Restore a cached session at construction
    pub restore_session: bool,
}

impl TrackerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With demo data loading
    #[inline]
    #[must_use]
    pub fn with_demo_data(mut self, load: bool) -> Self {
        self.load_demo_data = load;
        self
    }

    /// With session restore on construction
    #[inline]
    #[must_use]
    pub fn with_session_restore(mut self, restore: bool) -> Self {
        self.restore_session = restore;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            load_demo_data: true,
            restore_session: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrackerConfig::new();
        assert!(config.load_demo_data);
        assert!(config.restore_session);
    }

    #[test]
    fn builder() {
        let config = TrackerConfig::new()
            .with_demo_data(false)
            .with_session_restore(false);
        assert!(!config.load_demo_data);
        assert!(!config.restore_session);
    }
}
