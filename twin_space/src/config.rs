//! Space configuration

use std::time::Duration;

/// Proxy frame delay: how long an idle loop sleeps between polls (~1/60 s).
///
/// This is a CPU-yield mechanism, not a timing guarantee.
pub const PROXY_FRAME_DELAY: Duration = Duration::from_micros(16_667);

/// Configuration for a space's command loop
#[derive(Debug, Clone)]
pub struct SpaceConfig {
    /// Idle sleep between channel polls
    pub frame_delay: Duration,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            frame_delay: PROXY_FRAME_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_delay() {
        let config = SpaceConfig::default();
        assert_eq!(config.frame_delay, PROXY_FRAME_DELAY);
    }
}
