//! Whiteboard configuration and environment loader.
use std::env;

/// Tunable planning parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhiteboardConfig {
    /// Whether queued actions paint overlays when the display asks for a hex.
    pub draw_overlays: bool,

    /// Gold reserved by each planned recall.
    pub recall_cost: u32,
}

impl WhiteboardConfig {
    pub const DEFAULT_RECALL_COST: u32 = 20;

    pub const fn new() -> Self {
        Self {
            draw_overlays: true,
            recall_cost: Self::DEFAULT_RECALL_COST,
        }
    }

    #[must_use]
    pub const fn with_draw_overlays(mut self, draw_overlays: bool) -> Self {
        self.draw_overlays = draw_overlays;
        self
    }

    #[must_use]
    pub const fn with_recall_cost(mut self, recall_cost: u32) -> Self {
        self.recall_cost = recall_cost;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WHITEBOARD_DRAW_OVERLAYS` - Paint planned-action overlays (default: true)
    /// - `WHITEBOARD_RECALL_COST` - Gold reserved per planned recall (default: 20)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(draw) = read_env_bool("WHITEBOARD_DRAW_OVERLAYS") {
            config.draw_overlays = draw;
        }
        if let Some(cost) = read_env::<u32>("WHITEBOARD_RECALL_COST") {
            config.recall_cost = cost;
        }

        config
    }
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    parse_bool(&value)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
