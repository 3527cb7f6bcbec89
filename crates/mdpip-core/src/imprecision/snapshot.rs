use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RangeTableSnapshot {
    pub schema_version: u32,
    pub max_relaxation: f64,
    pub range_count: usize,
    pub ranges: Vec<RangeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSnapshot {
    pub source: String,
    pub action: String,
    pub target: String,
    pub low: f64,
    pub high: f64,
}

impl RangeTableSnapshot {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
