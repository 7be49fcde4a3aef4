use serde::{Deserialize, Serialize};

/// A single alert raised for a monitored stream
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertRecord {
    pub stream_id: u32,
    pub alert: AlertMessage,
}

/// The fixed set of alert texts a stream can report
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertMessage {
    #[serde(rename = "Low confidence in defect detection")]
    LowConfidenceDefect,
    #[serde(rename = "High confidence anomaly")]
    HighConfidenceAnomaly,
}

impl AlertRecord {
    pub const fn new(stream_id: u32, alert: AlertMessage) -> Self {
        Self { stream_id, alert }
    }
}
