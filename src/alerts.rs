use crate::alerts::record::{AlertMessage, AlertRecord};

pub mod record;

use AlertMessage::{HighConfidenceAnomaly, LowConfidenceDefect};

/// Alerts currently reported for the monitored streams, in response order
pub const SAMPLE_ALERTS: [AlertRecord; 7] = [
    AlertRecord::new(1, LowConfidenceDefect),
    AlertRecord::new(2, HighConfidenceAnomaly),
    AlertRecord::new(3, LowConfidenceDefect),
    AlertRecord::new(4, HighConfidenceAnomaly),
    AlertRecord::new(5, LowConfidenceDefect),
    AlertRecord::new(6, HighConfidenceAnomaly),
    AlertRecord::new(7, LowConfidenceDefect),
];

/// List all alerts
pub fn list() -> Vec<AlertRecord> {
    SAMPLE_ALERTS.to_vec()
}
