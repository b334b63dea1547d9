use serde::{Deserialize, Serialize};

/// One of the three forecasted warehouse metrics.
///
/// The set is closed: every deployed model artifact belongs to exactly one
/// of these, and the upload contract requires one history column per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Sales,
    Quantity,
    Deliveries,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Sales, Metric::Quantity, Metric::Deliveries];

    /// Wire name used as the response key and in artifact file names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Metric::Sales => "sales",
            Metric::Quantity => "quantity",
            Metric::Deliveries => "deliveries",
        }
    }

    /// Name of the history column this metric requires in an uploaded dataset.
    pub const fn column(&self) -> &'static str {
        match self {
            Metric::Sales => "y_sales",
            Metric::Quantity => "y_quantity",
            Metric::Deliveries => "y_deliveries",
        }
    }
}

impl core::fmt::Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
