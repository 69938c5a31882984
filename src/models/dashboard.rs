use chrono::NaiveDate;
use serde::Deserialize;

/// One historical submission total, as returned by the dashboard
/// endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardRecord {
    pub date: NaiveDate,
    #[serde(rename = "totalCarbonFootprint")]
    pub total_carbon_footprint: f64,
}

/// The user's submission history, newest first as received.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    records: Vec<DashboardRecord>,
}

/// Latest total broken into display buckets. The backend supplies no
/// per-category totals on this endpoint, so the split is a fixed
/// proportion of the latest total; the three buckets always sum to it.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySplit {
    pub transportation: f64,
    pub electricity: f64,
    pub waste: f64,
}

const TRANSPORTATION_SHARE: f64 = 0.5;
const ELECTRICITY_SHARE: f64 = 0.3;
const WASTE_SHARE: f64 = 0.2;

impl Dashboard {
    pub fn new(records: Vec<DashboardRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record. The server sends newest first; that
    /// order is trusted rather than re-derived.
    pub fn latest(&self) -> Option<&DashboardRecord> {
        self.records.first()
    }

    /// Chart input in chronological order. The received newest-first
    /// sequence is reversed, not sorted, so server order is preserved
    /// for equal dates.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let x_data = self
            .records
            .iter()
            .rev()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect();
        let y_data = self
            .records
            .iter()
            .rev()
            .map(|r| r.total_carbon_footprint)
            .collect();
        (x_data, y_data)
    }

    /// Fixed-proportion category buckets of the latest total.
    pub fn category_split(&self) -> Option<CategorySplit> {
        self.latest().map(|latest| {
            let total = latest.total_carbon_footprint;
            CategorySplit {
                transportation: total * TRANSPORTATION_SHARE,
                electricity: total * ELECTRICITY_SHARE,
                waste: total * WASTE_SHARE,
            }
        })
    }
}
