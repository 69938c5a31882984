use serde::Serialize;

use super::error::AppError;

/// One transport leg as typed into the form. All fields are raw
/// strings until validation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TransportRow {
    pub distance: String,
    pub mode: String,
    pub minutes: String,
}

/// Raw submission form state. Values stay untyped strings so the form
/// can round-trip exactly what the user typed; `validate` is the only
/// path to the wire shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumptionForm {
    pub transport: Vec<TransportRow>,
    pub previous_usage: String,
    pub today_usage: String,
    pub dry_waste: String,
    pub wet_waste: String,
}

impl Default for ConsumptionForm {
    fn default() -> Self {
        Self {
            transport: vec![TransportRow::default()],
            previous_usage: String::new(),
            today_usage: String::new(),
            dry_waste: String::new(),
            wet_waste: String::new(),
        }
    }
}

/// Wire shape the calculation service expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSubmission {
    pub user_id: i64,
    pub city: String,
    pub name: String,
    pub transportations: Vec<TransportLeg>,
    pub wastages: Vec<Wastage>,
    pub prev_watts: u32,
    pub today_watts: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportLeg {
    pub mode: String,
    pub distance: u32,
    pub time: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wastage {
    pub wet_waste: u32,
    pub dry_waste: u32,
}

impl ConsumptionForm {
    pub fn add_transport_row(&mut self) {
        self.transport.push(TransportRow::default());
    }

    /// Validates the form and builds the wire shape.
    ///
    /// Completeness failures collapse into one aggregate message; the
    /// form does not distinguish which field was left blank. Numeric
    /// failures are reported per field, distinct from emptiness, so a
    /// typo never silently reaches the wire.
    pub fn validate(
        &self,
        user_id: i64,
        city: &str,
        name: &str,
    ) -> Result<ConsumptionSubmission, AppError> {
        let incomplete = self
            .transport
            .iter()
            .any(|row| row.distance.trim().is_empty() || row.mode.trim().is_empty())
            || self.previous_usage.trim().is_empty()
            || self.today_usage.trim().is_empty()
            || self.dry_waste.trim().is_empty()
            || self.wet_waste.trim().is_empty();

        if incomplete {
            return Err(AppError::Validation("Please fill in all fields.".to_string()));
        }

        let transportations = self
            .transport
            .iter()
            .map(|row| {
                Ok(TransportLeg {
                    mode: row.mode.trim().to_string(),
                    distance: parse_amount("Distance", &row.distance)?,
                    time: parse_optional_amount("Time", &row.minutes)?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(ConsumptionSubmission {
            user_id,
            city: city.to_string(),
            name: name.to_string(),
            transportations,
            wastages: vec![Wastage {
                wet_waste: parse_amount("Wet waste", &self.wet_waste)?,
                dry_waste: parse_amount("Dry waste", &self.dry_waste)?,
            }],
            prev_watts: parse_amount("Previous usage", &self.previous_usage)?,
            today_watts: parse_amount("Today's usage", &self.today_usage)?,
        })
    }
}

/// Parses a required non-negative integer field.
fn parse_amount(label: &str, value: &str) -> Result<u32, AppError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::Validation(format!("{label} must be a whole number.")))
}

/// Like `parse_amount`, but an empty field means zero.
fn parse_optional_amount(label: &str, value: &str) -> Result<u32, AppError> {
    if value.trim().is_empty() {
        return Ok(0);
    }
    parse_amount(label, value)
}
