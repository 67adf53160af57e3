use core::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use stockcast_core::{DomainError, DomainResult};

/// Movement-type vocabulary (closed enumeration).
///
/// The wire form is SCREAMING_SNAKE_CASE (e.g. `"TRANSFER_OUT"`). Keeping
/// this closed gives exhaustive matching on the demand subset instead of
/// string comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Inbound,
    Outbound,
    Sale,
    TransferIn,
    TransferOut,
    AdjustmentIn,
    AdjustmentOut,
    ReturnIn,
    ReturnOut,
    Damage,
    Theft,
}

impl MovementType {
    /// Whether this movement consumes inventory (the forecasting signal).
    pub fn is_demand(&self) -> bool {
        match self {
            MovementType::Outbound
            | MovementType::Sale
            | MovementType::TransferOut
            | MovementType::AdjustmentOut
            | MovementType::ReturnOut
            | MovementType::Damage
            | MovementType::Theft => true,
            MovementType::Inbound
            | MovementType::TransferIn
            | MovementType::AdjustmentIn
            | MovementType::ReturnIn => false,
        }
    }

    /// Stable wire tag for this movement type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Inbound => "INBOUND",
            MovementType::Outbound => "OUTBOUND",
            MovementType::Sale => "SALE",
            MovementType::TransferIn => "TRANSFER_IN",
            MovementType::TransferOut => "TRANSFER_OUT",
            MovementType::AdjustmentIn => "ADJUSTMENT_IN",
            MovementType::AdjustmentOut => "ADJUSTMENT_OUT",
            MovementType::ReturnIn => "RETURN_IN",
            MovementType::ReturnOut => "RETURN_OUT",
            MovementType::Damage => "DAMAGE",
            MovementType::Theft => "THEFT",
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INBOUND" => Ok(MovementType::Inbound),
            "OUTBOUND" => Ok(MovementType::Outbound),
            "SALE" => Ok(MovementType::Sale),
            "TRANSFER_IN" => Ok(MovementType::TransferIn),
            "TRANSFER_OUT" => Ok(MovementType::TransferOut),
            "ADJUSTMENT_IN" => Ok(MovementType::AdjustmentIn),
            "ADJUSTMENT_OUT" => Ok(MovementType::AdjustmentOut),
            "RETURN_IN" => Ok(MovementType::ReturnIn),
            "RETURN_OUT" => Ok(MovementType::ReturnOut),
            "DAMAGE" => Ok(MovementType::Damage),
            "THEFT" => Ok(MovementType::Theft),
            other => Err(DomainError::malformed_record(format!(
                "unknown movement type: {other:?}"
            ))),
        }
    }
}

/// Quantity as it appears on the wire: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        RawQuantity::Number(value)
    }
}

/// Wire shape of a movement record as supplied by the external inventory
/// system. Read-only to this unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMovement {
    pub movement_date: String,
    pub movement_type: String,
    pub quantity: RawQuantity,
}

/// A single validated inventory change-of-state event.
///
/// Produced by an external inventory system; never mutated or persisted
/// here. `quantity` keeps its sign; aggregation takes the absolute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub occurred_at: NaiveDateTime,
    pub movement_type: MovementType,
    pub quantity: f64,
}

impl Movement {
    pub fn new(occurred_at: NaiveDateTime, movement_type: MovementType, quantity: f64) -> Self {
        Self {
            occurred_at,
            movement_type,
            quantity,
        }
    }

    /// Calendar day of the movement (day truncation, no timezone
    /// normalization).
    pub fn occurred_on(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    /// Validate a raw wire record.
    pub fn from_raw(raw: &RawMovement) -> DomainResult<Self> {
        let occurred_at = parse_movement_date(&raw.movement_date)?;
        let movement_type = raw.movement_type.parse()?;
        let quantity = parse_quantity(&raw.quantity)?;
        Ok(Self {
            occurred_at,
            movement_type,
            quantity,
        })
    }
}

/// Outcome of best-effort batch parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementBatch {
    pub movements: Vec<Movement>,
    /// Malformed records that were skipped (never aborts the batch).
    pub skipped: usize,
}

/// Parse raw wire records, skipping malformed ones.
///
/// Malformed records (unparseable date, unknown type, non-numeric quantity)
/// are logged at `warn` and counted; the rest of the batch still parses.
pub fn parse_movements(records: &[RawMovement]) -> MovementBatch {
    let mut movements = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for raw in records {
        match Movement::from_raw(raw) {
            Ok(movement) => movements.push(movement),
            Err(err) => {
                skipped += 1;
                warn!(%err, movement_type = %raw.movement_type, "skipping malformed movement record");
            }
        }
    }

    MovementBatch { movements, skipped }
}

fn parse_movement_date(s: &str) -> DomainResult<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::from_str(s) {
        return Ok(dt);
    }
    if let Ok(day) = NaiveDate::from_str(s) {
        return Ok(day.and_time(NaiveTime::MIN));
    }

    Err(DomainError::malformed_record(format!(
        "unparseable movement_date: {s:?}"
    )))
}

fn parse_quantity(raw: &RawQuantity) -> DomainResult<f64> {
    let value = match raw {
        RawQuantity::Number(n) => *n,
        RawQuantity::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            DomainError::malformed_record(format!("non-numeric quantity: {s:?}"))
        })?,
    };

    if !value.is_finite() {
        return Err(DomainError::malformed_record("quantity must be finite"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, movement_type: &str, quantity: RawQuantity) -> RawMovement {
        RawMovement {
            movement_date: date.to_string(),
            movement_type: movement_type.to_string(),
            quantity,
        }
    }

    #[test]
    fn parses_date_only_record() {
        let m = Movement::from_raw(&raw("2024-01-01", "SALE", 10.0.into())).unwrap();
        assert_eq!(m.occurred_on(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(m.movement_type, MovementType::Sale);
        assert_eq!(m.quantity, 10.0);
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let m = Movement::from_raw(&raw(
            "2024-03-05T14:30:00Z",
            "transfer_out",
            RawQuantity::Text("-4.5".to_string()),
        ))
        .unwrap();
        assert_eq!(m.occurred_on(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(m.movement_type, MovementType::TransferOut);
        assert_eq!(m.quantity, -4.5);
    }

    #[test]
    fn rejects_unparseable_date() {
        let err = Movement::from_raw(&raw("not-a-date", "SALE", 1.0.into())).unwrap_err();
        assert!(matches!(err, DomainError::MalformedRecord(_)));
    }

    #[test]
    fn rejects_unknown_movement_type() {
        let err = Movement::from_raw(&raw("2024-01-01", "TELEPORT", 1.0.into())).unwrap_err();
        assert!(matches!(err, DomainError::MalformedRecord(_)));
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let err = Movement::from_raw(&raw(
            "2024-01-01",
            "SALE",
            RawQuantity::Text("ten".to_string()),
        ))
        .unwrap_err();
        assert!(matches!(err, DomainError::MalformedRecord(_)));
    }

    #[test]
    fn batch_parsing_skips_malformed_records_and_continues() {
        let records = vec![
            raw("2024-01-01", "SALE", 10.0.into()),
            raw("garbage", "SALE", 5.0.into()),
            raw("2024-01-02", "INBOUND", 3.0.into()),
        ];

        let batch = parse_movements(&records);
        assert_eq!(batch.movements.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.movements[0].movement_type, MovementType::Sale);
        assert_eq!(batch.movements[1].movement_type, MovementType::Inbound);
    }

    #[test]
    fn demand_subset_matches_outbound_vocabulary() {
        assert!(MovementType::Sale.is_demand());
        assert!(MovementType::Outbound.is_demand());
        assert!(MovementType::Theft.is_demand());
        assert!(MovementType::Damage.is_demand());
        assert!(!MovementType::Inbound.is_demand());
        assert!(!MovementType::TransferIn.is_demand());
        assert!(!MovementType::ReturnIn.is_demand());
    }

    #[test]
    fn raw_movement_deserializes_number_and_string_quantities() {
        let json = r#"[
            {"movement_date": "2024-01-01", "movement_type": "SALE", "quantity": 7},
            {"movement_date": "2024-01-01", "movement_type": "DAMAGE", "quantity": "2.5"}
        ]"#;

        let records: Vec<RawMovement> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].quantity, RawQuantity::Number(7.0));
        assert_eq!(records[1].quantity, RawQuantity::Text("2.5".to_string()));

        let batch = parse_movements(&records);
        assert_eq!(batch.skipped, 0);
        assert_eq!(batch.movements[1].quantity, 2.5);
    }
}
