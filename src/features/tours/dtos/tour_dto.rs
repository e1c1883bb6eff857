use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::tours::models::{PickupTime, Tour, TourDay, TourOption};
use crate::shared::constants::{PERIOD_MAX, PERIOD_MIN, WEEKDAY_SLOTS};
use crate::shared::validation::CLOCK_COMPONENT_REGEX;

// ==================== Request DTOs ====================

/// Request body for replacing a company's entire tour set
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveToursDto {
    /// Owning company identifier; required
    pub company_id: Option<String>,

    /// Full tour list; an empty list deletes everything for the company
    #[validate(nested)]
    pub tours: Option<Vec<TourEntryDto>>,
}

/// One tour with its child collections, as assembled by the client form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourEntryDto {
    /// Main record block; required for every entry
    #[validate(nested)]
    pub main_tour: TourMainDto,

    /// Selected weekday numbers (1-7); values outside 0..=7 are discarded
    #[serde(default)]
    pub days: Vec<i16>,

    #[serde(default)]
    pub pickup_times: Vec<PickupTimeDto>,

    #[serde(default)]
    pub options: Vec<TourOptionDto>,
}

/// Main tour record block
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TourMainDto {
    #[serde(alias = "name")]
    pub tour_name: String,

    pub operator: String,

    pub operator_id: String,

    #[serde(deserialize_with = "de_lenient_decimal")]
    #[validate(custom(function = validate_non_negative))]
    #[schema(value_type = String, example = "45.00")]
    pub adult_price: Decimal,

    #[serde(deserialize_with = "de_lenient_decimal")]
    #[validate(custom(function = validate_non_negative))]
    #[schema(value_type = String, example = "25.00")]
    pub child_price: Decimal,

    pub is_active: Option<bool>,
}

/// One pickup-time slot as submitted by the form; every field optional,
/// defaults applied by [`PickupTimeDto::normalized`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PickupTimeDto {
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub region: Option<String>,
    pub area: Option<String>,
    /// Period tag "1".."10"; the form submits it as string or number
    #[serde(deserialize_with = "de_lenient_string")]
    pub period: Option<String>,
    #[serde(alias = "periodActive")]
    pub is_active: Option<bool>,
}

/// One priced add-on as submitted by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TourOptionDto {
    #[serde(alias = "option_name")]
    pub name: String,

    #[serde(deserialize_with = "de_lenient_decimal")]
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
}

// ==================== Normalized values ====================

/// Pickup-time values after boundary normalization, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupTimeSpec {
    pub hour: String,
    pub minute: String,
    pub region: String,
    pub area: String,
    pub period: String,
    pub is_active: bool,
}

/// Option values after boundary normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourOptionSpec {
    pub name: String,
    pub price: Decimal,
}

impl PickupTimeDto {
    /// Apply the storage defaults: hour/minute "00" (zero-padded), empty
    /// region/area, period coerced into "1".."10", active unless explicitly
    /// disabled.
    pub fn normalized(&self) -> PickupTimeSpec {
        PickupTimeSpec {
            hour: pad_clock_component(self.hour.as_deref()),
            minute: pad_clock_component(self.minute.as_deref()),
            region: self.region.clone().unwrap_or_default(),
            area: self.area.clone().unwrap_or_default(),
            period: normalize_period(self.period.as_deref()),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

impl TourOptionDto {
    /// Returns `None` for blank entries (empty name and zero price), which
    /// the form submits for untouched rows.
    pub fn normalized(&self) -> Option<TourOptionSpec> {
        let name = self.name.trim();
        if name.is_empty() && self.price.is_zero() {
            return None;
        }
        Some(TourOptionSpec {
            name: name.to_string(),
            price: self.price,
        })
    }
}

/// Encode selected weekday numbers into the fixed-width 7-slot form: slot
/// `n` (1-7) holds `n` when that weekday is selected and 0 otherwise.
/// Input values outside 0..=7 are discarded first.
pub fn encode_week(days: &[i16]) -> [i16; WEEKDAY_SLOTS] {
    let mut slots = [0i16; WEEKDAY_SLOTS];
    for (index, slot) in slots.iter_mut().enumerate() {
        let weekday = (index + 1) as i16;
        if days
            .iter()
            .filter(|d| (0..=7).contains(*d))
            .any(|d| *d == weekday)
        {
            *slot = weekday;
        }
    }
    slots
}

fn pad_clock_component(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if CLOCK_COMPONENT_REGEX.is_match(s) => {
            if s.len() == 1 {
                format!("0{}", s)
            } else {
                s.to_string()
            }
        }
        _ => "00".to_string(),
    }
}

fn normalize_period(raw: Option<&str>) -> String {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|p| (PERIOD_MIN..=PERIOD_MAX).contains(p))
        .map(|p| p.to_string())
        .unwrap_or_else(|| PERIOD_MIN.to_string())
}

fn validate_non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Accept a price as JSON number, numeric string, or null; anything
/// unparseable becomes 0. The legacy form submits all three shapes.
fn de_lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    })
}

/// Accept a value submitted as either JSON string or number
fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

// ==================== Response DTOs ====================

/// Result of a save call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveToursResponseDto {
    pub saved_count: usize,
}

/// Full tour as returned to the client: main record plus child collections
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourDetailDto {
    pub main_tour: TourMainResponseDto,
    /// Selected weekday numbers, zero slots filtered out
    pub days: Vec<i16>,
    pub pickup_times: Vec<PickupTimeResponseDto>,
    pub options: Vec<TourOptionResponseDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourMainResponseDto {
    pub id: i64,
    pub company_ref: String,
    pub tour_name: String,
    pub operator: String,
    pub operator_id: String,
    #[schema(value_type = String, example = "45.00")]
    pub adult_price: Decimal,
    #[schema(value_type = String, example = "25.00")]
    pub child_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Tour> for TourMainResponseDto {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id,
            company_ref: tour.company_ref,
            tour_name: tour.tour_name,
            operator: tour.operator,
            operator_id: tour.operator_id,
            adult_price: tour.adult_price,
            child_price: tour.child_price,
            is_active: tour.is_active,
            created_at: tour.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupTimeResponseDto {
    pub id: i64,
    pub hour: String,
    pub minute: String,
    pub region: String,
    pub area: String,
    pub period: String,
    pub is_active: bool,
}

impl From<PickupTime> for PickupTimeResponseDto {
    fn from(pickup: PickupTime) -> Self {
        Self {
            id: pickup.id,
            hour: pickup.hour,
            minute: pickup.minute,
            region: pickup.region,
            area: pickup.area,
            period: pickup.period,
            is_active: pickup.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourOptionResponseDto {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
}

impl From<TourOption> for TourOptionResponseDto {
    fn from(option: TourOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            price: option.price,
        }
    }
}

impl TourDetailDto {
    /// Assemble a response tour from its storage rows. Day slots holding 0
    /// (unselected) are dropped so the list round-trips to its submitted
    /// form.
    pub fn assemble(
        tour: Tour,
        days: Vec<TourDay>,
        pickup_times: Vec<PickupTime>,
        options: Vec<TourOption>,
    ) -> Self {
        Self {
            main_tour: tour.into(),
            days: days
                .into_iter()
                .map(|d| d.day_value)
                .filter(|v| *v != 0)
                .collect(),
            pickup_times: pickup_times.into_iter().map(Into::into).collect(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_week_fixed_width() {
        assert_eq!(encode_week(&[2, 5]), [0, 2, 0, 0, 5, 0, 0]);
        assert_eq!(encode_week(&[]), [0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_week(&[1, 2, 3, 4, 5, 6, 7]), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_encode_week_discards_out_of_range() {
        assert_eq!(encode_week(&[-1, 3, 8, 42]), [0, 0, 3, 0, 0, 0, 0]);
        // 0 is the "no day" sentinel, never a slot value on its own
        assert_eq!(encode_week(&[0]), [0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_week_ignores_duplicates() {
        assert_eq!(encode_week(&[5, 5, 5]), [0, 0, 0, 0, 5, 0, 0]);
    }

    #[test]
    fn test_empty_pickup_entry_gets_defaults() {
        let spec = PickupTimeDto::default().normalized();
        assert_eq!(
            spec,
            PickupTimeSpec {
                hour: "00".to_string(),
                minute: "00".to_string(),
                region: String::new(),
                area: String::new(),
                period: "1".to_string(),
                is_active: true,
            }
        );
    }

    #[test]
    fn test_pickup_clock_components_zero_padded() {
        let dto = PickupTimeDto {
            hour: Some("7".to_string()),
            minute: Some("5".to_string()),
            ..Default::default()
        };
        let spec = dto.normalized();
        assert_eq!(spec.hour, "07");
        assert_eq!(spec.minute, "05");
    }

    #[test]
    fn test_pickup_garbage_clock_components_fall_back() {
        let dto = PickupTimeDto {
            hour: Some("7:30".to_string()),
            minute: Some("abc".to_string()),
            ..Default::default()
        };
        let spec = dto.normalized();
        assert_eq!(spec.hour, "00");
        assert_eq!(spec.minute, "00");
    }

    #[test]
    fn test_pickup_period_coerced_into_range() {
        let period = |raw: &str| {
            PickupTimeDto {
                period: Some(raw.to_string()),
                ..Default::default()
            }
            .normalized()
            .period
        };
        assert_eq!(period("3"), "3");
        assert_eq!(period("10"), "10");
        assert_eq!(period("0"), "1");
        assert_eq!(period("11"), "1");
        assert_eq!(period("yaz"), "1");
    }

    #[test]
    fn test_pickup_explicitly_inactive() {
        let dto = PickupTimeDto {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!dto.normalized().is_active);
    }

    #[test]
    fn test_blank_option_dropped() {
        let blank = TourOptionDto {
            name: "".to_string(),
            price: Decimal::ZERO,
        };
        assert!(blank.normalized().is_none());

        let whitespace = TourOptionDto {
            name: "   ".to_string(),
            price: Decimal::ZERO,
        };
        assert!(whitespace.normalized().is_none());
    }

    #[test]
    fn test_named_or_priced_option_kept() {
        let named = TourOptionDto {
            name: "Lunch".to_string(),
            price: Decimal::from(10),
        };
        assert_eq!(
            named.normalized(),
            Some(TourOptionSpec {
                name: "Lunch".to_string(),
                price: Decimal::from(10),
            })
        );

        // Price alone is enough to keep the row
        let priced = TourOptionDto {
            name: "".to_string(),
            price: Decimal::from(5),
        };
        assert!(priced.normalized().is_some());
    }

    #[test]
    fn test_entry_deserializes_legacy_field_names() {
        // option_name instead of name, prices as strings, period as number
        let json = r#"{
            "mainTour": {
                "name": "Pamukkale",
                "operator": "Akdeniz Turizm",
                "operatorId": "AKD-17",
                "adultPrice": "45.50",
                "childPrice": 20
            },
            "days": [2, 5],
            "pickupTimes": [{"hour": "8", "minute": "30", "period": 2}],
            "options": [{"option_name": "Lunch", "price": "10"}]
        }"#;

        let entry: TourEntryDto = serde_json::from_str(json).unwrap();
        assert_eq!(entry.main_tour.tour_name, "Pamukkale");
        assert_eq!(entry.main_tour.adult_price, "45.50".parse().unwrap());
        assert_eq!(entry.main_tour.child_price, Decimal::from(20));
        assert_eq!(entry.pickup_times[0].normalized().hour, "08");
        assert_eq!(entry.pickup_times[0].normalized().period, "2");
        assert_eq!(entry.options[0].name, "Lunch");
    }

    #[test]
    fn test_unparseable_price_defaults_to_zero() {
        let json = r#"{"name": "Transfer", "price": "bedava"}"#;
        let option: TourOptionDto = serde_json::from_str(json).unwrap();
        assert_eq!(option.price, Decimal::ZERO);
    }

    #[test]
    fn test_negative_price_rejected() {
        let main = TourMainDto {
            tour_name: "Kapadokya".to_string(),
            adult_price: Decimal::from(-5),
            ..Default::default()
        };
        assert!(main.validate().is_err());
    }
}
