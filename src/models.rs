//! Frontend Models
//!
//! Data structures matching the records served by the animal store.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned record identifier.
///
/// Opaque text. The store may send it as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnimalId(String);

impl AnimalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AnimalId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TextOrNumber::deserialize(deserializer).map(|v| AnimalId(v.into_text()))
    }
}

/// Age as transmitted, kept verbatim.
///
/// Filtering matches against the raw text; sorting uses [`Age::years`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(String);

impl Age {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decimal text of the age, as the store sent it.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Integer years, parsed leniently: leading whitespace and sign are
    /// accepted and anything after the leading digits is ignored
    /// (`"7 years"` is 7, `"2.5"` is 2). `None` when there are no digits.
    pub fn years(&self) -> Option<i64> {
        parse_leading_int(&self.0)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TextOrNumber::deserialize(deserializer).map(|v| Age(v.into_text()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number_text(&number),
        }
    }
}

// Integral floats print without a fraction (`5.0` is "5"), as the store's
// own clients render them.
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Animal record (matches the remote store)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Age,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub next_checkup: Option<String>,
}

/// Creation payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAnimal {
    pub name: String,
    pub age: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_checkup: Option<String>,
}

/// Body of `PUT /animals/{id}`; only the checkup date is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckupUpdate {
    pub next_checkup: String,
}

/// Render a checkup date as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
/// offset is used) and plain `YYYY-MM-DD` dates.
pub fn format_checkup(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_wire_types() {
        let json = r#"[
            {"id": "1", "name": "Rex", "age": "5", "type": "dog", "next_checkup": "2024-03-01T10:00:00.000Z", "createdAt": 1},
            {"id": 2, "name": "Tom", "age": 15, "type": "cat"}
        ]"#;
        let animals: Vec<Animal> = serde_json::from_str(json).expect("decode");

        assert_eq!(animals[0].id, AnimalId::new("1"));
        assert_eq!(animals[0].age.text(), "5");
        assert_eq!(animals[0].kind, "dog");
        assert_eq!(animals[1].id, AnimalId::new("2"));
        assert_eq!(animals[1].age.text(), "15");
        assert_eq!(animals[1].age.years(), Some(15));
        assert_eq!(animals[1].next_checkup, None);
    }

    #[test]
    fn test_integral_float_ages_have_integer_text() {
        let json = r#"[
            {"id": 7.0, "age": 5.0, "type": "dog"},
            {"id": "8", "age": 2.5, "type": "cat"},
            {"id": "9", "age": -0.0, "type": "cat"}
        ]"#;
        let animals: Vec<Animal> = serde_json::from_str(json).expect("decode");

        assert_eq!(animals[0].id, AnimalId::new("7"));
        assert_eq!(animals[0].age.text(), "5");
        assert_eq!(animals[1].age.text(), "2.5");
        assert_eq!(animals[2].age.text(), "0");
    }

    #[test]
    fn test_age_years_is_lenient() {
        assert_eq!(Age::new("7").years(), Some(7));
        assert_eq!(Age::new("  12").years(), Some(12));
        assert_eq!(Age::new("-3").years(), Some(-3));
        assert_eq!(Age::new("2.5").years(), Some(2));
        assert_eq!(Age::new("4 years").years(), Some(4));
        assert_eq!(Age::new("old").years(), None);
        assert_eq!(Age::new("").years(), None);
        assert_eq!(Age::new("-").years(), None);
    }

    #[test]
    fn test_new_animal_wire_shape() {
        let new_animal = NewAnimal {
            name: "Rex".to_string(),
            age: "3".to_string(),
            kind: "dog".to_string(),
            next_checkup: None,
        };
        let value = serde_json::to_value(&new_animal).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Rex", "age": "3", "type": "dog"}));
    }

    #[test]
    fn test_format_checkup() {
        assert_eq!(format_checkup(Some("2024-03-01")), "3/1/2024");
        assert_eq!(format_checkup(Some("2024-12-25T08:30:00Z")), "12/25/2024");
        assert_eq!(format_checkup(Some("2024-12-25T23:30:00-05:00")), "12/25/2024");
        assert_eq!(format_checkup(Some("next tuesday")), "Invalid Date");
        assert_eq!(format_checkup(Some("  ")), "-");
        assert_eq!(format_checkup(None), "-");
    }
}
