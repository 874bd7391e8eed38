//! Which sections of the feed are read, and which fields each one yields.

use serde::{Deserialize, Serialize};

/// Field whose value is rewritten through the icon resolver.
pub const ICON_FIELD: &str = "icon";

/// Ordered list of field names extracted from one kind of section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(Vec<String>);

impl FieldSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// A section element name together with the fields read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub section: String,
    pub fields: FieldSet,
}

impl SectionSpec {
    fn new(section: &str, fields: &[&str]) -> Self {
        Self { section: section.to_owned(), fields: FieldSet::new(fields.iter().copied()) }
    }
}

/// Current conditions and forecast days are configured separately even
/// though both produce condition records.
///
/// Example TOML:
/// [schema.current_conditions]
/// section = "current_conditions"
/// fields = ["condition", "temp_f", "humidity", "icon", "wind_condition"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSchema {
    pub forecast_information: SectionSpec,
    pub current_conditions: SectionSpec,
    pub forecast_conditions: SectionSpec,
}

impl Default for FeedSchema {
    fn default() -> Self {
        Self {
            forecast_information: SectionSpec::new(
                "forecast_information",
                &["city", "forecast_date"],
            ),
            current_conditions: SectionSpec::new(
                "current_conditions",
                &["condition", "temp_f", "humidity", "icon", "wind_condition"],
            ),
            forecast_conditions: SectionSpec::new(
                "forecast_conditions",
                &["day_of_week", "low", "high", "icon", "condition"],
            ),
        }
    }
}
