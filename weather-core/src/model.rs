use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub location: String,
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

/// Field name to extracted value. Absent keys mean the field was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, String>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Location metadata for one forecast: `city`, `forecast_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastInfo(AttributeMap);

impl ForecastInfo {
    pub fn new(fields: AttributeMap) -> Self {
        Self(fields)
    }

    pub fn city(&self) -> Option<&str> {
        self.0.get("city")
    }

    pub fn forecast_date(&self) -> Option<&str> {
        self.0.get("forecast_date")
    }

    pub fn fields(&self) -> &AttributeMap {
        &self.0
    }
}

/// Current conditions or a single forecast day. When present, `icon` holds a
/// resolved local resource path rather than the raw feed reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionRecord(AttributeMap);

impl ConditionRecord {
    pub fn new(fields: AttributeMap) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field)
    }

    pub fn icon(&self) -> Option<&str> {
        self.0.get("icon")
    }

    pub fn fields(&self) -> &AttributeMap {
        &self.0
    }
}

/// Complete result of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    forecast_info: ForecastInfo,
    current_conditions: ConditionRecord,
    forecast_conditions: Vec<ConditionRecord>,
}

impl WeatherSnapshot {
    pub fn new(
        forecast_info: ForecastInfo,
        current_conditions: ConditionRecord,
        forecast_conditions: Vec<ConditionRecord>,
    ) -> Self {
        Self { forecast_info, current_conditions, forecast_conditions }
    }

    pub fn forecast_info(&self) -> &ForecastInfo {
        &self.forecast_info
    }

    pub fn current_conditions(&self) -> &ConditionRecord {
        &self.current_conditions
    }

    pub fn forecast_conditions(&self) -> &[ConditionRecord] {
        &self.forecast_conditions
    }
}
