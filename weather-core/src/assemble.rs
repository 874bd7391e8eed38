use tracing::debug;

use crate::{
    condition::{build_condition, build_forecast_collection},
    document::Fragment,
    error::WeatherError,
    extract::extract,
    icon::IconResolver,
    model::{ForecastInfo, WeatherSnapshot},
    schema::FeedSchema,
};

/// Turns a parsed feed document into a [`WeatherSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct WeatherAssembler {
    schema: FeedSchema,
    icons: IconResolver,
}

impl WeatherAssembler {
    pub fn new(schema: FeedSchema, icons: IconResolver) -> Self {
        Self { schema, icons }
    }

    /// Forecast information and current conditions are required; the
    /// forecast day list may be empty.
    pub fn assemble<D>(&self, document: &D) -> Result<WeatherSnapshot, WeatherError>
    where
        D: Fragment + ?Sized,
    {
        debug!("converting feed document to snapshot");
        let schema = &self.schema;

        let info_section = required(document, &schema.forecast_information.section)?;
        let forecast_info = ForecastInfo::new(extract(
            info_section,
            schema.forecast_information.fields.names(),
        ));

        let current_section = required(document, &schema.current_conditions.section)?;
        let current_conditions =
            build_condition(current_section, &schema.current_conditions.fields, &self.icons)?;

        let forecast_conditions = build_forecast_collection(
            &document.sections(&schema.forecast_conditions.section),
            &schema.forecast_conditions.fields,
            &self.icons,
        )?;

        Ok(WeatherSnapshot::new(forecast_info, current_conditions, forecast_conditions))
    }
}

fn required<'a, D>(document: &'a D, name: &str) -> Result<&'a D::Section, WeatherError>
where
    D: Fragment + ?Sized,
{
    document.section(name).ok_or_else(|| WeatherError::MissingSection(name.to_owned()))
}
