use tracing::debug;

use crate::{
    document::Fragment,
    error::WeatherError,
    extract::extract,
    icon::IconResolver,
    model::ConditionRecord,
    schema::{FieldSet, ICON_FIELD},
};

/// Build one condition record, rewriting `icon` to a local resource path
/// when the field set asks for it and the fragment provides it.
pub fn build_condition<F>(
    fragment: &F,
    fields: &FieldSet,
    icons: &IconResolver,
) -> Result<ConditionRecord, WeatherError>
where
    F: Fragment + ?Sized,
{
    let mut map = extract(fragment, fields.names());

    // Only fields in the set are extracted, so this also covers sets without `icon`.
    if let Some(raw) = map.get(ICON_FIELD) {
        let resolved = icons.resolve(raw)?;
        map.insert(ICON_FIELD, resolved);
    }

    Ok(ConditionRecord::new(map))
}

/// Build every forecast day in input order. One bad day fails the lot.
pub fn build_forecast_collection<F>(
    fragments: &[&F],
    fields: &FieldSet,
    icons: &IconResolver,
) -> Result<Vec<ConditionRecord>, WeatherError>
where
    F: Fragment + ?Sized,
{
    debug!(days = fragments.len(), "building forecast conditions");

    fragments.iter().map(|fragment| build_condition(*fragment, fields, icons)).collect()
}
