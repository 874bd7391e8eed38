use crate::{document::Fragment, model::AttributeMap};

/// Pull the named fields out of `fragment`.
///
/// Fields with no matching node are left out of the map rather than treated
/// as errors; optional fields such as `wind_condition` rely on this.
pub fn extract<F, S>(fragment: &F, field_names: &[S]) -> AttributeMap
where
    F: Fragment + ?Sized,
    S: AsRef<str>,
{
    field_names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            fragment.field(name).map(|value| (name.to_owned(), value.to_owned()))
        })
        .collect()
}
