//! Choosing which location to show, and remembering the choice.

use tracing::{debug, error, warn};

use crate::{
    menu::LocationMenu,
    prefs::{CITY_KEY, PreferenceStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupAction {
    /// Fetch weather for this location.
    Fetch(String),
    /// Leave the display as it is.
    Idle,
}

/// Work out what to show on startup from the stored preference.
///
/// A stored location is re-selected (and re-saved) exactly as if the user had
/// picked it. With nothing stored, or an empty value stored, the default is
/// fetched but not selected.
/// If the store cannot be read the default is selected and nothing is fetched.
pub fn restore(
    prefs: &mut dyn PreferenceStore,
    menu: &mut LocationMenu,
    default_location: &str,
) -> StartupAction {
    match read_stored(prefs) {
        Ok(Some(city)) => StartupAction::Fetch(choose(prefs, menu, &city)),
        Ok(None) => {
            debug!(location = default_location, "no stored location, using default");
            StartupAction::Fetch(default_location.to_string())
        }
        Err(err) => {
            error!("failed when retrieving city preferences: {err:#}");
            menu.select(default_location);
            StartupAction::Idle
        }
    }
}

/// The stored location, if any. A read failure is logged and treated as
/// nothing stored.
pub fn stored_location(prefs: &dyn PreferenceStore) -> Option<String> {
    read_stored(prefs).unwrap_or_else(|err| {
        error!("failed when retrieving city preferences: {err:#}");
        None
    })
}

fn read_stored(prefs: &dyn PreferenceStore) -> anyhow::Result<Option<String>> {
    Ok(prefs.get(CITY_KEY)?.filter(|city| !city.is_empty()))
}

/// Select `location` and store it as the preferred one. Returns the location
/// to fetch. A failed save is logged and otherwise ignored.
pub fn choose(prefs: &mut dyn PreferenceStore, menu: &mut LocationMenu, location: &str) -> String {
    if !menu.select(location) {
        debug!(location, "location is not one of the menu options");
    }
    if let Err(err) = prefs.set(CITY_KEY, location) {
        warn!(location, "failed to store city preference: {err:#}");
    }
    location.to_string()
}
