/// Location picker built from a configured list of places.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMenu {
    options: Vec<String>,
    selected: Option<usize>,
}

impl LocationMenu {
    /// One option per configured location, in order. Nothing is selected.
    pub fn populate(locations: &[String]) -> Self {
        Self { options: locations.to_vec(), selected: None }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Select `name` if it is one of the options.
    pub fn select(&mut self, name: &str) -> bool {
        match self.options.iter().position(|o| o == name) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|idx| self.options[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn populated_from_configuration() {
        let menu = LocationMenu::populate(&Config::default().locations);

        assert_eq!(menu.options().first().map(String::as_str), Some("San Francisco"));
        assert_eq!(menu.options().last().map(String::as_str), Some("West Palm Beach"));
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn select_only_accepts_known_options() {
        let mut menu = LocationMenu::populate(&["Tampa".into(), "Miami".into()]);

        assert!(menu.select("Miami"));
        assert_eq!(menu.selected(), Some("Miami"));

        assert!(!menu.select("Atlantis"));
        assert_eq!(menu.selected(), Some("Miami"));
    }
}
