use crate::model::{Category, DISASTER_CATEGORIES};

/// Route name of the guideline detail screen.
pub const SAFETY_DETAIL_ROUTE: &str = "SafetyGuidelineDetail";

/// Parameters carried to a detail screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavParams {
    pub title: String,
}

/// Navigation sink for screen transitions.
pub trait Navigator {
    fn navigate(&mut self, route: &'static str, params: NavParams);
}

/// Screen controller for the emergency-evacuation category list. Entirely
/// local: a fixed table and a navigation call, no I/O.
pub struct SafetyCategoryScreen<N> {
    navigator: N,
}

impl<N: Navigator> SafetyCategoryScreen<N> {
    pub fn new(navigator: N) -> SafetyCategoryScreen<N> {
        SafetyCategoryScreen { navigator }
    }

    /// The compiled-in category list, identical on every call.
    pub fn categories(&self) -> &'static [Category] {
        DISASTER_CATEGORIES
    }

    /// Opens the guideline detail for `category`, passing only its title.
    pub fn select_category(&mut self, category: &Category) {
        self.navigator.navigate(
            SAFETY_DETAIL_ROUTE,
            NavParams { title: category.title.to_string() },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Vec<(&'static str, NavParams)>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, route: &'static str, params: NavParams) {
            self.visits.push((route, params));
        }
    }

    #[test]
    fn categories_are_stable_and_ordered() {
        let screen = SafetyCategoryScreen::new(RecordingNavigator::default());
        let first = screen.categories();
        let second = screen.categories();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "1");
        assert_eq!(first[1].id, "2");
    }

    #[test]
    fn selecting_navigates_to_detail_with_title() {
        let mut screen = SafetyCategoryScreen::new(RecordingNavigator::default());
        let category = screen.categories()[0];

        screen.select_category(&category);

        assert_eq!(
            screen.navigator.visits,
            vec![(
                SAFETY_DETAIL_ROUTE,
                NavParams { title: category.title.to_string() },
            )],
        );
    }
}
