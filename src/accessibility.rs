use crate::config::Config;
use crate::constants::NAV_HELP_ID;
use crate::input::Key;
use crate::navigation::NavigationController;
use crate::stage::{Control, LiveRegion, SlideSurface, Stage};

/// Wraps the navigation controller with screen-reader support.
///
/// Navigation goes through here so that every change of slide is announced
/// and the ARIA hidden flags follow the current slide. The wrapped methods
/// return exactly what the controller returns.
pub struct AccessibilityLayer<S: Stage> {
    navigator: NavigationController<S>,
    config: Config,
}

impl<S: Stage> AccessibilityLayer<S> {
    pub fn new(navigator: NavigationController<S>, config: &Config) -> Self {
        let mut layer = Self {
            navigator,
            config: config.clone(),
        };
        layer.label_slides();
        layer.describe_controls(&config.nav_help);
        layer
    }

    pub fn navigator(&self) -> &NavigationController<S> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut NavigationController<S> {
        &mut self.navigator
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.navigator.advance();
        self.after_navigation(moved);
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.navigator.retreat();
        self.after_navigation(moved);
        moved
    }

    pub fn jump_to(&mut self, slide: usize) -> bool {
        let moved = self.navigator.jump_to(slide);
        self.after_navigation(moved);
        moved
    }

    pub fn note_key(&mut self, key: Key) {
        if key.is_navigation() {
            self.navigator.stage_mut().set_keyboard_navigation(true);
        }
    }

    pub fn note_pointer(&mut self) {
        self.navigator.stage_mut().set_keyboard_navigation(false);
    }

    fn after_navigation(&mut self, moved: bool) {
        if !moved {
            return;
        }
        self.sync_hidden();
        self.announce_current();
    }

    fn label_slides(&mut self) {
        for (index, slide) in self.navigator.stage_mut().slides_mut().iter_mut().enumerate() {
            slide.set_labelled_by(&format!("slide-{}-title", index + 1));
        }
        self.sync_hidden();
    }

    fn describe_controls(&mut self, help: &str) {
        let stage = self.navigator.stage_mut();
        stage.add_description(NAV_HELP_ID, help);
        stage.previous_control().set_described_by(NAV_HELP_ID);
        stage.next_control().set_described_by(NAV_HELP_ID);
    }

    fn sync_hidden(&mut self) {
        let current = self.navigator.current_slide();
        for (index, slide) in self.navigator.stage_mut().slides_mut().iter_mut().enumerate() {
            slide.set_aria_hidden(index + 1 != current);
        }
    }

    fn announce_current(&mut self) {
        let current = self.navigator.current_slide();
        let total = self.navigator.total_slides();
        let stage = self.navigator.stage_mut();
        let title = stage.slide_title(current).unwrap_or_default();
        let message = self.config.announcement_for(current, total, title);
        tracing::info!(slide = current, "{message}");
        stage.announce(&message);
    }
}
