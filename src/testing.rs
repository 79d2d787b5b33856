//! Recording stage used by the unit tests.

use std::collections::BTreeMap;

use crate::stage::{Control, LiveRegion, SlideSurface, Stage};

#[derive(Debug, Default, Clone)]
pub struct FakeSlide {
    pub title: Option<String>,
    pub active: bool,
    pub displayed: bool,
    pub focused: bool,
    pub aria_hidden: bool,
    pub labelled_by: Option<String>,
    pub animation_restarts: usize,
}

impl SlideSurface for FakeSlide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn set_aria_hidden(&mut self, hidden: bool) {
        self.aria_hidden = hidden;
    }

    fn set_labelled_by(&mut self, id: &str) {
        self.labelled_by = Some(id.to_string());
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn restart_animation(&mut self) {
        self.animation_restarts += 1;
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeControl {
    pub disabled: bool,
    pub label: String,
    pub described_by: Option<String>,
}

impl Control for FakeControl {
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_described_by(&mut self, id: &str) {
        self.described_by = Some(id.to_string());
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeStage {
    pub slides: Vec<FakeSlide>,
    pub previous: FakeControl,
    pub next: FakeControl,
    pub progress: f64,
    pub slide_number: usize,
    pub keyboard_navigation: bool,
    pub descriptions: BTreeMap<String, String>,
    pub announcements: Vec<String>,
}

impl FakeStage {
    /// `count` slides titled "Title 1", "Title 2", ...
    pub fn with_slides(count: usize) -> Self {
        let slides = (1..=count)
            .map(|n| FakeSlide {
                title: Some(format!("Title {n}")),
                ..FakeSlide::default()
            })
            .collect();
        Self { slides, ..Self::default() }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.active)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn displayed_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.displayed)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn focused_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.focused)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn unhidden_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| !slide.aria_hidden)
            .map(|(index, _)| index + 1)
            .collect()
    }
}

impl LiveRegion for FakeStage {
    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}

impl Stage for FakeStage {
    type Slide = FakeSlide;
    type Control = FakeControl;

    fn slides(&self) -> &[FakeSlide] {
        &self.slides
    }

    fn slides_mut(&mut self) -> &mut [FakeSlide] {
        &mut self.slides
    }

    fn previous_control(&mut self) -> &mut FakeControl {
        &mut self.previous
    }

    fn next_control(&mut self) -> &mut FakeControl {
        &mut self.next
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn set_slide_number(&mut self, number: usize) {
        self.slide_number = number;
    }

    fn set_keyboard_navigation(&mut self, active: bool) {
        self.keyboard_navigation = active;
    }

    fn add_description(&mut self, id: &str, text: &str) {
        self.descriptions.insert(id.to_string(), text.to_string());
    }
}
