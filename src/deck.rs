use std::collections::BTreeMap;
use std::path::Path;
use raylib::prelude::*;

use crate::config::Config;
use crate::constants::*;
use crate::error::DeckError;
use crate::slide::Slide;
use crate::stage::{Control, LiveRegion, Stage};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif};

/// Loads every image in `dir` as a slide. Images that fail to load are
/// logged and skipped, so the result may be empty.
pub fn load_slides(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    config: &Config,
) -> Result<Vec<Slide>, DeckError> {
    let mut slides = Vec::new();
    for path in load_sorted_image_paths(dir)? {
        match load_texture_with_exif(rl, thread, &path) {
            Ok((texture, exif)) => {
                let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                let stem = path.file_stem().and_then(|n| n.to_str()).unwrap_or_default();
                let title = config
                    .titles
                    .get(file_name)
                    .cloned()
                    .or(exif.description)
                    .unwrap_or_else(|| stem.to_string());
                tracing::debug!(%title, "loaded {}", path.display());
                slides.push(Slide::new(texture, title));
            }
            Err(e) => tracing::warn!("skipping slide: {}", e),
        }
    }
    Ok(slides)
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ControlId {
    Previous,
    Next,
}

#[derive(Debug, Default)]
pub struct Button {
    label: String,
    disabled: bool,
    described_by: Option<String>,
}

impl Button {
    fn new(label: &str) -> Self {
        Self { label: label.to_string(), ..Self::default() }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle, highlight: bool) {
        let (fill, text) = if self.disabled {
            (Color::new(60, 60, 60, 255), Color::GRAY)
        } else {
            (Color::new(40, 90, 160, 255), Color::WHITE)
        };
        d.draw_rectangle(bounds.x as i32, bounds.y as i32, bounds.width as i32, bounds.height as i32, fill);
        if highlight && !self.disabled {
            d.draw_rectangle_lines(bounds.x as i32, bounds.y as i32, bounds.width as i32, bounds.height as i32, Color::GOLD);
        }
        let text_x = bounds.x + (bounds.width - approx_text_width(&self.label) as f32) * 0.5;
        let text_y = bounds.y + (bounds.height - FONT_SIZE as f32) * 0.5;
        d.draw_text(&self.label, text_x as i32, text_y as i32, FONT_SIZE, text);
    }
}

impl Control for Button {
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

/// Screen regions for a window of `width` x `height`.
#[derive(Debug)]
pub struct Layout {
    pub progress: Rectangle,
    pub slides: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub counter_y: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let bar_top = height - CONTROL_BAR_HEIGHT;
        let button_y = bar_top + (CONTROL_BAR_HEIGHT - BUTTON_HEIGHT) * 0.5;
        let margin = 16.0;
        Self {
            progress: Rectangle::new(0.0, 0.0, width, PROGRESS_HEIGHT),
            slides: Rectangle::new(0.0, PROGRESS_HEIGHT, width, (bar_top - PROGRESS_HEIGHT).max(0.0)),
            previous: Rectangle::new(margin, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            next: Rectangle::new(width - margin - BUTTON_WIDTH, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            counter_y: bar_top + (CONTROL_BAR_HEIGHT - FONT_SIZE as f32) * 0.5,
        }
    }
}

pub fn contains(rect: &Rectangle, x: f32, y: f32) -> bool {
    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}

// The default raylib font averages about half its size per glyph.
fn approx_text_width(text: &str) -> i32 {
    text.chars().count() as i32 * FONT_SIZE / 2
}

/// The window-backed stage: slides, chrome and the caption that serves as
/// live region.
pub struct Deck {
    slides: Vec<Slide>,
    previous: Button,
    next: Button,
    progress: f64,
    slide_number: usize,
    keyboard_navigation: bool,
    descriptions: BTreeMap<String, String>,
    caption: Option<String>,
    caption_timer: f32,
}

impl Deck {
    pub fn new(slides: Vec<Slide>, config: &Config) -> Self {
        Self {
            slides,
            previous: Button::new(&config.previous_label),
            next: Button::new(&config.next_label),
            progress: 0.0,
            slide_number: 1,
            keyboard_navigation: false,
            descriptions: BTreeMap::new(),
            caption: None,
            caption_timer: 0.0,
        }
    }

    /// Enabled control under the point, if any. Disabled controls do not
    /// take activation.
    pub fn control_at(&self, x: f32, y: f32, layout: &Layout) -> Option<ControlId> {
        if !self.previous.disabled && contains(&layout.previous, x, y) {
            Some(ControlId::Previous)
        } else if !self.next.disabled && contains(&layout.next, x, y) {
            Some(ControlId::Next)
        } else {
            None
        }
    }

    // Text the controls are described by, shown next to them
    fn control_description(&self) -> Option<&str> {
        [&self.next, &self.previous]
            .into_iter()
            .find_map(|button| button.described_by.as_deref())
            .and_then(|id| self.descriptions.get(id))
            .map(String::as_str)
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
        if self.caption.is_some() {
            self.caption_timer -= dt;
            if self.caption_timer <= 0.0 {
                self.caption = None;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let layout = Layout::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.clear_background(Color::BLACK);

        for slide in self.slides.iter().filter(|slide| slide.is_displayed()) {
            slide.draw(d, layout.slides, self.keyboard_navigation);
        }

        let progress_width = layout.progress.width * (self.progress / 100.0) as f32;
        d.draw_rectangle(0, 0, layout.progress.width as i32, layout.progress.height as i32, Color::new(50, 50, 50, 255));
        d.draw_rectangle(0, 0, progress_width as i32, layout.progress.height as i32, Color::SKYBLUE);

        let bar_top = layout.slides.y + layout.slides.height;
        d.draw_rectangle(0, bar_top as i32, layout.progress.width as i32, CONTROL_BAR_HEIGHT as i32, Color::new(20, 20, 20, 255));

        self.previous.draw(d, layout.previous, self.keyboard_navigation);
        self.next.draw(d, layout.next, self.keyboard_navigation);

        let counter = format!("{} / {}", self.slide_number, self.slides.len());
        let counter_x = (layout.progress.width - approx_text_width(&counter) as f32) * 0.5;
        d.draw_text(&counter, counter_x as i32, layout.counter_y as i32, FONT_SIZE, Color::LIGHTGRAY);

        // Navigation hints only matter once the keyboard is in use
        if self.keyboard_navigation {
            if let Some(help) = self.control_description() {
                d.draw_text(help, 16, bar_top as i32 - 2 * FONT_SIZE - 16, FONT_SIZE, Color::GRAY);
            }
        }

        if let Some(caption) = &self.caption {
            d.draw_text(caption, 16, bar_top as i32 - FONT_SIZE - 8, FONT_SIZE, Color::RAYWHITE);
        }
    }
}

impl LiveRegion for Deck {
    fn announce(&mut self, message: &str) {
        self.caption = Some(message.to_string());
        self.caption_timer = CAPTION_DURATION;
    }
}

impl Stage for Deck {
    type Slide = Slide;
    type Control = Button;

    fn slides(&self) -> &[Slide] {
        &self.slides
    }

    fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    fn previous_control(&mut self) -> &mut Button {
        &mut self.previous
    }

    fn next_control(&mut self) -> &mut Button {
        &mut self.next
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn set_slide_number(&mut self, number: usize) {
        self.slide_number = number;
    }

    fn set_keyboard_navigation(&mut self, active: bool) {
        if self.keyboard_navigation != active {
            tracing::trace!(active, "keyboard navigation marker");
        }
        self.keyboard_navigation = active;
    }

    fn add_description(&mut self, id: &str, text: &str) {
        self.descriptions.insert(id.to_string(), text.to_string());
    }
}
