use raylib::prelude::*;
use crate::constants::*;
use crate::stage::SlideSurface;

/// Largest scale that keeps a `width` x `height` image within 90% of `area`,
/// never enlarging it.
pub fn fit_scale(width: f32, height: f32, area: &Rectangle) -> f32 {
    let max_width = area.width * 0.9;
    let max_height = area.height * 0.9;
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (max_width / width).min(max_height / height).min(1.0)
}

pub struct Slide {
    image: Texture2D,
    title: String,

    active: bool,
    displayed: bool,
    focused: bool,

    // Entrance: rise from 5% below the resting place while fading in
    offset: f32,
    alpha: f32,
    animation_timer: f32,
    is_animating: bool,
    tween_offset: ease::Tween,
    tween_alpha: ease::Tween,
}

impl Slide {
    pub fn new(image: Texture2D, title: String) -> Self {
        Self {
            image,
            title,

            active: false,
            displayed: false,
            focused: false,

            offset: 0.0,
            alpha: 1.0,
            animation_timer: 0.0,
            is_animating: false,
            tween_offset: Self::offset_tween(),
            tween_alpha: Self::alpha_tween(),
        }
    }

    fn offset_tween() -> ease::Tween {
        ease::Tween::new(ease::cubic_out, 0.05, 0.0, ANIMATION_DURATION)
    }

    fn alpha_tween() -> ease::Tween {
        ease::Tween::new(ease::linear_none, 0.0, 1.0, ANIMATION_DURATION)
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating || !self.active {
            return;
        }

        self.offset = self.tween_offset.apply(dt);
        self.alpha = self.tween_alpha.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= ANIMATION_DURATION {
            self.is_animating = false;
            self.offset = 0.0;
            self.alpha = 1.0;
        }
    }

    /// Draws the slide centered in `area`, scaled down to fit. The focus ring
    /// is only shown to keyboard users.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, show_focus: bool) {
        if !self.displayed {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, &area);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let center = Vector2::new(
            area.x + area.width * 0.5,
            area.y + area.height * (0.5 + self.offset),
        );

        let tint = Color::new(255, 255, 255, (self.alpha.clamp(0.0, 1.0) * 255.0) as u8);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            Rectangle::new(center.x, center.y, scaled_width, scaled_height), // Dest rect uses scaled size
            Vector2::new(scaled_width * 0.5, scaled_height * 0.5), // Relative to the dest rectangle
            0.0,
            tint,
        );

        if show_focus && self.focused {
            let ring = Rectangle::new(
                center.x - scaled_width * 0.5 - 4.0,
                center.y - scaled_height * 0.5 - 4.0,
                scaled_width + 8.0,
                scaled_height + 8.0,
            );
            d.draw_rectangle_lines_ex(ring, 3.0, Color::GOLD);
        }
    }
}

impl SlideSurface for Slide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // The window has no accessibility tree; hidden flags and labels stop here.
    fn set_aria_hidden(&mut self, _hidden: bool) {}

    fn set_labelled_by(&mut self, _id: &str) {}

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn restart_animation(&mut self) {
        self.tween_offset = Self::offset_tween();
        self.tween_alpha = Self::alpha_tween();
        self.offset = 0.05;
        self.alpha = 0.0;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }
}
