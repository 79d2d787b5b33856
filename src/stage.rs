//! Surfaces the presentation core drives. The core never draws; it flips the
//! flags and texts exposed here and lets the host decide what they look like.

pub trait SlideSurface {
    fn set_active(&mut self, active: bool);
    fn set_displayed(&mut self, displayed: bool);
    fn set_focused(&mut self, focused: bool);
    fn set_aria_hidden(&mut self, hidden: bool);
    fn set_labelled_by(&mut self, id: &str);
    fn title(&self) -> Option<&str>;
    fn restart_animation(&mut self);
}

pub trait Control {
    fn set_disabled(&mut self, disabled: bool);
    fn set_label(&mut self, label: &str);
    fn set_described_by(&mut self, id: &str);
}

/// Assistive-technology announcement channel.
pub trait LiveRegion {
    fn announce(&mut self, message: &str);
}

pub trait Stage: LiveRegion {
    type Slide: SlideSurface;
    type Control: Control;

    fn slides(&self) -> &[Self::Slide];
    fn slides_mut(&mut self) -> &mut [Self::Slide];
    fn previous_control(&mut self) -> &mut Self::Control;
    fn next_control(&mut self) -> &mut Self::Control;

    fn set_progress(&mut self, percent: f64);
    fn set_slide_number(&mut self, number: usize);
    fn set_keyboard_navigation(&mut self, active: bool);
    // Descriptive text other elements point at by `id`
    fn add_description(&mut self, id: &str, text: &str);

    fn slide_count(&self) -> usize {
        self.slides().len()
    }

    fn slide_title(&self, slide: usize) -> Option<&str> {
        slide
            .checked_sub(1)
            .and_then(|index| self.slides().get(index))
            .and_then(SlideSurface::title)
    }
}
