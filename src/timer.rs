// One-shot countdown advanced by the frame delta. Scheduling while pending
// replaces the countdown (resize debounce relies on this).
#[derive(Debug, Default, Clone, Copy)]
pub struct Deferred {
    remaining: Option<f32>,
}

impl Deferred {
    pub fn schedule(&mut self, delay: f32) {
        self.remaining = Some(delay);
    }

    pub fn update(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }
}
