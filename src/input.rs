use crate::constants::*;
use crate::timer::Deferred;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl Key {
    /// Keys the presentation claims for itself.
    pub fn is_navigation(self) -> bool {
        self != Key::Other
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputEvent {
    KeyDown(Key),
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
    PointerDown,
    Resize,
    VisibilityChange { hidden: bool },
    PreviousActivated,
    NextActivated,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Advance,
    Retreat,
    JumpTo(usize),
    RefreshLayout,
    RestartAnimation,
}

/// What an event turned into.
#[derive(Debug, Default, PartialEq)]
pub struct Dispatch {
    pub commands: Vec<Command>,
    /// The host should swallow the event's default behaviour.
    pub consumed: bool,
}

impl Dispatch {
    fn ignored() -> Self {
        Self::default()
    }

    fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            consumed: false,
        }
    }

    fn consumed(command: Command) -> Self {
        Self {
            commands: vec![command],
            consumed: true,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Swipe {
    Forward,
    Backward,
}

/// Turns raw device events into navigation commands.
pub struct InputAdapter {
    total_slides: usize,
    gesture_start: Option<(f32, f32)>,
    resize_refresh: Deferred,
    visibility_restore: Deferred,
}

impl InputAdapter {
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            gesture_start: None,
            resize_refresh: Deferred::default(),
            visibility_restore: Deferred::default(),
        }
    }

    pub fn handle(&mut self, event: &InputEvent) -> Dispatch {
        match *event {
            InputEvent::KeyDown(key) => self.key(key),
            InputEvent::TouchStart { x, y } => {
                self.gesture_start = Some((x, y));
                Dispatch::ignored()
            }
            InputEvent::TouchEnd { x, y } => {
                let Some(start) = self.gesture_start.take() else {
                    return Dispatch::ignored();
                };
                match classify_swipe(start, (x, y)) {
                    Some(Swipe::Forward) => Dispatch::command(Command::Advance),
                    Some(Swipe::Backward) => Dispatch::command(Command::Retreat),
                    None => Dispatch::ignored(),
                }
            }
            InputEvent::Resize => {
                self.resize_refresh.schedule(RESIZE_DEBOUNCE);
                Dispatch::ignored()
            }
            InputEvent::VisibilityChange { hidden } => {
                if !hidden {
                    self.visibility_restore.schedule(VISIBILITY_RESTORE_DELAY);
                }
                Dispatch::ignored()
            }
            InputEvent::PreviousActivated => Dispatch::command(Command::Retreat),
            InputEvent::NextActivated => Dispatch::command(Command::Advance),
            InputEvent::PointerDown => Dispatch::ignored(),
        }
    }

    fn key(&self, key: Key) -> Dispatch {
        match key {
            Key::ArrowRight | Key::Space | Key::PageDown => Dispatch::consumed(Command::Advance),
            Key::ArrowLeft | Key::PageUp => Dispatch::consumed(Command::Retreat),
            Key::Home => Dispatch::consumed(Command::JumpTo(1)),
            Key::End => Dispatch::consumed(Command::JumpTo(self.total_slides)),
            Key::Other => Dispatch::ignored(),
        }
    }

    /// Commands whose timers ran out during the last `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Vec<Command> {
        let mut due = Vec::new();
        if self.resize_refresh.update(dt) {
            due.push(Command::RefreshLayout);
        }
        if self.visibility_restore.update(dt) {
            due.push(Command::RestartAnimation);
        }
        due
    }
}

// A swipe travels further than the threshold, and further sideways than
// vertically. Moving right goes back, moving left goes forward.
fn classify_swipe(start: (f32, f32), end: (f32, f32)) -> Option<Swipe> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy.abs() {
        if dx > 0.0 {
            Some(Swipe::Backward)
        } else {
            Some(Swipe::Forward)
        }
    } else {
        None
    }
}
