use crate::accessibility::AccessibilityLayer;
use crate::config::Config;
use crate::error::PresentationError;
use crate::input::{Command, InputAdapter, InputEvent};
use crate::navigation::NavigationController;
use crate::stage::Stage;

/// The wired-up presentation: input feeds commands into the accessible
/// navigator, which owns the state and the stage.
pub struct Presentation<S: Stage> {
    accessible: AccessibilityLayer<S>,
    input: InputAdapter,
}

impl<S: Stage> Presentation<S> {
    pub fn new(stage: S, config: &Config) -> Result<Self, PresentationError> {
        let controller = NavigationController::new(stage, config.labels())?;
        let input = InputAdapter::new(controller.total_slides());
        let accessible = AccessibilityLayer::new(controller, config);
        tracing::info!(slides = accessible.navigator().total_slides(), "presentation ready");
        Ok(Self { accessible, input })
    }

    pub fn current_slide(&self) -> usize {
        self.accessible.navigator().current_slide()
    }

    pub fn total_slides(&self) -> usize {
        self.accessible.navigator().total_slides()
    }

    pub fn stage(&self) -> &S {
        self.accessible.navigator().stage()
    }

    pub fn stage_mut(&mut self) -> &mut S {
        self.accessible.navigator_mut().stage_mut()
    }

    /// Routes one event. Returns whether the host should swallow its default
    /// behaviour.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::KeyDown(key) => self.accessible.note_key(key),
            InputEvent::PointerDown => self.accessible.note_pointer(),
            _ => {}
        }
        let dispatch = self.input.handle(&event);
        for command in dispatch.commands {
            self.apply(command);
        }
        dispatch.consumed
    }

    /// Advances every cosmetic timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for command in self.input.update(dt) {
            self.apply(command);
        }
        self.accessible.navigator_mut().update(dt);
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Advance => {
                self.accessible.advance();
            }
            Command::Retreat => {
                self.accessible.retreat();
            }
            Command::JumpTo(slide) => {
                self.accessible.jump_to(slide);
            }
            Command::RefreshLayout => self.accessible.navigator_mut().refresh_layout(),
            Command::RestartAnimation => self.accessible.navigator_mut().restart_current_animation(),
        }
    }
}
