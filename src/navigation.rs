use crate::config::ControlLabels;
use crate::constants::*;
use crate::error::PresentationError;
use crate::stage::{Control, SlideSurface, Stage};
use crate::state::PresentationState;
use crate::timer::Deferred;

/// Owns the deck position and keeps the stage in step with it.
pub struct NavigationController<S: Stage> {
    stage: S,
    state: PresentationState,
    labels: ControlLabels,
    animation_trigger: Deferred,
}

impl<S: Stage> NavigationController<S> {
    pub fn new(stage: S, labels: ControlLabels) -> Result<Self, PresentationError> {
        let state = PresentationState::new(stage.slide_count()).ok_or(PresentationError::EmptyDeck)?;
        let mut controller = Self {
            stage,
            state,
            labels,
            animation_trigger: Deferred::default(),
        };
        controller.render();
        controller.animation_trigger.schedule(INITIAL_ANIMATION_DELAY);
        Ok(controller)
    }

    pub fn current_slide(&self) -> usize {
        self.state.current()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total()
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Moves one slide forward. Does nothing on the last slide.
    pub fn advance(&mut self) -> bool {
        if self.state.is_last() {
            return false;
        }
        self.go(self.state.current() + 1)
    }

    /// Moves one slide back. Does nothing on the first slide.
    pub fn retreat(&mut self) -> bool {
        if self.state.is_first() {
            return false;
        }
        self.go(self.state.current() - 1)
    }

    /// Moves to `slide` (1-based). Out-of-range numbers are ignored, not clamped.
    pub fn jump_to(&mut self, slide: usize) -> bool {
        if !self.state.contains(slide) {
            tracing::debug!(slide, total = self.state.total(), "ignoring jump outside the deck");
            return false;
        }
        self.go(slide)
    }

    // `slide` is already known to be in range; jumping to the current slide
    // still re-renders but reports no change.
    fn go(&mut self, slide: usize) -> bool {
        let from = self.state.current();
        let changed = self.state.set(slide);
        if changed {
            tracing::debug!(from, to = slide, "slide changed");
        }
        self.render();
        self.animation_trigger.schedule(ANIMATION_TRIGGER_DELAY);
        changed
    }

    /// Re-applies slide visibility only; the position is untouched.
    pub fn refresh_layout(&mut self) {
        let current = self.state.current();
        for (index, slide) in self.stage.slides_mut().iter_mut().enumerate() {
            if index + 1 == current {
                slide.set_active(true);
                slide.set_displayed(true);
                slide.restart_animation();
            } else {
                slide.set_active(false);
                slide.set_displayed(false);
            }
        }
    }

    pub fn restart_current_animation(&mut self) {
        let index = self.state.current() - 1;
        if let Some(slide) = self.stage.slides_mut().get_mut(index) {
            slide.restart_animation();
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.animation_trigger.update(dt) {
            self.restart_current_animation();
        }
    }

    // Screen readers follow keyboard focus, so it moves with the slide
    fn focus_current(&mut self) {
        let current = self.state.current();
        for (index, slide) in self.stage.slides_mut().iter_mut().enumerate() {
            slide.set_focused(index + 1 == current);
        }
    }

    fn render(&mut self) {
        self.refresh_layout();

        self.focus_current();

        self.stage.set_progress(self.state.progress());
        self.stage.set_slide_number(self.state.current());

        let first = self.state.is_first();
        self.stage.previous_control().set_disabled(first);

        let label = if self.state.is_last() {
            &self.labels.finish
        } else {
            &self.labels.next
        };
        let next = self.stage.next_control();
        next.set_label(label);
        next.set_disabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeStage;
    use proptest::prelude::*;

    fn controller(total: usize) -> NavigationController<FakeStage> {
        NavigationController::new(FakeStage::with_slides(total), ControlLabels::default()).unwrap()
    }

    fn assert_only_current_shown(nav: &NavigationController<FakeStage>) {
        let current = nav.current_slide();
        assert_eq!(nav.stage().active_slides(), vec![current]);
        assert_eq!(nav.stage().displayed_slides(), vec![current]);
    }

    #[test]
    fn empty_stage_is_rejected() {
        let result = NavigationController::new(FakeStage::default(), ControlLabels::default());
        assert!(matches!(result, Err(PresentationError::EmptyDeck)));
    }

    #[test]
    fn initial_render_shows_first_slide() {
        let nav = controller(6);
        let stage = nav.stage();
        assert_eq!(nav.current_slide(), 1);
        assert_only_current_shown(&nav);
        assert_eq!(stage.slide_number, 1);
        assert_eq!(stage.progress, 100.0 * 1.0 / 6.0);
        assert!(stage.previous.disabled);
        assert!(!stage.next.disabled);
        assert_eq!(stage.next.label, ControlLabels::default().next);
    }

    #[test]
    fn walkthrough_of_six_slides() {
        let mut nav = controller(6);
        let labels = ControlLabels::default();

        for _ in 0..5 {
            assert!(nav.advance());
        }
        assert_eq!(nav.current_slide(), 6);
        assert_eq!(nav.stage().next.label, labels.finish);
        assert!(!nav.stage().next.disabled);

        for _ in 0..10 {
            nav.retreat();
        }
        assert_eq!(nav.current_slide(), 1);
        assert!(nav.stage().previous.disabled);
        assert_eq!(nav.stage().next.label, labels.next);

        assert!(nav.jump_to(3));
        assert_eq!(nav.current_slide(), 3);
        assert_eq!(nav.stage().progress, 50.0);
        assert!(!nav.stage().previous.disabled);
        assert_only_current_shown(&nav);
    }

    #[test]
    fn advance_on_last_slide_is_a_no_op() {
        let mut nav = controller(2);
        assert!(nav.advance());
        let before = nav.stage().clone();
        assert!(!nav.advance());
        assert_eq!(nav.current_slide(), 2);
        assert_eq!(nav.stage().slides[1].animation_restarts, before.slides[1].animation_restarts);
    }

    #[test]
    fn jump_outside_the_deck_is_ignored() {
        let mut nav = controller(6);
        nav.jump_to(4);
        assert!(!nav.jump_to(0));
        assert!(!nav.jump_to(7));
        assert_eq!(nav.current_slide(), 4);
    }

    #[test]
    fn jump_to_current_slide_rerenders_without_change() {
        let mut nav = controller(3);
        nav.stage_mut().slides[2].displayed = true;
        assert!(!nav.jump_to(1));
        assert_only_current_shown(&nav);
    }

    #[test]
    fn focus_follows_current_slide() {
        let mut nav = controller(5);
        assert_eq!(nav.stage().focused_slides(), vec![1]);

        nav.advance();
        assert_eq!(nav.stage().focused_slides(), vec![2]);
        nav.jump_to(5);
        assert_eq!(nav.stage().focused_slides(), vec![5]);
        nav.retreat();
        assert_eq!(nav.stage().focused_slides(), vec![4]);

        nav.refresh_layout();
        assert_eq!(nav.stage().focused_slides(), vec![4]);
    }

    #[test]
    fn no_op_navigation_keeps_focus() {
        let mut nav = controller(3);
        nav.retreat();
        nav.jump_to(0);
        nav.jump_to(4);
        assert_eq!(nav.stage().focused_slides(), vec![1]);

        nav.jump_to(3);
        nav.advance();
        nav.jump_to(3);
        assert_eq!(nav.stage().focused_slides(), vec![3]);
    }

    #[test]
    fn single_slide_deck_shows_finish_label() {
        let nav = controller(1);
        assert!(nav.stage().previous.disabled);
        assert_eq!(nav.stage().next.label, ControlLabels::default().finish);
        assert_eq!(nav.stage().progress, 100.0);
    }

    #[test]
    fn navigation_replays_entrance_after_delay() {
        let mut nav = controller(3);
        nav.advance();
        let shown = nav.stage().slides[1].animation_restarts;
        nav.update(ANIMATION_TRIGGER_DELAY / 2.0);
        assert_eq!(nav.stage().slides[1].animation_restarts, shown);
        nav.update(ANIMATION_TRIGGER_DELAY);
        assert_eq!(nav.stage().slides[1].animation_restarts, shown + 1);
    }

    #[test]
    fn pending_entrance_targets_slide_current_at_fire_time() {
        let mut nav = controller(3);
        nav.advance();
        nav.advance();
        let second = nav.stage().slides[1].animation_restarts;
        let third = nav.stage().slides[2].animation_restarts;
        nav.update(1.0);
        assert_eq!(nav.stage().slides[1].animation_restarts, second);
        assert_eq!(nav.stage().slides[2].animation_restarts, third + 1);
    }

    #[test]
    fn refresh_layout_keeps_position() {
        let mut nav = controller(4);
        nav.jump_to(3);
        nav.stage_mut().slides[0].displayed = true;
        nav.refresh_layout();
        assert_eq!(nav.current_slide(), 3);
        assert_only_current_shown(&nav);
    }

    fn deck_and_slide() -> impl Strategy<Value = (usize, usize)> {
        (1usize..20).prop_flat_map(|total| (Just(total), 1..=total))
    }

    proptest! {
        #[test]
        fn out_of_range_jump_never_moves((total, start) in deck_and_slide(), beyond in 1usize..40) {
            let mut nav = controller(total);
            nav.jump_to(start);
            prop_assert!(!nav.jump_to(0));
            prop_assert!(!nav.jump_to(total + beyond));
            prop_assert_eq!(nav.current_slide(), start);
        }

        #[test]
        fn advance_saturates_at_last(total in 1usize..20, extra in 0usize..10) {
            let mut nav = controller(total);
            for _ in 0..total + extra {
                nav.advance();
            }
            prop_assert_eq!(nav.current_slide(), total);
            prop_assert_eq!(nav.stage().progress, 100.0);
        }

        #[test]
        fn retreat_saturates_at_first((total, start) in deck_and_slide(), presses in 0usize..40) {
            let mut nav = controller(total);
            nav.jump_to(start);
            for _ in 0..start + presses {
                nav.retreat();
            }
            prop_assert_eq!(nav.current_slide(), 1);
            prop_assert!(nav.stage().previous.disabled);
        }

        #[test]
        fn render_matches_position((total, target) in deck_and_slide()) {
            let mut nav = controller(total);
            nav.jump_to(target);
            prop_assert_eq!(nav.stage().active_slides(), vec![target]);
            prop_assert_eq!(nav.stage().displayed_slides(), vec![target]);
            prop_assert_eq!(nav.stage().progress, 100.0 * target as f64 / total as f64);
            prop_assert_eq!(nav.stage().previous.disabled, target == 1);
            prop_assert!(!nav.stage().next.disabled);
        }
    }
}
