// Slides are numbered from 1; `current` never leaves `1..=total`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PresentationState {
    current: usize,
    total: usize,
}

impl PresentationState {
    pub fn new(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn contains(&self, slide: usize) -> bool {
        (1..=self.total).contains(&slide)
    }

    // Refuses out-of-range slides; returns whether the position changed
    pub fn set(&mut self, slide: usize) -> bool {
        if !self.contains(slide) || slide == self.current {
            return false;
        }
        self.current = slide;
        true
    }

    pub fn progress(&self) -> f64 {
        100.0 * self.current as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_has_no_state() {
        assert_eq!(PresentationState::new(0), None);
    }

    #[test]
    fn starts_on_first_slide() {
        let state = PresentationState::new(6).unwrap();
        assert_eq!(state.current(), 1);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut state = PresentationState::new(6).unwrap();
        assert!(!state.set(0));
        assert!(!state.set(7));
        assert_eq!(state.current(), 1);
        assert!(state.set(6));
        assert!(state.is_last());
    }

    #[test]
    fn set_to_current_is_not_a_change() {
        let mut state = PresentationState::new(3).unwrap();
        assert!(!state.set(1));
    }

    #[test]
    fn single_slide_is_first_and_last() {
        let state = PresentationState::new(1).unwrap();
        assert!(state.is_first());
        assert!(state.is_last());
        assert_eq!(state.progress(), 100.0);
    }
}
