/// Which panel of an accordion is expanded, if any. At most one panel is
/// ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open_index: Option<usize>,
}

impl AccordionState {
    pub fn new(open_index: Option<usize>) -> Self {
        Self { open_index }
    }

    /// All panels collapsed.
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    /// Clicking the open panel collapses it, clicking any other panel opens
    /// that one and implicitly closes the previous.
    pub fn toggle(&mut self, index: usize) {
        self.open_index = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open_count(state: &AccordionState, len: usize) -> usize {
        (0..len).filter(|&i| state.is_open(i)).count()
    }

    #[test]
    fn test_toggle_opens_from_collapsed() {
        let mut state = AccordionState::collapsed();
        state.toggle(2);
        assert_eq!(state.open_index(), Some(2));
    }

    #[test]
    fn test_toggle_open_panel_collapses() {
        let mut state = AccordionState::new(Some(2));
        state.toggle(2);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_toggle_other_panel_moves_selection() {
        let mut state = AccordionState::new(Some(0));
        state.toggle(3);
        assert_eq!(state.open_index(), Some(3));
        assert!(!state.is_open(0));
    }

    #[test]
    fn test_double_toggle_restores_previous() {
        // holds when nothing or `i` itself was open to begin with
        for i in 0..4 {
            for start in [None, Some(i)] {
                let mut state = AccordionState::new(start);
                state.toggle(i);
                state.toggle(i);
                assert_eq!(state.open_index(), start, "start {start:?}, toggled {i}");
            }
        }
    }

    #[test]
    fn test_double_toggle_from_other_panel_collapses() {
        let mut state = AccordionState::new(Some(0));
        state.toggle(1);
        assert_eq!(state.open_index(), Some(1));
        state.toggle(1);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn test_at_most_one_open_over_toggle_sequence() {
        let len = 4;
        let mut state = AccordionState::new(Some(0));
        let sequence = [0, 0, 1, 2, 2, 3, 1, 1, 0, 3, 3, 2, 0, 1, 3];
        for i in sequence {
            state.toggle(i);
            assert!(open_count(&state, len) <= 1);
        }
        // last toggle was 3 on a state with 1 open
        assert_eq!(state.open_index(), Some(3));
    }
}
