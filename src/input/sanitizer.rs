//! Button-event sanitizer.
//!
//! Raw pointer sources are noisy: the same physical transition can arrive
//! more than once (down-down-up), and downstream logic wants a strictly
//! alternating press/release stream. The sanitizer is a single-slot state
//! machine that suppresses repeated states and runs the downstream action
//! only on a genuine transition.
//!
//! One instance per physical button channel. Mouse movement is never
//! sanitized - only the binary press/release channel goes through here.

/// Logical state of one button channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Up,
    Down,
}

/// Single-slot filter turning a noisy state stream into an alternating one.
///
/// The initial state is [`ButtonState::Up`], so the accepted stream starts
/// with a `Down` and strictly alternates from there.
///
/// # Example
///
/// ```
/// use spark_stage::input::{ButtonState, Sanitizer};
///
/// let mut button = Sanitizer::new();
/// assert!(button.apply(ButtonState::Down, || {}));
/// assert!(!button.apply(ButtonState::Down, || unreachable!()));
/// assert!(button.apply(ButtonState::Up, || {}));
/// ```
#[derive(Debug)]
pub struct Sanitizer {
    state: ButtonState,
}

impl Sanitizer {
    /// Create a sanitizer in the `Up` state.
    pub fn new() -> Self {
        Self {
            state: ButtonState::Up,
        }
    }

    /// Current state of the channel.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Feed one raw state. If it differs from the current state, the state
    /// is updated and `action` runs exactly once, synchronously, before
    /// `apply` returns. Repeated states are suppressed.
    ///
    /// Returns whether the action fired.
    pub fn apply(&mut self, next: ButtonState, action: impl FnOnce()) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        action();
        true
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ButtonState::{Down, Up};

    /// Feed a raw sequence, collect the states that actually fired.
    fn accepted(raw: &[ButtonState]) -> Vec<ButtonState> {
        let mut sanitizer = Sanitizer::new();
        let mut fired = Vec::new();
        for &state in raw {
            sanitizer.apply(state, || fired.push(state));
        }
        fired
    }

    #[test]
    fn test_duplicates_are_suppressed() {
        assert_eq!(accepted(&[Down, Down, Up, Up, Down]), vec![Down, Up, Down]);
    }

    #[test]
    fn test_initial_up_is_suppressed() {
        assert_eq!(accepted(&[Up, Up, Up]), Vec::<ButtonState>::new());
        assert_eq!(accepted(&[Up, Down]), vec![Down]);
    }

    #[test]
    fn test_accepted_stream_alternates() {
        let raw = [Down, Down, Down, Up, Down, Up, Up, Up, Down, Down, Up];
        let fired = accepted(&raw);
        assert!(!fired.is_empty());
        for pair in fired.windows(2) {
            assert_ne!(pair[0], pair[1], "consecutive equal states in {fired:?}");
        }
    }

    #[test]
    fn test_action_runs_before_apply_returns() {
        let mut sanitizer = Sanitizer::new();
        let mut ran = false;
        sanitizer.apply(Down, || ran = true);
        assert!(ran);
        assert_eq!(sanitizer.state(), Down);
    }
}
