// Interactive rebinding: the next physical press becomes the new binding

use super::action::{LogicalInput, MouseButton};
use super::config::BindingTable;
use super::edge::PreviousState;
use super::scancode::Scancode;
use super::snapshot::RawSnapshot;

/// Whether a controller is playing or waiting for a new binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebindState {
    #[default]
    Idle,
    AwaitingBinding(LogicalInput),
}

impl RebindState {
    pub fn target(self) -> Option<LogicalInput> {
        match self {
            Self::Idle => None,
            Self::AwaitingBinding(target) => Some(target),
        }
    }

    pub fn is_awaiting(self) -> bool {
        matches!(self, Self::AwaitingBinding(_))
    }
}

/// What a single rebind pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebindOutcome {
    /// Keys now bound to the target
    pub keys: Vec<Scancode>,

    /// Mouse buttons now bound to the target
    pub mouse: Vec<MouseButton>,

    /// Keys refused because they hold the last binding of their input
    pub rejected: Vec<Scancode>,
}

impl RebindOutcome {
    /// Whether any binding changed
    pub fn changed(&self) -> bool {
        !self.keys.is_empty() || !self.mouse.is_empty()
    }
}

/// Rebind every key that went down this frame to `target`
///
/// `persist` runs after each successful rebind with the updated table.
pub fn rebind_keys(
    table: &mut BindingTable,
    current: &RawSnapshot,
    previous: &PreviousState,
    target: LogicalInput,
    outcome: &mut RebindOutcome,
    persist: &mut dyn FnMut(&BindingTable),
) {
    let edges = previous.key_rising_edges(current);

    for (index, _) in edges.iter().enumerate().filter(|(_, rising)| **rising) {
        let Some(key) = u16::try_from(index).ok().and_then(Scancode::new) else {
            continue;
        };

        if table.can_rebind_key(key) {
            log::debug!("Rebound {:?} to {}", key, target.name());
            table.bind_key(key, target);
            outcome.keys.push(key);
            persist(table);
        } else {
            log::debug!(
                "Refused to rebind {:?}: last key for {:?}",
                key,
                table.lookup_key(key)
            );
            outcome.rejected.push(key);
        }
    }
}

/// Rebind every mouse button that went down this frame to `target`
///
/// Mouse buttons are never protected: the keyboard always keeps a path
/// to every input.
pub fn rebind_mouse(
    table: &mut BindingTable,
    current: &RawSnapshot,
    previous: &PreviousState,
    target: LogicalInput,
    outcome: &mut RebindOutcome,
    persist: &mut dyn FnMut(&BindingTable),
) {
    let edges = previous.mouse_rising_edges(current);

    for button in MouseButton::ALL {
        if edges[button.index()] {
            log::debug!("Rebound {} to {}", button.name(), target.name());
            table.bind_mouse(button, target);
            outcome.mouse.push(button);
            persist(table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(
        table: &mut BindingTable,
        previous: &mut PreviousState,
        snapshot: &RawSnapshot,
        target: LogicalInput,
    ) -> (RebindOutcome, usize) {
        let mut outcome = RebindOutcome::default();
        let mut saves = 0;
        let mut persist = |_: &BindingTable| saves += 1;
        rebind_keys(table, snapshot, previous, target, &mut outcome, &mut persist);
        rebind_mouse(table, snapshot, previous, target, &mut outcome, &mut persist);
        previous.commit(snapshot);
        (outcome, saves)
    }

    #[test]
    fn test_state_defaults_to_idle() {
        let state = RebindState::default();
        assert_eq!(state, RebindState::Idle);
        assert_eq!(state.target(), None);
        assert!(!state.is_awaiting());

        let state = RebindState::AwaitingBinding(LogicalInput::B);
        assert_eq!(state.target(), Some(LogicalInput::B));
    }

    #[test]
    fn test_rebind_unbound_key() {
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let snapshot = RawSnapshot::new().with_key(Scancode::Z);

        let (outcome, saves) = pass(&mut table, &mut previous, &snapshot, LogicalInput::B);
        assert!(outcome.changed());
        assert_eq!(outcome.keys, vec![Scancode::Z]);
        assert_eq!(saves, 1);
        assert_eq!(table.lookup_key(Scancode::Z), Some(LogicalInput::B));
    }

    #[test]
    fn test_simultaneous_press_with_conflict() {
        // X is the only key on L; Z is unbound
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let snapshot = RawSnapshot::new().with_key(Scancode::X).with_key(Scancode::Z);

        let (outcome, saves) = pass(&mut table, &mut previous, &snapshot, LogicalInput::B);
        assert_eq!(outcome.keys, vec![Scancode::Z]);
        assert_eq!(outcome.rejected, vec![Scancode::X]);
        assert_eq!(saves, 1);
        assert_eq!(table.lookup_key(Scancode::Z), Some(LogicalInput::B));
        assert_eq!(table.lookup_key(Scancode::X), Some(LogicalInput::L));
    }

    #[test]
    fn test_rebind_key_from_shared_input() {
        // V shares R with Right Shift, so it may move
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let snapshot = RawSnapshot::new().with_key(Scancode::V);

        let (outcome, _) = pass(&mut table, &mut previous, &snapshot, LogicalInput::Start);
        assert!(outcome.changed());
        assert_eq!(table.lookup_key(Scancode::V), Some(LogicalInput::Start));
        assert_eq!(table.keys_for(LogicalInput::R), vec![Scancode::RIGHT_SHIFT]);
    }

    #[test]
    fn test_rebind_onto_sibling_only_binding_rejected() {
        let mut table = BindingTable::new();
        table.bind_key(Scancode::A, LogicalInput::L);
        table.bind_key(Scancode::C, LogicalInput::Z);
        let mut previous = PreviousState::new();

        // Rebinding L onto C would orphan Z
        let snapshot = RawSnapshot::new().with_key(Scancode::C);
        let (outcome, saves) = pass(&mut table, &mut previous, &snapshot, LogicalInput::L);
        assert!(!outcome.changed());
        assert_eq!(saves, 0);
        assert_eq!(table.lookup_key(Scancode::C), Some(LogicalInput::Z));
    }

    #[test]
    fn test_multiple_keys_bind_in_one_pass() {
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let snapshot = RawSnapshot::new()
            .with_key(Scancode::Z)
            .with_key(Scancode::new(20).unwrap());

        let (outcome, saves) = pass(&mut table, &mut previous, &snapshot, LogicalInput::Hookshot);
        assert_eq!(outcome.keys.len(), 2);
        assert_eq!(saves, 2);
        assert_eq!(table.key_binding_count(LogicalInput::Hookshot), 2);
    }

    #[test]
    fn test_held_key_is_not_a_new_binding() {
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let held = RawSnapshot::new().with_key(Scancode::Z);
        previous.commit(&held);

        let (outcome, _) = pass(&mut table, &mut previous, &held, LogicalInput::B);
        assert!(!outcome.changed());
        assert_eq!(table.lookup_key(Scancode::Z), None);
    }

    #[test]
    fn test_mouse_rebind_ignores_conflicts() {
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();
        let snapshot = RawSnapshot::new().with_mouse(MouseButton::Middle);

        // Middle holds the only binding of Walk, and is taken anyway
        let (outcome, saves) = pass(&mut table, &mut previous, &snapshot, LogicalInput::A);
        assert_eq!(outcome.mouse, vec![MouseButton::Middle]);
        assert_eq!(saves, 1);
        assert_eq!(table.lookup_mouse(MouseButton::Middle), Some(LogicalInput::A));
        assert!(!table.has_binding(LogicalInput::Walk));
    }

    #[test]
    fn test_one_key_per_input_after_rebinds() {
        let mut table = BindingTable::with_defaults();
        let mut previous = PreviousState::new();

        for (key, target) in [
            (Scancode::Z, LogicalInput::B),
            (Scancode::Z, LogicalInput::A),
            (Scancode::SPACE, LogicalInput::Z),
        ] {
            pass(&mut table, &mut previous, &RawSnapshot::new().with_key(key), target);
            pass(&mut table, &mut previous, &RawSnapshot::new(), target);
        }

        assert_eq!(table.lookup_key(Scancode::SPACE), Some(LogicalInput::Z));
        assert_eq!(table.lookup_key(Scancode::Z), Some(LogicalInput::A));
        assert_eq!(table.lookup_key(Scancode::O), Some(LogicalInput::A));
        assert_eq!(table.lookup_key(Scancode::F), Some(LogicalInput::B));
        assert_eq!(table.key_binding_count(LogicalInput::A), 2);
        assert_eq!(table.key_binding_count(LogicalInput::Z), 3);
    }
}
