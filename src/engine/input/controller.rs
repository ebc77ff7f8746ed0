// Keyboard + mouse controller
//
// Owns one instance of every per-device component: binding table, store,
// previous raw state, logical state and rebind state. Nothing is shared
// between controllers.

use super::action::LogicalInput;
use super::config::BindingTable;
use super::dispatcher;
use super::edge::PreviousState;
use super::host::HostConfig;
use super::player::ControllerState;
use super::rebind::{self, RebindOutcome, RebindState};
use super::settings::ControllerSettings;
use super::snapshot::RawSnapshot;
use super::store::BindingStore;

/// A device that turns raw input into logical controller state
pub trait Controller {
    /// Logical state produced by the last frame
    fn state(&self) -> &ControllerState;

    /// Run one normal frame
    fn update(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig);

    /// Run one rebind frame, returning whether any binding changed
    fn update_rebind(&mut self, snapshot: &RawSnapshot, target: LogicalInput) -> bool;

    /// Restore the default bindings
    fn reset_bindings(&mut self);

    fn has_mouse(&self) -> bool;
}

/// Result of [`KeyboardController::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Bindings were dispatched as game input
    Dispatched,

    /// The frame was spent waiting for a new binding
    Rebinding(RebindOutcome),
}

/// Keyboard and mouse emulating a game pad
#[derive(Debug)]
pub struct KeyboardController {
    settings: ControllerSettings,
    bindings: BindingTable,
    store: BindingStore,
    previous: PreviousState,
    state: ControllerState,
    rebind: RebindState,
}

impl KeyboardController {
    fn new(settings: ControllerSettings) -> Self {
        let store = BindingStore::from_settings(&settings);
        let mut state = ControllerState::new();
        state.has_mouse = settings.mouse_enabled;

        Self {
            settings,
            bindings: BindingTable::new(),
            store,
            previous: PreviousState::new(),
            state,
            rebind: RebindState::Idle,
        }
    }

    /// Build a controller with default bindings overlaid by saved ones
    pub fn create(settings: ControllerSettings) -> Self {
        let mut controller = Self::new(settings);
        controller.bindings.reset_to_defaults();
        controller.load_bindings();
        controller
    }

    /// Overlay bindings from the store onto the current table
    pub fn load_bindings(&mut self) {
        let patch = self.store.load();
        if !patch.is_empty() {
            log::info!("Loaded {} saved bindings", patch.len());
        }
        self.bindings.apply(&patch);
        log::debug!("{} key bindings active", self.bindings.key_count());
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn store(&self) -> &BindingStore {
        &self.store
    }

    pub fn rebind_state(&self) -> RebindState {
        self.rebind
    }

    /// Start waiting for a new binding for `target`
    pub fn begin_rebind(&mut self, target: LogicalInput) {
        log::debug!("Waiting for a binding for {}", target.name());
        self.rebind = RebindState::AwaitingBinding(target);
    }

    /// Return to normal play
    pub fn cancel_rebind(&mut self) {
        self.rebind = RebindState::Idle;
    }

    /// Run one frame in whichever mode the controller is in
    pub fn step(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig) -> FrameOutcome {
        match self.rebind {
            RebindState::Idle => {
                self.update(snapshot, host);
                FrameOutcome::Dispatched
            }
            RebindState::AwaitingBinding(target) => {
                FrameOutcome::Rebinding(self.rebind_pass(snapshot, target))
            }
        }
    }

    /// Rebind every control pressed this frame to `target`
    ///
    /// The logical state is cleared, so nothing reads as pressed or deflected
    /// while a binding is awaited.
    pub fn rebind_pass(&mut self, snapshot: &RawSnapshot, target: LogicalInput) -> RebindOutcome {
        self.state.begin_frame();

        let mut outcome = RebindOutcome::default();
        let store = &self.store;
        let mut persist = |table: &BindingTable| store.save_quietly(table);

        rebind::rebind_keys(
            &mut self.bindings,
            snapshot,
            &self.previous,
            target,
            &mut outcome,
            &mut persist,
        );

        if self.settings.mouse_enabled {
            rebind::rebind_mouse(
                &mut self.bindings,
                snapshot,
                &self.previous,
                target,
                &mut outcome,
                &mut persist,
            );
        }

        self.previous.commit(snapshot);
        outcome
    }
}

impl Controller for KeyboardController {
    fn state(&self) -> &ControllerState {
        &self.state
    }

    fn update(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig) {
        self.state.begin_frame();
        dispatcher::apply_hotkeys(snapshot, &self.previous, host);

        if !host.is_playback_active() {
            dispatcher::dispatch_keys(&self.bindings, snapshot, &self.previous, &mut self.state);

            if self.settings.mouse_enabled {
                dispatcher::dispatch_mouse(&self.bindings, snapshot, &self.previous, &mut self.state);
                dispatcher::apply_mouse_motion(
                    &mut self.state,
                    snapshot.mouse_delta,
                    self.settings.mouse_sensitivity,
                    host.is_first_person(),
                );
            }

            if self.state.walk {
                self.state.scale_sticks(self.settings.walk_scale);
            }
        }

        self.previous.commit(snapshot);
    }

    fn update_rebind(&mut self, snapshot: &RawSnapshot, target: LogicalInput) -> bool {
        self.rebind_pass(snapshot, target).changed()
    }

    fn reset_bindings(&mut self) {
        self.bindings.reset_to_defaults();
    }

    fn has_mouse(&self) -> bool {
        self.state.has_mouse
    }
}
