// Input drivers and the player slot registry

use super::action::LogicalInput;
use super::controller::{Controller, FrameOutcome, KeyboardController};
use super::host::HostConfig;
use super::settings::ControllerSettings;
use super::snapshot::RawSnapshot;

/// Handle to a controller owned by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub usize);

/// Where controllers get attached to players
pub trait PlayerRegistry {
    fn attach(&mut self, controller: ControllerId, slot: usize);
}

/// Fixed set of player slots
#[derive(Debug, Clone)]
pub struct Players {
    slots: Vec<Option<ControllerId>>,
}

impl Players {
    pub fn new(max_players: usize) -> Self {
        Self {
            slots: vec![None; max_players],
        }
    }

    /// Controller attached to a slot
    pub fn controller(&self, slot: usize) -> Option<ControllerId> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn num_players(&self) -> usize {
        self.slots.len()
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new(4) // Default to 4 players
    }
}

impl PlayerRegistry for Players {
    fn attach(&mut self, controller: ControllerId, slot: usize) {
        match self.slots.get_mut(slot) {
            Some(entry) => *entry = Some(controller),
            None => log::warn!("No player slot {} for {:?}", slot, controller),
        }
    }
}

/// A family of devices that produces controllers
pub trait Driver {
    /// Look for devices and attach new controllers
    fn scan(&mut self, players: &mut dyn PlayerRegistry);

    /// Run one frame on every controller, honouring rebind mode
    fn update(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig);

    /// Restore default bindings on every controller
    fn reset_bindings(&mut self);

    /// Number of controllers
    fn size(&self) -> usize;
}

/// Driver for the system keyboard and mouse
///
/// There is only ever one keyboard; it is created on the first scan and
/// attached to player slot 0.
#[derive(Debug)]
pub struct KeyboardDriver {
    settings: ControllerSettings,
    controllers: Vec<KeyboardController>,
}

impl KeyboardDriver {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            controllers: Vec::new(),
        }
    }

    pub fn controller(&self, id: ControllerId) -> Option<&KeyboardController> {
        self.controllers.get(id.0)
    }

    pub fn controller_mut(&mut self, id: ControllerId) -> Option<&mut KeyboardController> {
        self.controllers.get_mut(id.0)
    }

    /// Put every controller into rebind mode for `target`
    pub fn begin_rebind(&mut self, target: LogicalInput) {
        for controller in &mut self.controllers {
            controller.begin_rebind(target);
        }
    }

    pub fn cancel_rebind(&mut self) {
        for controller in &mut self.controllers {
            controller.cancel_rebind();
        }
    }

    /// Step every controller, returning one outcome per controller
    pub fn step(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig) -> Vec<FrameOutcome> {
        self.controllers
            .iter_mut()
            .map(|controller| controller.step(snapshot, host))
            .collect()
    }
}

impl Driver for KeyboardDriver {
    fn scan(&mut self, players: &mut dyn PlayerRegistry) {
        if self.controllers.is_empty() {
            let controller = KeyboardController::create(self.settings.clone());
            self.controllers.push(controller);
            log::info!("Keyboard attached to player 1");
            players.attach(ControllerId(0), 0);
        }
    }

    fn update(&mut self, snapshot: &RawSnapshot, host: &mut dyn HostConfig) {
        self.step(snapshot, host);
    }

    fn reset_bindings(&mut self) {
        for controller in &mut self.controllers {
            controller.reset_bindings();
        }
    }

    fn size(&self) -> usize {
        self.controllers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::host::HostState;
    use crate::engine::input::scancode::Scancode;

    fn driver() -> KeyboardDriver {
        KeyboardDriver::new(ControllerSettings::in_memory())
    }

    #[test]
    fn test_players_creation() {
        let players = Players::new(4);
        assert_eq!(players.num_players(), 4);
        assert_eq!(players.controller(0), None);
        assert_eq!(players.controller(7), None);
    }

    #[test]
    fn test_attach_out_of_range_is_ignored() {
        let mut players = Players::new(2);
        players.attach(ControllerId(0), 5);
        assert_eq!(players.controller(0), None);
    }

    #[test]
    fn test_scan_attaches_once() {
        let mut players = Players::default();
        let mut driver = driver();

        driver.scan(&mut players);
        driver.scan(&mut players);

        assert_eq!(driver.size(), 1);
        assert_eq!(players.controller(0), Some(ControllerId(0)));
        assert_eq!(players.controller(1), None);
    }

    #[test]
    fn test_update_reaches_controllers() {
        let mut players = Players::default();
        let mut driver = driver();
        let mut host = HostState::default();
        driver.scan(&mut players);

        driver.update(&RawSnapshot::new().with_key(Scancode::SPACE), &mut host);

        let id = players.controller(0).unwrap();
        let controller = driver.controller(id).unwrap();
        assert!(controller.state().just_pressed(LogicalInput::A));
    }

    #[test]
    fn test_rebind_through_driver() {
        let mut players = Players::default();
        let mut driver = driver();
        let mut host = HostState::default();
        driver.scan(&mut players);

        driver.begin_rebind(LogicalInput::Ocarina);
        let outcomes = driver.step(&RawSnapshot::new().with_key(Scancode::Z), &mut host);
        assert!(matches!(&outcomes[0], FrameOutcome::Rebinding(o) if o.changed()));

        driver.cancel_rebind();
        let controller = driver.controller(ControllerId(0)).unwrap();
        assert!(!controller.rebind_state().is_awaiting());
        assert_eq!(
            controller.bindings().lookup_key(Scancode::Z),
            Some(LogicalInput::Ocarina)
        );
    }

    #[test]
    fn test_update_respects_rebind_mode() {
        let mut players = Players::default();
        let mut driver = driver();
        let mut host = HostState::default();
        driver.scan(&mut players);

        driver.begin_rebind(LogicalInput::Start);
        driver.update(&RawSnapshot::new().with_key(Scancode::Z), &mut host);

        let controller = driver.controller(ControllerId(0)).unwrap();
        assert_eq!(controller.state().buttons(), 0);
        assert_eq!(controller.bindings().lookup_key(Scancode::Z), Some(LogicalInput::Start));
    }

    #[test]
    fn test_reset_bindings() {
        let mut players = Players::default();
        let mut driver = driver();
        driver.scan(&mut players);

        if let Some(controller) = driver.controller_mut(ControllerId(0)) {
            controller.update_rebind(&RawSnapshot::new().with_key(Scancode::Z), LogicalInput::A);
        }
        driver.reset_bindings();

        let controller = driver.controller(ControllerId(0)).unwrap();
        assert_eq!(controller.bindings().lookup_key(Scancode::Z), None);
    }

    #[test]
    fn test_empty_driver_update_is_noop() {
        let mut driver = driver();
        let mut host = HostState::default();
        driver.update(&RawSnapshot::new(), &mut host);
        assert_eq!(driver.size(), 0);
    }
}
