// Input handling system
//
// Turns raw keyboard and mouse state into an emulated game pad, with live
// rebinding and persisted bindings.
//
// ## Architecture
//
// - `scancode`: Physical key domain and key names
// - `action`: Logical inputs, mouse buttons and default bindings
// - `config`: Binding table and the rebind conflict rule
// - `snapshot`: One frame of raw state
// - `edge`: Transition detection against the previous frame
// - `dispatcher`: Hotkeys, held/down/up dispatch, mouse motion
// - `rebind`: Rebind state machine and the rebind pass
// - `store`: JSON persistence of bindings
// - `player`: Logical controller state and the `InputSink` surface
// - `controller`: Keyboard controller tying the above together
// - `manager`: Drivers and player slots
// - `poller`: winit event collector producing snapshots
//
// ## Usage Example
//
// ```rust
// use engine::input::{Driver, KeyboardDriver, Players, RawInputPoller};
//
// let mut players = Players::new(4);
// let mut driver = KeyboardDriver::new(ControllerSettings::default());
// driver.scan(&mut players);
//
// // In your event loop, feed window and device events
// poller.handle_window_event(&event);
//
// // Once per frame
// let snapshot = poller.snapshot();
// driver.step(&snapshot, &mut host);
// ```

pub mod action;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod edge;
pub mod host;
pub mod manager;
pub mod player;
pub mod poller;
pub mod rebind;
pub mod scancode;
pub mod settings;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use action::{InputSource, LogicalInput, MouseButton};
pub use config::{BindingPatch, BindingTable};
pub use controller::{Controller, FrameOutcome, KeyboardController};
pub use host::{HostConfig, HostState};
pub use manager::{ControllerId, Driver, KeyboardDriver, PlayerRegistry, Players};
pub use player::{ControllerState, InputSink};
pub use poller::RawInputPoller;
pub use rebind::{RebindOutcome, RebindState};
pub use scancode::Scancode;
pub use settings::ControllerSettings;
pub use snapshot::RawSnapshot;
pub use store::{BindingStore, StoreError};
