use anyhow::Result;
use log::{debug, info};
use rusted_input::engine::input::{
    Controller, ControllerId, ControllerSettings, Driver, FrameOutcome, HostConfig,
    KeyboardDriver, LogicalInput, Players, RawInputPoller, Scancode,
};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowBuilder},
};

/// Starts a rebind of the A button
const REBIND_KEY: Scancode = Scancode::F9;

/// Host backed by the real window
struct WindowHost<'a> {
    window: &'a Window,
    fullscreen: bool,
}

impl HostConfig for WindowHost<'_> {
    fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, value: bool) {
        self.fullscreen = value;
        self.window
            .set_fullscreen(value.then_some(Fullscreen::Borderless(None)));
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting input demo...");

    let bindings_dir = std::env::current_dir()?;
    let mut players = Players::new(4);
    let mut driver = KeyboardDriver::new(ControllerSettings::new(bindings_dir, 0));
    driver.scan(&mut players);
    let player_one = players.controller(0).unwrap_or(ControllerId(0));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Input")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .build(&event_loop)?;

    info!("Window created; press F9 then any key to rebind A, F10 for fullscreen");

    let mut poller = RawInputPoller::new();
    let mut fullscreen = false;
    let mut rebind_key_was_down = false;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent { event, .. } => {
                    poller.handle_window_event(&event);
                }
                Event::DeviceEvent { event, .. } => {
                    poller.handle_device_event(&event);
                }
                Event::AboutToWait => {
                    let snapshot = poller.snapshot();

                    let mut host = WindowHost {
                        window: &window,
                        fullscreen,
                    };
                    let outcomes = driver.step(&snapshot, &mut host);
                    fullscreen = host.fullscreen;

                    if outcomes
                        .iter()
                        .any(|o| matches!(o, FrameOutcome::Rebinding(r) if r.changed()))
                    {
                        info!("Binding saved");
                        driver.cancel_rebind();
                    }

                    // Armed after stepping so F9 itself is already held next frame
                    let rebind_key_down = snapshot.key(REBIND_KEY);
                    if rebind_key_down && !rebind_key_was_down {
                        info!("Press a key or mouse button for {}", LogicalInput::A.name());
                        driver.begin_rebind(LogicalInput::A);
                    }
                    rebind_key_was_down = rebind_key_down;

                    if let Some(controller) = driver.controller(player_one) {
                        let pressed = controller.state().just_pressed_inputs();
                        if !pressed.is_empty() {
                            debug!("Pressed: {:?}", pressed);
                        }
                    }
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
