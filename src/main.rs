use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use inpoll::bindings::route_window_event;
use inpoll::{InputSession, SessionOptions};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Interactive probe: opens a window, polls the session once per frame and
/// logs every edge it sees. Press Escape to quit.
#[derive(Parser, Debug)]
#[command(name = "inpoll", about = "Polled input state demo")]
struct Args {
    /// Ignore keyboard events.
    #[arg(long)]
    no_keyboard: bool,

    /// Ignore pointer button and move events.
    #[arg(long)]
    no_mouse: bool,

    /// Ignore wheel events.
    #[arg(long)]
    no_wheel: bool,

    /// Show debug logs.
    #[arg(short, long)]
    verbose: bool,

    /// Directory for rotating log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

struct App {
    session: InputSession,
    window: Option<Window>,
}

impl App {
    /// Report the edges accumulated since the last frame boundary.
    fn report_frame(&self) {
        let session = &self.session;

        for code in session.keyboard().codes() {
            if session.key_pressed(code) {
                tracing::info!(code, "key pressed");
            } else if session.key_released(code) {
                tracing::info!(code, "key released");
            }
        }

        for button in session.pointer().buttons() {
            let position = session.pointer_position();
            if session.button_pressed(button) {
                tracing::info!(index = button.index(), x = position.x, y = position.y, "button pressed");
            } else if session.button_released(button) {
                tracing::info!(index = button.index(), x = position.x, y = position.y, "button released");
            }
        }

        if session.wheel_up() {
            tracing::info!("wheel up");
        } else if session.wheel_down() {
            tracing::info!("wheel down");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title("inpoll")
                .with_inner_size(PhysicalSize::new(800, 600))
                .with_resizable(false);

            match event_loop.create_window(attrs) {
                Ok(window) => {
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    tracing::error!("failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                // queries first, then the frame boundary: edges reflect
                // events applied since the previous update call
                self.report_frame();
                if self.session.key_pressed("Escape") {
                    event_loop.exit();
                    return;
                }
                self.session.update();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
        route_window_event(&mut self.session, &event);
    }
}

/// Initialize the logging system with tracing.
///
/// If `log_dir` is provided, logs will also be written to a file in that
/// directory. The `verbose` flag controls whether debug logs are shown;
/// `RUST_LOG` overrides both.
fn init_logging(log_dir: Option<&std::path::Path>, verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "inpoll=debug,warn"
    } else {
        "inpoll=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "inpoll.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // keep the writer guard alive for the process lifetime
        std::mem::forget(guard);

        registry
            .with(fmt::layer().with_target(true))
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let options = SessionOptions {
        track_mouse: !args.no_mouse,
        track_wheel: !args.no_wheel,
        track_keyboard: !args.no_keyboard,
        ..SessionOptions::default()
    };

    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;
    let mut app = App {
        session: InputSession::new(options),
        window: None,
    };

    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop error: {e}"))?;

    Ok(())
}
