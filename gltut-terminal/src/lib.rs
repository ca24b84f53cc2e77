/// Terminal frontend: runs the tutorial scenes as a colored ASCII rasterizer
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use gltut_core::{PerspectiveParams, PointerButton, PointerEvent, SurfaceSize};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod renderer;

pub use cli::{Cli, DemoKind};
pub use config::DemoConfig;
pub use demo::Demo;
pub use error::{AppError, Result};
pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    config: DemoConfig,
    demo: Demo,
    renderer: AsciiRenderer,
    surface: SurfaceSize,
    perspective: PerspectiveParams,
    running: bool,
    last_update: Instant,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(kind: DemoKind, config: DemoConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(kind, config, width, height))
    }

    /// Build the app for a terminal of `width` x `height` cells
    pub fn with_size(kind: DemoKind, config: DemoConfig, width: u16, height: u16) -> Self {
        let now = Instant::now();

        Self {
            demo: Demo::new(kind, &config),
            perspective: config.perspective(cell_aspect(width, height)),
            config,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            surface: surface_size(width, height),
            running: true,
            last_update: now,
            last_fps_sample: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        log::info!("starting {} demo", self.demo.kind().name());

        let result = self.main_loop();

        // Cleanup
        execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.config.fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            // Drain every pending event before drawing
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            let dt_ms = frame_start.duration_since(self.last_update).as_secs_f32() * 1000.0;
            self.last_update = frame_start;
            self.demo.update(dt_ms);

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_event(&mouse) {
                    self.demo.handle_pointer(&pointer, self.surface);
                }
            }
            Event::FocusLost => self.demo.handle_pointer(&PointerEvent::Leave, self.surface),
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.renderer.resize(width as usize, height as usize);
                self.surface = surface_size(width, height);
                self.perspective = self.perspective.with_aspect(cell_aspect(width, height));
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('r') => self.switch_demo(self.demo.kind()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_demo(DemoKind::ALL[index]);
            }
            _ => {}
        }
    }

    fn switch_demo(&mut self, kind: DemoKind) {
        log::info!("switching to {} demo", kind.name());
        self.demo = Demo::new(kind, &self.config);
    }

    fn render(&mut self) -> Result<()> {
        let projection = self.demo.projection(&self.perspective);

        self.renderer.clear();
        self.renderer.render_mesh(
            self.demo.mesh(),
            &projection,
            self.demo.view(),
            self.demo.model(),
        );

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(self.status_line()),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }

    fn status_line(&self) -> String {
        let mut line = format!(
            "gltut | {} | FPS: {:.1} | 1-4=Scene R=Reset Q=Quit",
            self.demo.kind().name(),
            self.fps
        );
        if self.demo.kind() == DemoKind::MouseCube {
            let rotating = self.demo.rotating();
            let translating = self.demo.translating();
            line.push_str(&format!(
                " | rotate θ={:.2} φ={:.2} | move θ={:.2} φ={:.2}",
                rotating.theta(),
                rotating.phi(),
                translating.theta(),
                translating.phi()
            ));
        }
        line
    }
}

/// Projection aspect ratio of a `width` x `height` cell grid
fn cell_aspect(width: u16, height: u16) -> f32 {
    // The projection scales Y by the aspect ratio
    width.max(1) as f32 / (height.max(1) as f32 * CELL_ASPECT)
}

/// Drag surface of a `width` x `height` cell grid, never zero-sized
fn surface_size(width: u16, height: u16) -> SurfaceSize {
    SurfaceSize::new(width.max(1) as f32, height.max(1) as f32)
}

/// Map a crossterm mouse event onto pointer input. Scrolling is ignored.
pub fn pointer_event(mouse: &MouseEvent) -> Option<PointerEvent> {
    let x = mouse.column as f32;
    let y = mouse.row as f32;

    match mouse.kind {
        MouseEventKind::Down(button) => Some(PointerEvent::Down {
            button: pointer_button(button),
            x,
            y,
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(_) => Some(PointerEvent::Up),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use gltut_core::transform;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mouse_down_maps_button_and_cell() {
        let event = pointer_event(&mouse(MouseEventKind::Down(MouseButton::Right), 12, 7));
        assert_eq!(
            event,
            Some(PointerEvent::Down {
                button: PointerButton::Right,
                x: 12.0,
                y: 7.0
            })
        );
    }

    #[test]
    fn test_drag_and_move_are_moves() {
        assert_eq!(
            pointer_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 4)),
            Some(PointerEvent::Move { x: 3.0, y: 4.0 })
        );
        assert_eq!(
            pointer_event(&mouse(MouseEventKind::Moved, 5, 6)),
            Some(PointerEvent::Move { x: 5.0, y: 6.0 })
        );
    }

    #[test]
    fn test_release_and_scroll() {
        assert_eq!(
            pointer_event(&mouse(MouseEventKind::Up(MouseButton::Middle), 0, 0)),
            Some(PointerEvent::Up)
        );
        assert_eq!(pointer_event(&mouse(MouseEventKind::ScrollDown, 0, 0)), None);
    }

    fn app(kind: DemoKind) -> TerminalApp {
        TerminalApp::with_size(kind, DemoConfig::default(), 80, 24)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_focus_lost_ends_drag() {
        let mut app = app(DemoKind::MouseCube);
        app.handle_event(Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10)));
        assert!(app.demo.rotating().is_dragging());

        app.handle_event(Event::FocusLost);
        assert!(!app.demo.rotating().is_dragging());

        app.handle_event(Event::Mouse(mouse(MouseEventKind::Moved, 40, 20)));
        assert_eq!(app.demo.rotating().theta(), 0.0);
    }

    #[test]
    fn test_resize_updates_surface_and_projection() {
        let mut app = app(DemoKind::RotatingCube);
        app.handle_event(Event::Resize(120, 30));

        assert_eq!(app.surface, SurfaceSize::new(120.0, 30.0));
        assert_eq!((app.renderer.width(), app.renderer.height()), (120, 30));
        assert!((app.perspective.aspect - 2.0).abs() < 1e-6);
        assert_eq!(app.perspective.fov_y_degrees, app.config.fov_degrees);
    }

    #[test]
    fn test_zero_sized_terminal_keeps_drag_finite() {
        let mut app = TerminalApp::with_size(DemoKind::MouseCube, DemoConfig::default(), 0, 0);
        assert_eq!(app.surface, SurfaceSize::new(1.0, 1.0));
        assert!(app.perspective.aspect.is_finite());

        app.handle_event(Event::Resize(80, 0));
        assert_eq!(app.surface, SurfaceSize::new(80.0, 1.0));
        assert!(app.perspective.aspect.is_finite());

        app.handle_event(Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)));
        app.handle_event(Event::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 2)));
        assert!(app.demo.rotating().theta().is_finite());
        assert!(app.demo.rotating().phi().is_finite());
    }

    #[test]
    fn test_number_keys_switch_scene() {
        let mut app = app(DemoKind::Triangle);
        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.demo.kind(), DemoKind::RotatingCube);

        app.handle_event(key(KeyCode::Char('4')));
        assert_eq!(app.demo.kind(), DemoKind::MouseCube);

        app.handle_event(key(KeyCode::Char('9')));
        assert_eq!(app.demo.kind(), DemoKind::MouseCube);
    }

    #[test]
    fn test_reset_key_restarts_scene() {
        let mut app = app(DemoKind::RotatingCube);
        app.demo.update(500.0);
        assert_ne!(app.demo.model(), &transform::identity());

        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.demo.kind(), DemoKind::RotatingCube);
        assert_eq!(app.demo.model(), &transform::identity());
    }

    #[test]
    fn test_quit_keys_stop_loop() {
        let mut quit = app(DemoKind::Triangle);
        quit.handle_event(Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        assert!(quit.running);

        quit.handle_event(key(KeyCode::Char('q')));
        assert!(!quit.running);

        let mut escape = app(DemoKind::Triangle);
        escape.handle_event(key(KeyCode::Esc));
        assert!(!escape.running);
    }
}
