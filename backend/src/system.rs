use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::video::GLProfile;

/// Keys the demo reacts to; every other keycode collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),   // button: 1
    Right(i32, i32),  // button: 3
    Middle(i32, i32), // button: 2
    Other(i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
    MouseButtonDown(MouseButtonId),
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    pub event_pump: sdl2::EventPump,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .opengl()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building OpenGL window: {e}")),
        };

        let gl_ctx = window.gl_create_context()?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        let event_pump = sdl_context.event_pump()?;

        log::debug!("OpenGL window '{title}' ready ({w}x{h})");

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            window,
            gl_ctx,
            event_pump,
        })
    }

    /// Drains everything pending on the queue, translated to `IoEvents`.
    /// Finite per call; call again next iteration for the next batch.
    pub fn poll_events(&mut self) -> Vec<IoEvents> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(IoEvents::Quit),
                // repeat == true is OS auto-repeat; one physical press, one event
                Event::KeyDown {
                    keycode,
                    repeat: false,
                    ..
                } => events.push(IoEvents::KeyDown(map_keycode(keycode))),
                Event::KeyUp { keycode, .. } => {
                    events.push(IoEvents::KeyUp(map_keycode(keycode)))
                }
                Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => events.push(IoEvents::MouseMotion(x, y, xrel, yrel)),
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => events.push(IoEvents::MouseButtonDown(map_button(mouse_btn, x, y))),
                Event::MouseButtonUp {
                    mouse_btn, x, y, ..
                } => events.push(IoEvents::MouseButtonUp(map_button(mouse_btn, x, y))),
                _ => {}
            }
        }

        events
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        ::std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

fn map_keycode(keycode: Option<Keycode>) -> Key {
    match keycode {
        Some(Keycode::Escape) => Key::Escape,
        Some(Keycode::Space) => Key::Space,
        Some(Keycode::Left) => Key::Left,
        Some(Keycode::Right) => Key::Right,
        _ => Key::Other,
    }
}

fn map_button(button: MouseButton, x: i32, y: i32) -> MouseButtonId {
    match button {
        MouseButton::Left => MouseButtonId::Left(x, y),
        MouseButton::Right => MouseButtonId::Right(x, y),
        MouseButton::Middle => MouseButtonId::Middle(x, y),
        _ => MouseButtonId::Other(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(map_keycode(Some(Keycode::Escape)), Key::Escape);
        assert_eq!(map_keycode(Some(Keycode::Space)), Key::Space);
        assert_eq!(map_keycode(Some(Keycode::Left)), Key::Left);
        assert_eq!(map_keycode(Some(Keycode::Right)), Key::Right);
        assert_eq!(map_keycode(Some(Keycode::A)), Key::Other);
        assert_eq!(map_keycode(None), Key::Other);
    }

    #[test]
    fn test_button_mapping_keeps_coordinates() {
        assert_eq!(
            map_button(MouseButton::Left, 10, 20),
            MouseButtonId::Left(10, 20)
        );
        assert_eq!(
            map_button(MouseButton::Right, -3, 7),
            MouseButtonId::Right(-3, 7)
        );
        assert_eq!(
            map_button(MouseButton::Middle, 0, 0),
            MouseButtonId::Middle(0, 0)
        );
        assert_eq!(
            map_button(MouseButton::X1, 800, 600),
            MouseButtonId::Other(800, 600)
        );
    }
}
