use std::fmt;

use backend::system::{IoEvents, Key, MouseButtonId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// One line of console output, one variant per message the demo can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    SpacebarPressed,
    SpacebarReleased,
    LeftArrowPressed,
    RightArrowPressed,
    // x, y
    LeftClick(i32, i32),
    RightClick(i32, i32),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::SpacebarPressed => write!(f, "Spacebar pressed!"),
            Notification::SpacebarReleased => write!(f, "Spacebar released!"),
            Notification::LeftArrowPressed => write!(f, "Left arrow key pressed"),
            Notification::RightArrowPressed => write!(f, "Right arrow key pressed"),
            Notification::LeftClick(x, y) => {
                write!(f, "Left mouse button clicked at: ({x}, {y})")
            }
            Notification::RightClick(x, y) => {
                write!(f, "Right mouse button clicked at: ({x}, {y})")
            }
        }
    }
}

/// Owns the continuation state of the event loop. `Stopped` is terminal:
/// only `Quit` or an Escape key-down gets there, nothing leaves it.
pub struct App {
    state: LoopState,
}

impl App {
    pub fn new() -> App {
        App {
            state: LoopState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Dispatch one drained event and hand back what to print, if anything.
    /// Runs the same in `Running` and `Stopped`: later events of a drained
    /// batch still land after a quit.
    pub fn handle_event(&mut self, event: &IoEvents) -> Option<Notification> {
        match event {
            IoEvents::Quit => {
                self.state = LoopState::Stopped;
                None
            }
            IoEvents::KeyDown(key) => match key {
                Key::Escape => {
                    self.state = LoopState::Stopped;
                    None
                }
                Key::Space => Some(Notification::SpacebarPressed),
                Key::Left => Some(Notification::LeftArrowPressed),
                Key::Right => Some(Notification::RightArrowPressed),
                Key::Other => None,
            },
            IoEvents::KeyUp(key) => match key {
                Key::Space => Some(Notification::SpacebarReleased),
                _ => None,
            },
            IoEvents::MouseButtonDown(button) => match button {
                MouseButtonId::Left(x, y) => Some(Notification::LeftClick(*x, *y)),
                MouseButtonId::Right(x, y) => Some(Notification::RightClick(*x, *y)),
                MouseButtonId::Middle(..) | MouseButtonId::Other(..) => None,
            },
            // button releases need no reaction
            IoEvents::MouseButtonUp(_) => None,
            // motion tracking is switched off
            IoEvents::MouseMotion(..) => None,
        }
    }
}
