use backend;

mod app;

use app::App;

const SCREEN_WIDTH: usize = 800;
const SCREEN_HEIGHT: usize = 600;
const WINDOW_TITLE: &str = "Event Handling Example";

fn main() {
    env_logger::init();

    let mut system =
        match backend::system::System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT) {
            Ok(s) => s,
            Err(msg) => panic!("Demo initialization failure: {msg}"),
        };
    let mut app = App::new();

    while app.is_running() {
        for event in system.poll_events() {
            if let Some(notification) = app.handle_event(&event) {
                println!("{notification}");
            }
        }
        // demo logic
        // fill the screen with white
        system.clear_screen(1.0, 1.0, 1.0);
        // demo gfx render logic
        system.draw_to_screen();
    }

    log::debug!("event loop stopped, releasing the window");
}
