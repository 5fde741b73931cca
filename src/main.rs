use gtk4::prelude::*;
use gtk4::Application;
use memory::ui::window;
use std::cell::Cell;
use std::rc::Rc;

const APP_ID: &str = "org.tilematch.Memory";

fn init_logging() {
    env_logger::init();
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder().application_id(APP_ID).build();

    let startup_failed = Rc::new(Cell::new(false));
    app.connect_activate({
        let startup_failed = Rc::clone(&startup_failed);
        move |app| {
            if let Err(e) = window::activate(app) {
                log::error!(target: "main", "Cannot start: {}", e);
                startup_failed.set(true);
                app.quit();
            }
        }
    });

    let status = app.run();
    if startup_failed.get() {
        glib::ExitCode::FAILURE
    } else {
        status
    }
}
