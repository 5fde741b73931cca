use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, GestureClick};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;

use super::cairo_canvas::CairoCanvas;
use super::frame_loop::FrameLoop;
use super::image_set::{AssetError, ImageSet};
use crate::destroyable::Destroyable;
use crate::events::{EventQueue, EventSender};
use crate::game::settings::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::game::{Board, Game, Settings};
use crate::model::{Dimensions, InputEvent, Point};

fn pointer_released_handler(
    input_events: EventSender<InputEvent>,
) -> impl Fn(&GestureClick, i32, f64, f64) {
    move |_, _n_press, x, y| {
        input_events.send(InputEvent::PointerReleased(Point::from_f64(x, y)));
    }
}

/// Starts one game per process; a repeated activation only raises the existing window.
pub fn activate(app: &Application) -> Result<(), AssetError> {
    if let Some(window) = app.active_window() {
        info!(target: "window", "Already running, presenting existing window");
        window.present();
        return Ok(());
    }
    build_ui(app)
}

fn build_ui(app: &Application) -> Result<(), AssetError> {
    let settings = Settings::load();
    let surface = Dimensions {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    };
    let image_set = Rc::new(ImageSet::load(
        &settings.asset_dir,
        Board::cell_dimensions(surface),
    )?);

    let board = Board::new(Settings::seed_from_env());
    if Settings::is_debug_mode() {
        info!(target: "window", "{:?}", board);
    }
    let game = Rc::new(RefCell::new(Game::new(
        board,
        &settings,
        SystemTime::now(),
    )));

    let drawn = Rc::new(RefCell::new(game.borrow().clone()));

    let (input_event_sender, input_event_receiver) = EventQueue::<InputEvent>::new();

    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .resizable(false)
        .default_width(WINDOW_WIDTH)
        .default_height(WINDOW_HEIGHT)
        .build();

    let drawing_area = DrawingArea::builder()
        .content_width(WINDOW_WIDTH)
        .content_height(WINDOW_HEIGHT)
        .build();

    {
        let drawn = Rc::clone(&drawn);
        let image_set = Rc::clone(&image_set);
        drawing_area.set_draw_func(move |_, cr, _width, _height| {
            let mut canvas = CairoCanvas::new(cr, &image_set);
            drawn.borrow().draw(&mut canvas);
        });
    }

    let gesture_click = GestureClick::new();
    // any button, matching a plain "button released" event
    gesture_click.set_button(0);
    gesture_click.connect_released(pointer_released_handler(input_event_sender.clone()));
    drawing_area.add_controller(gesture_click);

    window.set_child(Some(&drawing_area));

    {
        let input_event_sender = input_event_sender.clone();
        window.connect_close_request(move |_| {
            input_event_sender.send(InputEvent::CloseRequested);
            // the frame loop destroys the window after this frame's draw
            glib::Propagation::Stop
        });
    }

    let frame_loop = FrameLoop::start(
        Rc::clone(&game),
        drawn,
        input_event_receiver,
        drawing_area.clone(),
        window.clone(),
        settings.frame_interval(),
    );

    window.connect_destroy(move |_| {
        info!(target: "window", "Destroying window");
        frame_loop.borrow_mut().destroy();
    });

    window.present();
    Ok(())
}
