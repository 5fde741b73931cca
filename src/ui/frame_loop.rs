use glib::{idle_add_local_once, timeout_add_local, ControlFlow, SourceId};
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, DrawingArea};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use crate::destroyable::Destroyable;
use crate::events::EventReceiver;
use crate::game::settings::WINDOW_TITLE;
use crate::game::Game;
use crate::model::InputEvent;

/// Fixed-rate timer on the GTK main loop: poll input, draw, then advance game logic.
///
/// GTK paints after the timer callback returns, so each tick copies the game into
/// `drawn` before updating it; the draw function paints that copy.
pub struct FrameLoop {
    timer: Rc<RefCell<Option<SourceId>>>,
}

impl Destroyable for FrameLoop {
    fn destroy(&mut self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            debug!(target: "frame_loop", "Removing frame timer");
            timer.remove();
        }
    }
}

impl FrameLoop {
    pub fn start(
        game: Rc<RefCell<Game>>,
        drawn: Rc<RefCell<Game>>,
        input_events: EventReceiver<InputEvent>,
        drawing_area: DrawingArea,
        window: ApplicationWindow,
        interval: Duration,
    ) -> Rc<RefCell<Self>> {
        let timer_slot: Rc<RefCell<Option<SourceId>>> = Rc::new(RefCell::new(None));

        let timer = {
            let timer_slot = Rc::clone(&timer_slot);
            timeout_add_local(interval, move || {
                let mut game = game.borrow_mut();
                game.handle_events(input_events.poll());
                *drawn.borrow_mut() = game.clone();
                drawing_area.queue_draw();

                let was_finished = game.is_finished();
                game.tick(SystemTime::now());
                if !was_finished && game.is_finished() {
                    let title = format!(
                        "{}: finished in {} s",
                        WINDOW_TITLE,
                        game.displayed_score()
                    );
                    window.set_title(Some(&title));
                }

                let close_requested = game.is_close_requested();
                drop(game);

                if close_requested {
                    info!(target: "frame_loop", "Window closed, stopping");
                    // returning Break removes the source itself
                    timer_slot.borrow_mut().take();
                    // idle runs below redraw priority, so the queued frame is painted first
                    let window = window.clone();
                    idle_add_local_once(move || window.destroy());
                    return ControlFlow::Break;
                }
                ControlFlow::Continue
            })
        };
        *timer_slot.borrow_mut() = Some(timer);

        Rc::new(RefCell::new(Self { timer: timer_slot }))
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        log::trace!(target: "frame_loop", "Dropping FrameLoop");
        self.destroy();
    }
}
