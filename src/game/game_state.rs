use log::{debug, info, trace};
use std::time::SystemTime;

use super::board::Board;
use super::settings::{Settings, WINDOW_WIDTH};
use crate::model::{Canvas, Color, InputEvent, Point, TextAnchor, TimerState};

/// Number of face-up unmatched tiles that triggers a comparison.
pub const TWO_SELECTED: usize = 2;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const SCORE_COLOR: Color = Color::WHITE;
pub const SCORE_FONT_SIZE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    IdleInput,
    Resolving,
    Finished,
}

#[derive(Clone)]
pub struct Game {
    board: Board,
    timer_state: TimerState,
    score: u64,
    matched: usize,
    frame_counter: u32,
    mismatch_delay_frames: u32,
    showing_mismatch: bool,
    continue_game: bool,
    close_clicked: bool,
}

impl Game {
    pub fn new(board: Board, settings: &Settings, started: SystemTime) -> Self {
        Self {
            board,
            timer_state: TimerState::started_at(started),
            score: 0,
            matched: 0,
            frame_counter: 0,
            mismatch_delay_frames: settings.mismatch_delay_frames,
            showing_mismatch: false,
            continue_game: true,
            close_clicked: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// The score as drawn on screen; one below the elapsed seconds.
    pub fn displayed_score(&self) -> i64 {
        self.score as i64 - 1
    }

    pub fn is_showing_mismatch(&self) -> bool {
        self.showing_mismatch
    }

    pub fn is_finished(&self) -> bool {
        !self.continue_game
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_clicked
    }

    pub fn timer_state(&self) -> &TimerState {
        &self.timer_state
    }

    pub fn phase(&self) -> GamePhase {
        if !self.continue_game {
            GamePhase::Finished
        } else if self.board.awaiting_match().len() >= TWO_SELECTED {
            GamePhase::Resolving
        } else {
            GamePhase::IdleInput
        }
    }

    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(&event);
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CloseRequested => {
                debug!(target: "game", "Close requested");
                self.close_clicked = true;
            }
            InputEvent::PointerReleased(point) => self.handle_pointer_released(*point),
        }
    }

    fn handle_pointer_released(&mut self, point: Point) {
        // a third tile may not be exposed while a pair is face-up, even within one frame
        if self.showing_mismatch || self.phase() == GamePhase::Resolving {
            trace!(target: "game", "Ignoring click at {:?} while resolving", point);
            return;
        }
        self.board.expose_at(point);
    }

    /// Runs one frame of game logic unless the game is already finished.
    pub fn tick(&mut self, now: SystemTime) {
        if self.continue_game {
            self.update(now);
            self.decide_continue(now);
        }
    }

    fn update(&mut self, now: SystemTime) {
        self.score = self.timer_state.elapsed_seconds_at(now);

        let exposed = self.board.awaiting_match();
        if exposed.len() == TWO_SELECTED {
            self.check_match(exposed[0], exposed[1]);
        }
    }

    fn check_match(&mut self, first: usize, second: usize) {
        let first_image = self.board.tile(first).image_identity();
        let second_image = self.board.tile(second).image_identity();

        if first_image == second_image {
            self.board.tile_mut(first).mark_matched();
            self.board.tile_mut(second).mark_matched();
            self.matched += 1;
            info!(
                target: "game",
                "Matched {} ({}/{} pairs)",
                first_image,
                self.matched,
                self.board.total_pairs()
            );
            return;
        }

        if !self.showing_mismatch {
            trace!(target: "game", "Mismatch {} vs {}", first_image, second_image);
            self.showing_mismatch = true;
        }

        if self.frame_counter < self.mismatch_delay_frames {
            self.frame_counter += 1;
        } else {
            self.showing_mismatch = false;
            self.frame_counter = 0;
            self.board.tile_mut(first).hide();
            self.board.tile_mut(second).hide();
            trace!(target: "game", "Hid mismatched tiles {} and {}", first, second);
        }
    }

    fn decide_continue(&mut self, now: SystemTime) {
        if self.matched == self.board.total_pairs() {
            self.continue_game = false;
            self.timer_state = self.timer_state.ended(now);
            info!(target: "game", "All pairs matched, score {}", self.displayed_score());
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill(BACKGROUND_COLOR);
        self.board.render(canvas);
        self.draw_score(canvas);
    }

    fn draw_score(&self, canvas: &mut dyn Canvas) {
        canvas.text(
            &self.displayed_score().to_string(),
            WINDOW_WIDTH as f64,
            0.0,
            TextAnchor::TopRight,
            SCORE_FONT_SIZE,
            SCORE_COLOR,
        );
    }
}
