//! Edge-triggered input buffer for one processing step.
//!
//! Terminals deliver key events between frames. Every distinct direction
//! pressed during a step is recorded; when the step is processed only one
//! action comes out, picked by the fixed down/up/left/right precedence.
//! Auto-repeat and release events never count as presses.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use tui_2048_core::select_direction;

use crate::map::handle_key_event;
use crate::types::{Direction, GameAction};

#[derive(Debug, Clone, Default)]
pub struct PendingInput {
    directions: ArrayVec<Direction, 4>,
    restart: bool,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a terminal key event. Returns true if it was a game key press.
    pub fn record_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match handle_key_event(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Record an action pressed during this step.
    pub fn press(&mut self, action: GameAction) {
        match action {
            GameAction::Move(direction) => {
                if !self.directions.contains(&direction) {
                    // At most four distinct directions exist.
                    let _ = self.directions.try_push(direction);
                }
            }
            GameAction::Restart => self.restart = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty() && !self.restart
    }

    /// Directions pressed so far this step, in arrival order.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Take the single action for this step and clear the buffer.
    ///
    /// A restart request wins over moves; otherwise the pressed direction
    /// with the highest precedence is returned.
    pub fn take(&mut self) -> Option<GameAction> {
        let action = if self.restart {
            Some(GameAction::Restart)
        } else {
            select_direction(&self.directions).map(GameAction::Move)
        };
        self.directions.clear();
        self.restart = false;
        action
    }
}
