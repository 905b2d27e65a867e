//! Terminal input and the crossterm-backed ticker.
//!
//! Key presses are translated into [`TickEvent`]s and queued on the
//! [`TickClock`] until the next tick is due. Waiting for input doubles as the
//! frame-rate limiter: `event::poll` blocks for at most the time left in the
//! current tick.

use crate::config::GameConfig;
use crate::core::clock::{TickClock, TickEvent, TickFrame, Ticker};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Instant;

/// Map a key press to a game event. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<TickEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(TickEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(TickEvent::Flap),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(TickEvent::Quit),
        _ => None,
    }
}

/// Paces ticks against wall time while collecting terminal input.
pub struct TerminalTicker {
    clock: TickClock,
}

impl TerminalTicker {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            clock: TickClock::new(config, Instant::now()),
        }
    }
}

impl Ticker for TerminalTicker {
    fn on_tick(&mut self) -> io::Result<TickFrame> {
        while let Some(timeout) = self.clock.time_until_tick(Instant::now()) {
            if !event::poll(timeout)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if let Some(game_event) = map_key(key) {
                    self.clock.push(game_event);
                }
            }
        }
        Ok(self.clock.tick(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(press(code)), Some(TickEvent::Flap));
        }
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
            assert_eq!(map_key(press(code)), Some(TickEvent::Quit));
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(TickEvent::Quit));
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Down)), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
