//! Test doubles and builders shared across the Formic test suites.
//!
//! Not part of the public bot API; only test code should depend on this
//! crate.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

use formic_core::{Cell, PlayerId, TurnClock};
use formic_grid::{Grid, Observation};

/// Deterministic [`TurnClock`]: starts at a fixed reading and drains a
/// fixed amount on every poll.
///
/// A drain of zero freezes time; a large drain forces the first reserve
/// check to trip, which is how truncation paths get exercised.
pub struct FakeClock {
    remaining_ms: std::cell::Cell<i64>,
    drain_per_poll_ms: i64,
}

impl FakeClock {
    pub fn new(start_ms: i64, drain_per_poll_ms: i64) -> Self {
        Self {
            remaining_ms: std::cell::Cell::new(start_ms),
            drain_per_poll_ms,
        }
    }

    pub fn frozen(remaining_ms: i64) -> Self {
        Self::new(remaining_ms, 0)
    }
}

impl TurnClock for FakeClock {
    fn time_remaining_ms(&self) -> i64 {
        let now = self.remaining_ms.get();
        self.remaining_ms.set(now - self.drain_per_poll_ms);
        now
    }
}

/// Parse an ASCII map into board dimensions and an observation feed.
///
/// Glyphs: `%` water, `*` food, `a`-`j` ants of players 0-9, `0`-`9`
/// hills of players 0-9, `!` a player-0 corpse, anything else empty.
/// Player 0 is the bot itself.
///
/// # Panics
///
/// Panics on empty or ragged input; maps are test fixtures, not data.
pub fn parse_rows(rows: &[&str]) -> (u16, u16, Vec<(Cell, Observation)>) {
    assert!(!rows.is_empty(), "map needs at least one row");
    let cols = rows[0].len();
    let mut feed = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), cols, "ragged map row {r}");
        for (c, glyph) in row.chars().enumerate() {
            let cell = Cell::new(r as u16, c as u16);
            let observation = match glyph {
                '%' => Some(Observation::Water),
                '*' => Some(Observation::Food),
                '!' => Some(Observation::Dead(PlayerId::ME)),
                'a'..='j' => Some(Observation::Ant(PlayerId(glyph as u8 - b'a'))),
                '0'..='9' => Some(Observation::Hill(PlayerId(glyph as u8 - b'0'))),
                _ => None,
            };
            if let Some(observation) = observation {
                feed.push((cell, observation));
            }
        }
    }
    (rows.len() as u16, cols as u16, feed)
}

/// Build a [`Grid`] directly from an ASCII map.
///
/// # Panics
///
/// Panics on maps [`parse_rows`] rejects.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let (height, width, feed) = parse_rows(rows);
    let mut grid = Grid::new(height, width).expect("map has nonzero dimensions");
    for (cell, observation) in feed {
        grid.apply(cell, observation).expect("cell within map bounds");
    }
    grid
}
