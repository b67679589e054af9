//! Validated game configuration.

use std::error::Error;
use std::fmt;

/// Which assignment strategy the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Gradient-following: stateless, one field read per agent per turn.
    #[default]
    FieldFollowing,
    /// Standing plans backed by A* paths, cached across turns.
    PlanFollowing,
}

/// Game parameters, normally taken from the match setup feed.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    /// Board rows.
    pub rows: u16,
    /// Board columns.
    pub cols: u16,
    /// Wall-clock budget per turn, milliseconds.
    pub turntime_ms: i64,
    /// Squared vision radius.
    pub viewradius2: u32,
    /// Squared attack radius. Stored with the rest of the match
    /// parameters; combat prediction itself runs on the field channels.
    pub attackradius2: u32,
    /// One defensive station is manned per this many agents.
    pub ants_per_defender: u32,
    /// Population below which combat gradients are ignored.
    pub min_combat_agents: usize,
    /// Fraction of the turn budget kept in reserve for emitting output.
    pub reserve_fraction: f64,
    /// RNG seed for the whole match.
    pub seed: u64,
    /// Assignment strategy.
    pub strategy: Strategy,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 60,
            cols: 90,
            turntime_ms: 500,
            viewradius2: 55,
            attackradius2: 5,
            ants_per_defender: 10,
            min_combat_agents: 20,
            reserve_fraction: 0.08,
            seed: 42,
            strategy: Strategy::default(),
        }
    }
}

impl GameSettings {
    /// Check the parameters for structural validity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.turntime_ms <= 0 {
            return Err(ConfigError::NonPositiveTurnTime {
                turntime_ms: self.turntime_ms,
            });
        }
        if self.viewradius2 == 0 {
            return Err(ConfigError::ZeroViewRadius);
        }
        if self.attackradius2 > self.viewradius2 {
            return Err(ConfigError::AttackExceedsView {
                attackradius2: self.attackradius2,
                viewradius2: self.viewradius2,
            });
        }
        if !(0.0..1.0).contains(&self.reserve_fraction) {
            return Err(ConfigError::ReserveOutOfRange {
                reserve_fraction: self.reserve_fraction,
            });
        }
        if self.ants_per_defender == 0 {
            return Err(ConfigError::ZeroAntsPerDefender);
        }
        Ok(())
    }
}

/// Rejected [`GameSettings`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A board dimension is zero.
    ZeroDimension {
        /// Configured rows.
        rows: u16,
        /// Configured columns.
        cols: u16,
    },
    /// The turn budget is zero or negative.
    NonPositiveTurnTime {
        /// Configured budget.
        turntime_ms: i64,
    },
    /// A zero vision radius would blind the bot.
    ZeroViewRadius,
    /// Attack range cannot exceed vision range.
    AttackExceedsView {
        /// Configured squared attack radius.
        attackradius2: u32,
        /// Configured squared vision radius.
        viewradius2: u32,
    },
    /// The output reserve must be a fraction of the turn, `[0, 1)`.
    ReserveOutOfRange {
        /// Configured fraction.
        reserve_fraction: f64,
    },
    /// Garrison sizing divides by this.
    ZeroAntsPerDefender,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { rows, cols } => {
                write!(f, "board dimensions {rows}x{cols} must both be nonzero")
            }
            Self::NonPositiveTurnTime { turntime_ms } => {
                write!(f, "turn budget {turntime_ms}ms must be positive")
            }
            Self::ZeroViewRadius => write!(f, "viewradius2 must be nonzero"),
            Self::AttackExceedsView {
                attackradius2,
                viewradius2,
            } => write!(
                f,
                "attackradius2 {attackradius2} exceeds viewradius2 {viewradius2}"
            ),
            Self::ReserveOutOfRange { reserve_fraction } => {
                write!(f, "reserve fraction {reserve_fraction} not in [0, 1)")
            }
            Self::ZeroAntsPerDefender => write!(f, "ants_per_defender must be nonzero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn bad_settings_are_rejected() {
        let mut settings = GameSettings::default();
        settings.rows = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ZeroDimension { .. })
        ));

        let mut settings = GameSettings::default();
        settings.turntime_ms = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositiveTurnTime { .. })
        ));

        let mut settings = GameSettings::default();
        settings.reserve_fraction = 1.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ReserveOutOfRange { .. })
        ));

        let mut settings = GameSettings::default();
        settings.attackradius2 = 100;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::AttackExceedsView { .. })
        ));
    }
}
