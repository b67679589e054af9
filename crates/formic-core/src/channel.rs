//! Potential-field channels.

use std::fmt;

/// One scalar channel of the potential field.
///
/// Every cell carries one non-negative value per channel. The first three
/// channels attract agents (and are zeroed under friendly agents after each
/// diffusion pass); `Allied` and `Enemy` encode force presence and feed the
/// danger estimate `allied − enemy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Attraction toward visible food.
    Food = 0,
    /// Attraction toward the exploration frontier.
    Explore = 1,
    /// Attraction toward enemy agents and hills, defense slots.
    Combat = 2,
    /// Friendly force presence.
    Allied = 3,
    /// Enemy force presence.
    Enemy = 4,
}

impl Channel {
    /// Number of channels stored per cell.
    pub const COUNT: usize = 5;

    /// All channels in storage order.
    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::Food,
        Channel::Explore,
        Channel::Combat,
        Channel::Allied,
        Channel::Enemy,
    ];

    /// Index of this channel's storage plane.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this channel is zeroed under friendly agents after each
    /// diffusion pass so an agent does not attract itself or siblings.
    pub const fn zeroed_under_agents(self) -> bool {
        matches!(self, Channel::Food | Channel::Explore | Channel::Combat)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Food => "food",
            Channel::Explore => "explore",
            Channel::Combat => "combat",
            Channel::Allied => "allied",
            Channel::Enemy => "enemy",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_ordered() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn presence_channels_survive_agent_zeroing() {
        assert!(Channel::Food.zeroed_under_agents());
        assert!(Channel::Explore.zeroed_under_agents());
        assert!(Channel::Combat.zeroed_under_agents());
        assert!(!Channel::Allied.zeroed_under_agents());
        assert!(!Channel::Enemy.zeroed_under_agents());
    }
}
