//! Player and team identities, and receiver scoping

/// Identifies a player connected to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Identifies a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TeamId(pub u32);

/// Who a widget is visible and interactive for.
///
/// A widget built without a receiver is visible to everyone; the host call
/// then carries no receiver argument at all rather than a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// Scoped to a single player.
    Player(PlayerId),
    /// Scoped to one team.
    Team(TeamId),
}

impl Receiver {
    /// Resolve the props-level pair to a single receiver.
    ///
    /// At most one of the two is meaningful; a player scope wins when both
    /// are supplied.
    pub fn resolve(player: Option<PlayerId>, team: Option<TeamId>) -> Option<Self> {
        match (player, team) {
            (Some(player), _) => Some(Self::Player(player)),
            (None, Some(team)) => Some(Self::Team(team)),
            (None, None) => None,
        }
    }
}
