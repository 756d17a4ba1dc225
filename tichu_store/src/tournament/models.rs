//! Tournament data models handed out by the store.

use std::sync::{Arc, RwLock};

/// Tournament ID type
pub type TournamentId = String;

/// Pair number within a tournament (1-indexed)
pub type PairNo = u32;

/// Shared, mutable handle to a cached model.
///
/// Every caller asking the store for the same key receives a clone of the
/// same handle, so writes through one are visible through all of them.
pub type Shared<T> = Arc<RwLock<T>>;

/// Summary identity of a tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentHeader {
    /// Tournament ID
    pub id: TournamentId,
    /// Tournament name (empty until filled in)
    pub name: String,
}

impl TournamentHeader {
    /// Create a header with only its ID known
    pub fn new(id: impl Into<TournamentId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }
}

/// One player of a pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentPlayer {
    /// Player name
    pub name: Option<String>,
    /// Contact email, used for results mail
    pub email: Option<String>,
}

impl TournamentPlayer {
    /// Create a player record
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }
}

/// A competing pair within a tournament.
///
/// The pair knows only its number. Which tournament it belongs to is implied
/// by the store key it was created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentPair {
    /// Pair number (1-indexed)
    pub pair_no: PairNo,
    /// Players in this pair
    pub players: Vec<TournamentPlayer>,
}

impl TournamentPair {
    /// Create a pair with no players yet
    pub fn new(pair_no: PairNo) -> Self {
        Self {
            pair_no,
            players: Vec::new(),
        }
    }

    /// Append a player to the pair
    pub fn add_player(&mut self, player: TournamentPlayer) {
        self.players.push(player);
    }
}

/// Full tournament aggregate
#[derive(Debug)]
pub struct Tournament {
    /// Shared header, the same instance the store hands out for this ID
    pub header: Shared<TournamentHeader>,
    /// Number of boards played
    pub no_boards: u32,
    /// Pairs taking part, in the order they were added
    pub pairs: Vec<Shared<TournamentPair>>,
}

impl Tournament {
    /// Wrap an existing header
    pub fn new(header: Shared<TournamentHeader>) -> Self {
        Self {
            header,
            no_boards: 0,
            pairs: Vec::new(),
        }
    }

    /// Tournament ID, read through the header
    pub fn id(&self) -> TournamentId {
        self.header
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .id
            .clone()
    }

    /// Attach a pair handle
    pub fn add_pair(&mut self, pair: Shared<TournamentPair>) {
        self.pairs.push(pair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_header_has_empty_name() {
        let header = TournamentHeader::new("T1");
        assert_eq!(header.id, "T1");
        assert!(header.name.is_empty());
    }

    #[test]
    fn test_new_pair_has_no_players() {
        let mut pair = TournamentPair::new(3);
        assert_eq!(pair.pair_no, 3);
        assert!(pair.players.is_empty());

        pair.add_player(TournamentPlayer::new(Some("Ann".to_string()), None));
        assert_eq!(pair.players.len(), 1);
        assert_eq!(pair.players[0].name.as_deref(), Some("Ann"));
        assert_eq!(pair.players[0].email, None);
    }

    #[test]
    fn test_tournament_reads_id_through_header() {
        let header = Arc::new(RwLock::new(TournamentHeader::new("T1")));
        let tournament = Tournament::new(header.clone());
        assert_eq!(tournament.id(), "T1");
        assert_eq!(tournament.no_boards, 0);

        header.write().unwrap().id = "T2".to_string();
        assert_eq!(tournament.id(), "T2");
    }

    #[test]
    fn test_add_pair_keeps_shared_handle() {
        let header = Arc::new(RwLock::new(TournamentHeader::new("T1")));
        let pair = Arc::new(RwLock::new(TournamentPair::new(1)));

        let mut tournament = Tournament::new(header);
        tournament.add_pair(pair.clone());

        assert_eq!(tournament.pairs.len(), 1);
        assert!(Arc::ptr_eq(&tournament.pairs[0], &pair));
    }
}
