use serde::Serialize;

use crate::database::models::RankedPlayer;

/// One head-to-head match for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub id1: i32,
    pub name1: String,
    pub id2: i32,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &RankedPlayer, second: &RankedPlayer) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn players(&self) -> [RankedPlayer; 2] {
        [
            RankedPlayer::new(self.id1, self.name1.as_str()),
            RankedPlayer::new(self.id2, self.name2.as_str()),
        ]
    }
}
