pub mod swiss;
pub mod types;

pub use swiss::{compute_swiss_pairings, unpaired_player};
pub use types::Pairing;
