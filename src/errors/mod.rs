use thiserror::Error;

/// Requests the store would accept but a tournament must not.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TournamentError {
    #[error("player {0} cannot play a match against themselves")]
    SelfMatch(i32),
}

/// Whether the error chain carries a caller precondition violation.
pub fn is_invalid_request(error: &anyhow::Error) -> bool {
    error.downcast_ref::<TournamentError>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_messages() {
        assert_eq!(
            TournamentError::SelfMatch(4).to_string(),
            "player 4 cannot play a match against themselves"
        );
    }

    #[test]
    fn test_invalid_request_survives_context() {
        let err = Err::<(), _>(TournamentError::SelfMatch(4))
            .context("Failed to report match")
            .unwrap_err();

        assert!(is_invalid_request(&err));
        assert!(!is_invalid_request(&anyhow::anyhow!("disk I/O error")));
    }
}
