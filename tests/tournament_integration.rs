use std::path::PathBuf;

use swiss_tournament::config::settings::DatabaseSettings;
use swiss_tournament::services::TournamentService;

fn temp_database(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "swiss_tournament_{}_{}.db",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn open(path: &PathBuf) -> TournamentService {
    let settings = DatabaseSettings {
        path: path.to_string_lossy().into_owned(),
        pool_size: 2,
    };
    TournamentService::open(&settings).unwrap()
}

#[test]
fn test_data_survives_reopen() {
    let path = temp_database("reopen");
    {
        let tournament = open(&path);
        let a = tournament.register_player("Ada").unwrap();
        let b = tournament.register_player("Grace").unwrap();
        tournament.report_match(b.id, a.id).unwrap();
    }

    let tournament = open(&path);
    let standings = tournament.player_standings().unwrap();

    assert_eq!(tournament.count_players().unwrap(), 2);
    assert_eq!(standings[0].name, "Grace");
    assert_eq!(standings[0].wins, 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_full_swiss_tournament() {
    let path = temp_database("full");
    let tournament = open(&path);
    tournament.reset().unwrap();

    let names = [
        "Twilight Sparkle",
        "Fluttershy",
        "Applejack",
        "Pinkie Pie",
        "Rarity",
        "Rainbow Dash",
        "Princess Celestia",
        "Princess Luna",
    ];
    for name in names {
        tournament.register_player(name).unwrap();
    }
    assert_eq!(tournament.count_players().unwrap(), 8);

    // Three rounds: the first listed player of every pairing wins.
    for _ in 0..3 {
        let pairings = tournament.swiss_pairings().unwrap();
        assert_eq!(pairings.len(), 4);
        for pairing in pairings {
            tournament.report_match(pairing.id1, pairing.id2).unwrap();
        }
    }

    let standings = tournament.player_standings().unwrap();
    let wins: Vec<i64> = standings.iter().map(|s| s.wins).collect();

    assert_eq!(wins, vec![3, 2, 2, 2, 1, 1, 1, 0]);
    assert!(standings.iter().all(|s| s.matches == 3));
    assert_eq!(standings[0].name, "Twilight Sparkle");

    tournament.delete_matches().unwrap();
    tournament.delete_players().unwrap();
    assert_eq!(tournament.count_players().unwrap(), 0);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_odd_field_leaves_last_player_out() {
    let path = temp_database("odd");
    let tournament = open(&path);
    tournament.reset().unwrap();

    for name in ["A", "B", "C"] {
        tournament.register_player(name).unwrap();
    }

    let pairings = tournament.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 1);
    assert_eq!((pairings[0].name1.as_str(), pairings[0].name2.as_str()), ("A", "B"));

    let _ = std::fs::remove_file(&path);
}
