use tracker_types::PlayerStats;

/// Win percentage rounded to the nearest whole number; 0 when no games were played.
pub fn win_rate(games_won: u32, total_games: u32) -> u32 {
    if total_games == 0 {
        return 0;
    }

    ((games_won as f64 / total_games as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub name: String,
    pub games_won: u32,
    pub games_lost: u32,
    pub total_games: u32,
    pub win_rate: u32,
}

impl From<&PlayerStats> for StatsView {
    fn from(stats: &PlayerStats) -> Self {
        Self {
            name: stats.name.clone(),
            games_won: stats.games_won,
            games_lost: stats.games_lost,
            total_games: stats.total_games,
            win_rate: win_rate(stats.games_won, stats.total_games),
        }
    }
}
