/// A division and its four member teams, by roster nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub name: &'static str,
    pub teams: [&'static str; 4],
}

/// Label of the extra selector that offers every team in the league.
pub const FEATURED_GAME: &str = "Sunday Night Game";

pub static DIVISIONS: [Division; 8] = [
    Division { name: "AFC East", teams: ["Bills", "Dolphins", "Patriots", "Jets"] },
    Division { name: "AFC North", teams: ["Ravens", "Bengals", "Browns", "Steelers"] },
    Division { name: "AFC South", teams: ["Texans", "Colts", "Jaguars", "Titans"] },
    Division { name: "AFC West", teams: ["Broncos", "Chiefs", "Raiders", "Chargers"] },
    Division { name: "NFC East", teams: ["Cowboys", "Giants", "Eagles", "Commanders"] },
    Division { name: "NFC North", teams: ["Bears", "Lions", "Packers", "Vikings"] },
    Division { name: "NFC South", teams: ["Falcons", "Panthers", "Saints", "Buccaneers"] },
    Division { name: "NFC West", teams: ["Cardinals", "Rams", "49ers", "Seahawks"] },
];

/// All 32 teams in division order.
pub fn all_teams() -> impl Iterator<Item = &'static str> {
    DIVISIONS.iter().flat_map(|d| d.teams.iter().copied())
}
