use nfl_api::roster::{self, DIVISIONS, Division, FEATURED_GAME};
use nfl_api::{Matchup, ScheduleView};

/// Placeholder shown by a selector with nothing chosen.
pub const NO_SELECTION: &str = "Select a team";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorId {
    Division(&'static Division),
    FeaturedGame,
}

impl SelectorId {
    pub fn label(&self) -> &'static str {
        match self {
            SelectorId::Division(d) => d.name,
            SelectorId::FeaturedGame => FEATURED_GAME,
        }
    }
}

/// One choice control. Options are rebuilt whenever the active week changes;
/// the choice is remembered by team so it survives the rebuild.
#[derive(Debug, Clone)]
pub struct Selector {
    pub id: SelectorId,
    pub teams: Vec<&'static str>,
    pub options: Vec<Matchup>,
    pub chosen: Option<&'static str>,
}

impl Selector {
    pub fn division(division: &'static Division) -> Self {
        Self::with_teams(SelectorId::Division(division), division.teams.to_vec())
    }

    pub fn featured_game() -> Self {
        Self::with_teams(SelectorId::FeaturedGame, roster::all_teams().collect())
    }

    fn with_teams(id: SelectorId, teams: Vec<&'static str>) -> Self {
        let options = teams.iter().copied().map(Matchup::bare).collect();
        Self { id, teams, options, chosen: None }
    }

    /// Recompute every option label from the current view. Without a loaded
    /// schedule every option is the bare team name.
    pub fn refresh(&mut self, view: Option<&ScheduleView<'_>>) {
        self.options = self
            .teams
            .iter()
            .map(|team| match view {
                Some(view) => view.matchup(team),
                None => Matchup::bare(*team),
            })
            .collect();
    }

    pub fn chosen_index(&self) -> Option<usize> {
        let chosen = self.chosen?;
        self.teams.iter().position(|t| *t == chosen)
    }

    pub fn chosen_matchup(&self) -> Option<&Matchup> {
        self.chosen_index().and_then(|i| self.options.get(i))
    }

    /// Step forward through "Select a team" -> first .. last -> "Select a team".
    pub fn choose_next(&mut self) {
        self.chosen = match self.chosen_index() {
            None => self.teams.first().copied(),
            Some(i) => self.teams.get(i + 1).copied(),
        };
    }

    pub fn choose_prev(&mut self) {
        self.chosen = match self.chosen_index() {
            None => self.teams.last().copied(),
            Some(0) => None,
            Some(i) => self.teams.get(i - 1).copied(),
        };
    }

    pub fn clear(&mut self) {
        self.chosen = None;
    }

    pub fn display(&self) -> String {
        self.chosen_matchup()
            .map(ToString::to_string)
            .unwrap_or_else(|| NO_SELECTION.to_string())
    }
}

/// A chosen option, keyed by the selector it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub selector: SelectorId,
    pub matchup: Matchup,
}

#[derive(Debug, Clone)]
pub struct PicksState {
    pub selectors: Vec<Selector>,
    pub focused: usize,
}

impl Default for PicksState {
    fn default() -> Self {
        let mut selectors: Vec<Selector> = DIVISIONS.iter().map(Selector::division).collect();
        selectors.push(Selector::featured_game());
        Self { selectors, focused: 0 }
    }
}

impl PicksState {
    pub fn refresh(&mut self, view: Option<&ScheduleView<'_>>) {
        for selector in &mut self.selectors {
            selector.refresh(view);
        }
    }

    pub fn focused(&self) -> Option<&Selector> {
        self.selectors.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.selectors.len() {
            self.focused += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn choose_next(&mut self) {
        if let Some(selector) = self.selectors.get_mut(self.focused) {
            selector.choose_next();
        }
    }

    pub fn choose_prev(&mut self) {
        if let Some(selector) = self.selectors.get_mut(self.focused) {
            selector.choose_prev();
        }
    }

    pub fn clear_focused(&mut self) {
        if let Some(selector) = self.selectors.get_mut(self.focused) {
            selector.clear();
        }
    }

    /// Current picks in selector order, rebuilt from the controls each call.
    pub fn picks(&self) -> Vec<Pick> {
        self.selectors
            .iter()
            .filter_map(|s| {
                s.chosen_matchup().map(|m| Pick { selector: s.id, matchup: m.clone() })
            })
            .collect()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec!["Your Picks:".to_string()];
        lines.extend(
            self.picks()
                .iter()
                .map(|p| format!("{}: {}", p.selector.label(), p.matchup)),
        );
        lines
    }
}
