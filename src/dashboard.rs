//! Dashboard View State
//!
//! The single state store owned by the application shell. Components send
//! [`Action`]s up; [`DashboardState::dispatch`] applies them and returns the
//! [`Effect`]s the shell must carry out (start a fetch, start or stop the
//! playback timer).
//!
//! # Request fencing
//!
//! Fetches are never cancelled, so responses can land out of order. Each
//! fetch carries a [`FetchTicket`] naming the year it was issued for, and a
//! response is only applied while that year is still selected.

use crate::config::DashboardConfig;
use crate::map::RegionId;
use crate::scenario::{ParamError, ScenarioParams};
use crate::stats::StatsSnapshot;
use crate::timeline::{Year, YearRange};

/// Tag attached to an in-flight stats fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub year: Year,
}

/// Events coming up from components and timers
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scrubber moved
    SetYear(Year),
    /// Play/pause pressed
    TogglePlay,
    /// Playback timer fired
    Tick,
    /// Scenario slider moved
    SetParam { key: String, value: u8 },
    /// A fetch completed
    StatsArrived {
        ticket: FetchTicket,
        stats: StatsSnapshot,
    },
    /// Map clicked
    SelectRegion(RegionId),
}

/// Work the shell performs after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchTicket),
    StartTimer { period_ms: u32 },
    StopTimer,
}

/// Result of applying a fetched snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    /// The year changed after the fetch was issued
    Stale,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    range: YearRange,
    tick_ms: u32,
    year: Year,
    playing: bool,
    params: ScenarioParams,
    stats: Option<StatsSnapshot>,
    next_seq: u64,
}

impl DashboardState {
    pub fn new(range: YearRange, initial_year: Year, params: ScenarioParams, tick_ms: u32) -> Self {
        Self {
            range,
            tick_ms,
            year: range.clamp(initial_year),
            playing: false,
            params,
            stats: None,
            next_seq: 0,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.timeline.range(),
            config.timeline.initial_year(),
            config.scenario.params(),
            config.timeline.tick_ms,
        )
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    /// Ticket for the fetch that loads the initial year
    pub fn initial_fetch(&mut self) -> Effect {
        Effect::Fetch(self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.next_seq += 1;
        FetchTicket {
            seq: self.next_seq,
            year: self.year,
        }
    }

    /// Apply an action and return the follow-up work
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::SetYear(year) => {
                self.year = self.range.clamp(year);
                vec![Effect::Fetch(self.issue_ticket())]
            }
            Action::TogglePlay => {
                self.playing = !self.playing;
                if self.playing {
                    vec![Effect::StartTimer {
                        period_ms: self.tick_ms,
                    }]
                } else {
                    vec![Effect::StopTimer]
                }
            }
            Action::Tick => {
                if !self.playing {
                    return Vec::new();
                }
                self.year = self.range.advance(self.year);
                vec![Effect::Fetch(self.issue_ticket())]
            }
            Action::SetParam { key, value } => {
                if let Err(e) = self.set_param(&key, value) {
                    tracing::warn!("Ignoring slider change: {}", e);
                }
                Vec::new()
            }
            Action::StatsArrived { ticket, stats } => {
                self.apply_stats(ticket, stats);
                Vec::new()
            }
            Action::SelectRegion(id) => {
                tracing::info!(region = id.0, "Selected LGA {}", id);
                Vec::new()
            }
        }
    }

    pub fn set_param(&mut self, key: &str, value: u8) -> Result<(), ParamError> {
        self.params.set(key, value)
    }

    /// Store a fetched snapshot unless the year has moved on
    pub fn apply_stats(&mut self, ticket: FetchTicket, stats: StatsSnapshot) -> Applied {
        if ticket.year != self.year {
            tracing::debug!(
                issued_for = ticket.year.get(),
                current = self.year.get(),
                seq = ticket.seq,
                "Discarding stale stats response"
            );
            return Applied::Stale;
        }
        self.stats = Some(stats);
        Applied::Accepted
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fallback_stats;

    fn fetch_ticket(effects: &[Effect]) -> FetchTicket {
        match effects {
            [Effect::Fetch(ticket)] => *ticket,
            other => panic!("expected a single fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_default_state() {
        let state = DashboardState::default();
        assert_eq!(state.year(), Year(2026));
        assert!(!state.is_playing());
        assert!(state.stats().is_none());
        assert_eq!(state.params(), &ScenarioParams::standard());
    }

    #[test]
    fn test_initial_year_clamped() {
        let state = DashboardState::new(
            YearRange::default(),
            Year(1800),
            ScenarioParams::new(),
            500,
        );
        assert_eq!(state.year(), Year(1976));
    }

    #[test]
    fn test_set_year_issues_fetch() {
        let mut state = DashboardState::default();
        let ticket = fetch_ticket(&state.dispatch(Action::SetYear(Year(2000))));
        assert_eq!(ticket.year, Year(2000));
        assert_eq!(state.year(), Year(2000));
    }

    #[test]
    fn test_toggle_play_starts_and_stops_timer() {
        let mut state = DashboardState::default();

        let effects = state.dispatch(Action::TogglePlay);
        assert!(state.is_playing());
        assert_eq!(effects, vec![Effect::StartTimer { period_ms: 500 }]);

        let effects = state.dispatch(Action::TogglePlay);
        assert!(!state.is_playing());
        assert_eq!(effects, vec![Effect::StopTimer]);
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut state = DashboardState::default();
        state.dispatch(Action::SetYear(Year(2025)));
        state.dispatch(Action::TogglePlay);

        let ticket = fetch_ticket(&state.dispatch(Action::Tick));
        assert_eq!(ticket.year, Year(2026));

        state.dispatch(Action::Tick);
        assert_eq!(state.year(), Year(1976));

        state.dispatch(Action::Tick);
        assert_eq!(state.year(), Year(1977));
    }

    #[test]
    fn test_tick_ignored_when_paused() {
        let mut state = DashboardState::default();
        state.dispatch(Action::SetYear(Year(2000)));
        state.dispatch(Action::TogglePlay);
        state.dispatch(Action::Tick);
        state.dispatch(Action::TogglePlay);

        assert!(state.dispatch(Action::Tick).is_empty());
        assert_eq!(state.year(), Year(2001));
    }

    #[test]
    fn test_set_param_changes_only_that_key() {
        let mut state = DashboardState::default();
        let effects = state.dispatch(Action::SetParam {
            key: "migration".to_string(),
            value: 75,
        });

        assert!(effects.is_empty());
        assert_eq!(state.params().get("migration"), Some(75));
        assert_eq!(state.params().get("inflation"), Some(3));
        assert_eq!(state.params().get("housing_supply"), Some(30));
        assert_eq!(state.params().get("infra_investment"), Some(60));
    }

    #[test]
    fn test_unknown_param_ignored() {
        let mut state = DashboardState::default();
        state.dispatch(Action::SetParam {
            key: "tax_rate".to_string(),
            value: 5,
        });
        assert_eq!(state.params(), &ScenarioParams::standard());
    }

    #[test]
    fn test_params_do_not_trigger_fetch_or_change_year() {
        let mut state = DashboardState::default();
        let year = state.year();
        let effects = state.dispatch(Action::SetParam {
            key: "inflation".to_string(),
            value: 99,
        });
        assert!(effects.is_empty());
        assert_eq!(state.year(), year);
    }

    #[test]
    fn test_matching_response_accepted() {
        let mut state = DashboardState::default();
        let ticket = fetch_ticket(&state.dispatch(Action::SetYear(Year(2010))));

        assert_eq!(
            state.apply_stats(ticket, fallback_stats(Year(2010))),
            Applied::Accepted
        );
        assert_eq!(state.stats(), Some(&fallback_stats(Year(2010))));
    }

    #[test]
    fn test_out_of_order_responses_fenced() {
        let mut state = DashboardState::default();
        let t2000 = fetch_ticket(&state.dispatch(Action::SetYear(Year(2000))));
        let t2010 = fetch_ticket(&state.dispatch(Action::SetYear(Year(2010))));
        let t2020 = fetch_ticket(&state.dispatch(Action::SetYear(Year(2020))));

        // Newest resolves first, older ones straggle in afterwards
        state.dispatch(Action::StatsArrived {
            ticket: t2020,
            stats: fallback_stats(Year(2020)),
        });
        assert_eq!(state.apply_stats(t2000, fallback_stats(Year(2000))), Applied::Stale);
        assert_eq!(state.apply_stats(t2010, fallback_stats(Year(2010))), Applied::Stale);

        assert_eq!(state.year(), Year(2020));
        assert_eq!(state.stats(), Some(&fallback_stats(Year(2020))));
    }

    #[test]
    fn test_tickets_are_sequenced() {
        let mut state = DashboardState::default();
        let first = state.initial_fetch();
        let second = state.dispatch(Action::SetYear(Year(1990)));

        match (first, fetch_ticket(&second)) {
            (Effect::Fetch(a), b) => assert!(b.seq > a.seq),
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_select_region_has_no_effects() {
        let mut state = DashboardState::default();
        assert!(state.dispatch(Action::SelectRegion(RegionId(1))).is_empty());
    }
}
