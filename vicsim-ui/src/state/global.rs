//! Global Application State
//!
//! Holds the core [`DashboardState`] in a signal and carries out the
//! [`Effect`]s its dispatch returns: stats fetches and the playback timer.

use gloo_timers::callback::Interval;
use leptos::*;
use vicsim::{
    Action, DashboardConfig, DashboardState, Effect, FetchTicket, ScenarioParams, StatsClient,
    StatsSnapshot, Year, YearRange,
};

use crate::api::HttpStatsSource;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// View state owned by the shell
    pub state: RwSignal<DashboardState>,
    /// Build-time configuration
    pub config: StoredValue<DashboardConfig>,
    /// Playback timer; dropping it cancels the interval
    timer: StoredValue<Option<Interval>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard(config: DashboardConfig) -> DashboardContext {
    let ctx = DashboardContext {
        state: create_rw_signal(DashboardState::from_config(&config)),
        config: store_value(config),
        timer: store_value(None),
    };

    on_cleanup(move || ctx.stop_timer());
    provide_context(ctx);
    ctx
}

impl DashboardContext {
    /// Apply an action and run whatever it asks for
    pub fn dispatch(&self, action: Action) {
        let mut effects = Vec::new();
        self.state.update(|state| effects = state.dispatch(action));
        for effect in effects {
            self.run(effect);
        }
    }

    /// Fetch stats for the initial year
    pub fn load_initial(&self) {
        let effect = self
            .state
            .try_update(|state| state.initial_fetch());
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Fetch(ticket) => self.fetch(ticket),
            Effect::StartTimer { period_ms } => {
                let ctx = *self;
                let interval = Interval::new(period_ms, move || ctx.dispatch(Action::Tick));
                // Replacing the old handle drops and cancels it
                self.timer.set_value(Some(interval));
            }
            Effect::StopTimer => self.stop_timer(),
        }
    }

    /// Spawn a fetch; the response is fenced by the ticket when it lands
    fn fetch(&self, ticket: FetchTicket) {
        let ctx = *self;
        let base = self.config.with_value(|config| config.api.base_url.clone());

        spawn_local(async move {
            let client = StatsClient::new(HttpStatsSource::new(base));
            let stats = client.stats_for(ticket.year).await;
            ctx.dispatch(Action::StatsArrived { ticket, stats });
        });
    }

    fn stop_timer(&self) {
        self.timer.try_update_value(|timer| timer.take());
    }

    pub fn year(&self) -> Memo<Year> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.year()))
    }

    pub fn playing(&self) -> Memo<bool> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.is_playing()))
    }

    pub fn params(&self) -> Memo<ScenarioParams> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.params().clone()))
    }

    pub fn stats(&self) -> Memo<Option<StatsSnapshot>> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.stats().copied()))
    }

    pub fn range(&self) -> YearRange {
        self.state.with_untracked(|s| s.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_change_reaches_params() {
        let runtime = create_runtime();
        let ctx = provide_dashboard(DashboardConfig::default());
        let params = ctx.params();

        ctx.dispatch(Action::SetParam {
            key: "migration".to_string(),
            value: 75,
        });

        let params = params.get_untracked();
        assert_eq!(params.get("migration"), Some(75));
        assert_eq!(params.get("housing_supply"), Some(30));
        runtime.dispose();
    }

    #[test]
    fn test_initial_year_from_config() {
        let runtime = create_runtime();
        let ctx = provide_dashboard(DashboardConfig::default());

        assert_eq!(ctx.year().get_untracked(), Year(2026));
        assert!(!ctx.playing().get_untracked());
        assert_eq!(ctx.range(), YearRange::new(1976, 2026));
        runtime.dispose();
    }
}
