use std::time::Instant;

use crate::action::Action;
use crate::services::weather_service::WeatherService;
use crate::state::{AppState, NoticeDurations};
use crate::surface::Surface;
use crate::update::update;

/// Owns the state and feeds every action through `update`, then runs the
/// resulting commands.
pub struct Controller<S: Surface> {
    state: AppState,
    service: WeatherService<S>,
}

impl<S: Surface> Controller<S> {
    /// Load persisted preferences and history through the service's stores.
    /// Values that cannot be read start from their defaults and each failure
    /// is shown as an error notice.
    pub fn new(mut service: WeatherService<S>, durations: NoticeDurations) -> Self {
        let (state, failures) = AppState::load(service.preferences(), service.recent(), durations);
        for failure in failures {
            service.report_storage(failure);
        }
        Self { state, service }
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        let (state, commands) = update(state, action);
        self.state = state;

        for command in commands {
            self.service.execute(command);
        }
        self.service.surface_mut().present();
    }

    /// Expire notices that ran out
    pub fn tick(&mut self, now: Instant) {
        if self.service.tick(now) {
            self.service.surface_mut().present();
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn service(&self) -> &WeatherService<S> {
        &self.service
    }

    pub fn surface(&self) -> &S {
        self.service.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.service.surface_mut()
    }
}
