//! Weather backend: runs the commands produced by `update`.
//! Network work is spawned on the tokio runtime; results come back as
//! actions over an mpsc channel. Everything else runs inline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use weathernow_store::{KeyValueStore, PreferenceStore, RecentStore, StorageError};
use weathernow_weather::{ForecastClient, LocationSource};

use crate::action::{Action, Command};
use crate::error_mapping::IntoAppError;
use crate::notify::{Notifications, Severity};
use crate::state::RequestId;
use crate::surface::Surface;

pub struct WeatherService<S: Surface> {
    client: Arc<ForecastClient>,
    locator: Arc<dyn LocationSource>,
    preferences: PreferenceStore,
    recent: RecentStore,
    notifications: Notifications,
    notice_duration: Duration,
    surface: S,
    tx: mpsc::UnboundedSender<Action>,
}

impl<S: Surface> WeatherService<S> {
    /// Returns the service plus the receiving end for completed requests.
    pub fn new(
        client: Arc<ForecastClient>,
        locator: Arc<dyn LocationSource>,
        store: Arc<dyn KeyValueStore>,
        surface: S,
        notice_duration: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            client,
            locator,
            preferences: PreferenceStore::new(store.clone()),
            recent: RecentStore::new(store),
            notifications: Notifications::new(),
            notice_duration,
            surface,
            tx,
        };
        (service, rx)
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn recent(&self) -> &RecentStore {
        &self.recent
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Geocode { request, query } => self.spawn_geocode(request, query),
            Command::Locate { request } => self.spawn_locate(request),
            Command::FetchForecast {
                request,
                place_name,
                coordinates,
            } => self.spawn_forecast(request, place_name, coordinates.latitude, coordinates.longitude),

            Command::PersistUnit(unit) => {
                let result = self.preferences.set_unit(unit);
                self.check_storage(result);
            }
            Command::PersistAlert(spec) => {
                let result = self.preferences.set_alert(&spec);
                self.check_storage(result);
            }
            Command::RemoveAlert => {
                let result = self.preferences.clear_alert();
                self.check_storage(result);
            }
            Command::RecordRecent(place) => {
                let result = self.recent.add(place).map(|_| ());
                self.check_storage(result);
            }
            Command::ClearRecent => {
                let result = self.recent.clear();
                self.check_storage(result);
            }

            Command::RenderWeather(view) => self.surface.show_weather(&view),
            Command::RenderRecent(view) => self.surface.show_recent(&view),
            Command::RenderAlertInfo(text) => self.surface.show_alert_info(text.as_deref()),
            Command::RenderUnitLabel(label) => self.surface.show_unit_label(label),

            Command::Notify {
                message,
                severity,
                duration,
            } => {
                self.notifications
                    .notify(message, severity, duration, Instant::now());
                self.surface.show_notices(self.notifications.active());
            }
            Command::DismissNotice(id) => {
                if self.notifications.dismiss(id) {
                    self.surface.show_notices(self.notifications.active());
                } else {
                    tracing::debug!("Notice {} already gone", id);
                }
            }
        }
    }

    /// Expire notices. Returns true when the surface changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.notifications.expire(now) {
            self.surface.show_notices(self.notifications.active());
            true
        } else {
            false
        }
    }

    /// Log a storage failure and show it as an error notice
    pub fn report_storage(&mut self, error: StorageError) {
        tracing::error!("Storage failure: {}", error);
        let message = error.into_app_error().user_message();
        self.notifications
            .notify(message, Severity::Error, self.notice_duration, Instant::now());
        self.surface.show_notices(self.notifications.active());
    }

    fn check_storage(&mut self, result: Result<(), StorageError>) {
        if let Err(e) = result {
            self.report_storage(e);
        }
    }

    fn spawn_geocode(&self, request: RequestId, query: String) {
        let tx = self.tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client.geocode(&query).await.map_err(|e| {
                tracing::warn!("Geocoding {:?} failed: {}", query, e);
                e.into_app_error()
            });
            let _ = tx.send(Action::Geocoded { request, result });
        });
    }

    fn spawn_locate(&self, request: RequestId) {
        let tx = self.tx.clone();
        let locator = self.locator.clone();

        tokio::spawn(async move {
            let result = locator.current_location().await.map_err(|e| {
                tracing::warn!("Location lookup failed: {}", e);
                e.into_app_error()
            });
            let _ = tx.send(Action::Located { request, result });
        });
    }

    fn spawn_forecast(&self, request: RequestId, place_name: String, latitude: f64, longitude: f64) {
        let tx = self.tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client
                .fetch_forecast(latitude, longitude)
                .await
                .map_err(|e| {
                    tracing::warn!("Forecast for {} failed: {}", place_name, e);
                    e.into_app_error()
                });
            let _ = tx.send(Action::ForecastLoaded {
                request,
                place_name,
                result,
            });
        });
    }
}
