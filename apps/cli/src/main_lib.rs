use std::sync::Arc;

use spendzen_connect::{
    AuthHandoff, BackendApi, BackendApiClient, GoalSyncService, StandInDashboardFeed,
    UserSyncService,
};
use spendzen_core::config::AppConfig;
use spendzen_core::stores::AppStores;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub config: AppConfig,
    pub stores: AppStores,
    pub api: Arc<dyn BackendApi>,
    pub dashboard_feed: StandInDashboardFeed,
}

impl AppState {
    pub fn user_service(&self) -> UserSyncService {
        UserSyncService::new(self.api.clone(), self.stores.user.clone())
    }

    pub fn goal_service(&self) -> GoalSyncService {
        GoalSyncService::new(
            self.api.clone(),
            self.stores.goals.clone(),
            self.stores.user.clone(),
        )
    }

    pub fn auth_handoff(&self) -> AuthHandoff {
        AuthHandoff::new(self.user_service(), self.stores.clone())
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("SPENDZEN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let api: Arc<dyn BackendApi> = Arc::new(BackendApiClient::from_config(&config)?);
    Ok(AppState {
        config,
        stores: AppStores::new(),
        api,
        dashboard_feed: StandInDashboardFeed,
    })
}
