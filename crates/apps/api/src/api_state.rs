use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::database::Database;

#[derive(Clone)]
pub struct ApiContext {
    pub db: Database,
    pub settings: AppSettings,
}

impl ApiContext {
    #[must_use]
    pub fn media_base_url(&self) -> &str {
        &self.settings.api.media_base_url
    }
}

impl FromRef<ApiContext> for Database {
    fn from_ref(state: &ApiContext) -> Self {
        state.db.clone()
    }
}
