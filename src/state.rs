use crate::config::Config;
use crate::journal::JournalStore;
use crate::profile::ProfileSettings;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<Mutex<JournalStore>>,
    pub profile: Arc<Mutex<ProfileSettings>>,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(journal: JournalStore, profile: ProfileSettings) -> Self {
        Self {
            journal: Arc::new(Mutex::new(journal)),
            profile: Arc::new(Mutex::new(profile)),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let journal = if config.seed_samples {
            JournalStore::with_samples()
        } else {
            JournalStore::new()
        };
        Self::new(journal, ProfileSettings::default())
    }

    pub async fn logged_in(&self) -> bool {
        self.session.lock().await.is_logged_in()
    }
}
