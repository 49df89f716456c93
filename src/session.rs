use tracing::info;

/// Mock sign-in state for the navigation bar. No credentials are involved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn log_in(&mut self) {
        if !self.logged_in {
            info!("session logged in");
        }
        self.logged_in = true;
    }

    pub fn log_out(&mut self) {
        if self.logged_in {
            info!("session logged out");
        }
        self.logged_in = false;
    }
}
