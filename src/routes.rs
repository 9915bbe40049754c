//! Routes
//!
//! Hash-based page routing (`#/login`, `#/tasks`, ...), so the bundle can be
//! served from any static host.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Picks tasks or login depending on the session
    Home,
    Login,
    Signup,
    Tasks,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Tasks => "/tasks",
        }
    }

    /// Parse `location.hash`. Unknown routes land on `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "/login" | "login" => Route::Login,
            "/signup" | "signup" => Route::Signup,
            "/tasks" | "tasks" => Route::Tasks,
            _ => Route::Home,
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Self::from_hash(&hash))
            .unwrap_or(Route::Home)
    }

    /// Point the address bar at this route.
    /// `replace` swaps the current history entry instead of pushing one.
    pub fn sync_location(&self, replace: bool) {
        let Some(window) = web_sys::window() else { return };
        let location = window.location();
        let hash = format!("#{}", self.path());
        if location.hash().ok().as_deref() == Some(hash.as_str()) {
            return;
        }
        let result = if replace {
            location.replace(&hash)
        } else {
            location.set_hash(&hash)
        };
        if result.is_err() {
            log::warn!("failed to update location to {}", hash);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_back() {
        for route in [Route::Home, Route::Login, Route::Signup, Route::Tasks] {
            assert_eq!(Route::from_hash(&format!("#{}", route.path())), route);
        }
    }

    #[test]
    fn test_loose_hashes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/tasks/"), Route::Tasks);
        assert_eq!(Route::from_hash("#login"), Route::Login);
        assert_eq!(Route::from_hash("#/signup?next=tasks"), Route::Signup);
    }

    #[test]
    fn test_unknown_routes_go_home() {
        assert_eq!(Route::from_hash("#/admin"), Route::Home);
        assert_eq!(Route::from_hash("#/tasks/7"), Route::Home);
    }
}
