//! Application directory: the registry of navigable applications.
//!
//! The directory owns the application list and the current selection. The
//! home menu controller only reads from it and commands selections.

use crate::config::Config;
use crate::{Error, Result};
use homenav_types::Application;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Registry of applications and owner of navigation.
pub trait ApplicationDirectory {
    /// The application currently shown, if any.
    fn current_application(&self) -> Option<Application>;

    /// All applications in directory order.
    fn list_applications(&self) -> Vec<Application>;

    /// Navigate to `app`. The effect is observed through `current_application`.
    fn select_application(&mut self, app: &Application);

    /// Whether the directory has finished initializing.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<D: ApplicationDirectory + ?Sized> ApplicationDirectory for Box<D> {
    fn current_application(&self) -> Option<Application> {
        (**self).current_application()
    }

    fn list_applications(&self) -> Vec<Application> {
        (**self).list_applications()
    }

    fn select_application(&mut self, app: &Application) {
        (**self).select_application(app);
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// In-memory directory over a fixed, ordered application list.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    apps: Vec<Application>,
    current: Option<usize>,
    ready: bool,
}

impl StaticDirectory {
    /// Directory whose current application is the first one, if any.
    #[must_use]
    pub fn new(apps: Vec<Application>) -> Self {
        let current = if apps.is_empty() { None } else { Some(0) };
        Self {
            apps,
            current,
            ready: true,
        }
    }

    /// Directory that has not loaded yet: no current app and an empty list.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// Build from config, honoring `startApp`.
    ///
    /// # Errors
    ///
    /// Returns an error if two applications share an id or `startApp`
    /// names an application that is not configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut seen = HashSet::new();
        for app in &config.apps {
            if !seen.insert(app.id.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate application id: {}",
                    app.id
                )));
            }
        }

        let mut directory = Self::new(config.apps.clone());
        if let Some(start) = &config.start_app {
            let index = directory
                .position(start)
                .ok_or_else(|| Error::UnknownApplication(start.clone()))?;
            directory.current = Some(index);
        }
        Ok(directory)
    }

    /// Mark a pending directory as loaded with `apps`.
    pub fn load(&mut self, apps: Vec<Application>) {
        *self = Self::new(apps);
    }

    /// Drop the current selection, leaving the list intact.
    pub fn unselect(&mut self) {
        self.current = None;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.apps.iter().position(|app| app.id == id)
    }
}

impl ApplicationDirectory for StaticDirectory {
    fn current_application(&self) -> Option<Application> {
        if !self.ready {
            return None;
        }
        self.current.and_then(|i| self.apps.get(i)).cloned()
    }

    fn list_applications(&self) -> Vec<Application> {
        if !self.ready {
            return Vec::new();
        }
        self.apps.clone()
    }

    fn select_application(&mut self, app: &Application) {
        if !self.ready {
            debug!("Directory not ready, ignoring selection of '{}'", app.id);
            return;
        }
        match self.position(&app.id) {
            Some(index) => {
                debug!("Selected application '{}' ({})", app.name, app.action_id);
                self.current = Some(index);
            }
            None => warn!("Cannot select unknown application '{}'", app.id),
        }
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
