use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/homenav)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// Root for per-session state ($XDG_RUNTIME_DIR/homenav, or the temp dir)
    pub session_root: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Panics
    ///
    /// Panics if the system's project directories cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let project =
            ProjectDirs::from("", "", "homenav").expect("Failed to determine project directories");

        let config = project.config_dir().to_path_buf();
        let session_root = project
            .runtime_dir()
            .map_or_else(Self::fallback_session_root, std::path::Path::to_path_buf);

        Self {
            config_file: config.join("config.json"),
            config,
            session_root,
        }
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            session_root: base.join("sessions"),
            config: base,
        }
    }

    /// Session state lives in the temp dir when no runtime dir is available
    fn fallback_session_root() -> PathBuf {
        std::env::temp_dir().join("homenav")
    }

    /// Directory holding the state of one session.
    #[must_use]
    pub fn session_dir(&self, session_id: &str) -> PathBuf {
        self.session_root.join(session_id)
    }

    /// Ensure the config directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        Ok(())
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
