use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// One entry of the slide deck. Opaque to the carousel: only the label is
/// ever interpreted, and only for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Slide {
    /// Short name used when reporting which slide is active.
    pub label: String,
    /// Optional asset backing the slide; never opened by the engine itself.
    #[serde(default)]
    pub asset: Option<PathBuf>,
}

impl Slide {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            asset: None,
        }
    }
}

/// Identifies the two page nodes the menu controller is bound to.
///
/// The ids are opaque labels in a headless run; their presence is what
/// matters. An absent `menu` section disables the controller entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MenuOptions {
    pub toggle_id: String,
    pub menu_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Ordered slide deck. May be empty, which disables the carousel.
    pub slides: Vec<Slide>,
    /// Time between automatic advances.
    #[serde(with = "humantime_serde")]
    pub advance_interval: Duration,
    /// Length of the eased slide transition on an animated render.
    #[serde(with = "humantime_serde")]
    pub transition_duration: Duration,
    /// Dropdown menu binding; omit to run without a menu.
    pub menu: Option<MenuOptions>,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("reading configuration from {}", path.as_ref().display())
        })?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    ///
    /// An empty slide deck is deliberately not an error here; it downgrades
    /// the carousel to a no-op at wiring time.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.advance_interval > Duration::ZERO,
            "advance-interval must be positive"
        );
        ensure!(
            self.transition_duration > Duration::ZERO,
            "transition-duration must be positive"
        );
        ensure!(
            self.transition_duration < self.advance_interval,
            "transition-duration must be shorter than advance-interval"
        );
        if let Some(menu) = &self.menu {
            ensure!(!menu.toggle_id.is_empty(), "menu.toggle-id must not be empty");
            ensure!(!menu.menu_id.is_empty(), "menu.menu-id must not be empty");
        }
        Ok(self)
    }

    const fn default_advance_interval() -> Duration {
        Duration::from_secs(3)
    }

    const fn default_transition_duration() -> Duration {
        Duration::from_millis(500)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            advance_interval: Self::default_advance_interval(),
            transition_duration: Self::default_transition_duration(),
            menu: None,
        }
    }
}
