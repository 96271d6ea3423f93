//! User preferences for the cube puzzle.
//!
//! Preferences are stored as YAML. Loading layers the user's file on top of
//! the built-in defaults, so the user's file only needs to contain the keys
//! that differ.

use std::path::Path;

use cubepuzzle::{CubeParams, DEFAULT_FRAMES_PER_TWIST, TwistAnimation};
use eyre::{Result, bail};
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Puzzle dimensions.
    pub cube: CubePreferences,
    /// Twist animation settings.
    pub animation: AnimationPreferences,
}

/// Puzzle dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct CubePreferences {
    pub edge: f64,
    pub margin: f64,
}
impl Default for CubePreferences {
    fn default() -> Self {
        let CubeParams { edge, margin } = CubeParams::default();
        Self { edge, margin }
    }
}

/// Twist animation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Number of frames that each quarter turn is split into. Must be at
    /// least 1.
    pub frames_per_twist: u32,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            frames_per_twist: DEFAULT_FRAMES_PER_TWIST,
        }
    }
}

impl Preferences {
    /// Loads preferences from the built-in defaults overlaid with
    /// `user_file`, if one is given. If loading fails or the result is
    /// invalid, the error is logged and the default preferences are
    /// returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            Self::load_defaults().unwrap_or_default()
        })
    }

    /// Loads preferences from the built-in defaults overlaid with
    /// `user_file`, if one is given.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            log::debug!("loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        let prefs: Self = config.build()?.try_deserialize()?;
        prefs.validate()?;
        Ok(prefs)
    }

    fn load_defaults() -> Result<Self> {
        Ok(serde_norway::from_str(DEFAULT_PREFS_STR)?)
    }

    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        self.cube_params().validate()?;
        if self.animation.frames_per_twist == 0 {
            bail!("frames_per_twist must be at least 1");
        }
        Ok(())
    }

    /// Saves preferences to `path` as YAML, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the preferences as a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Returns the puzzle dimensions.
    pub fn cube_params(&self) -> CubeParams {
        CubeParams::new(self.cube.edge, self.cube.margin)
    }

    /// Returns the twist animation settings, or the defaults if
    /// `frames_per_twist` is zero.
    pub fn twist_animation(&self) -> TwistAnimation {
        TwistAnimation::with_frames(self.animation.frames_per_twist).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_prefs_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::load(None);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(Preferences::load_defaults().unwrap(), Preferences::default());
        assert_eq!(prefs.cube_params(), CubeParams::new(10.0, 1.5));
        assert_eq!(prefs.animation.frames_per_twist, 15);
        assert_eq!(prefs.twist_animation(), TwistAnimation::default());
    }

    #[test]
    fn test_user_file_overrides_keys() {
        let file = write_prefs_file("cube:\n  margin: 0.5\nanimation:\n  frames_per_twist: 4\n");
        let prefs = Preferences::try_load(Some(file.path())).unwrap();
        assert_eq!(prefs.cube.edge, 10.0);
        assert_eq!(prefs.cube.margin, 0.5);
        assert_eq!(prefs.twist_animation(), TwistAnimation::with_frames(4).unwrap());
    }

    #[test]
    fn test_invalid_user_file_falls_back() {
        let file = write_prefs_file("animation:\n  frames_per_twist: 0\n");
        assert!(Preferences::try_load(Some(file.path())).is_err());
        assert_eq!(Preferences::load(Some(file.path())), Preferences::default());

        let file = write_prefs_file("cube:\n  edge: -3.0\n");
        assert_eq!(Preferences::load(Some(file.path())), Preferences::default());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert_eq!(Preferences::load(Some(&missing)), Preferences::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = Preferences::default();
        prefs.cube.edge = 2.5;
        prefs.animation.frames_per_twist = 30;
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::try_load(Some(&path)).unwrap(), prefs);
        assert!(prefs.to_yaml().unwrap().contains("frames_per_twist: 30"));
    }
}
