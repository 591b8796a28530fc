//! Session configuration parsed from the launch parameters.
//!
//! The serialized history itself is decoded upstream; what reaches this crate
//! is the viewer seat number and the hide flag, both as raw parameter strings.

use game_board::Seat;

/// Errors raised while building a [`ViewConfig`] from launch parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The viewer parameter is not a number.
    #[error("viewer parameter {value:?} is not a seat number")]
    UnparsableViewer { value: String },

    /// The viewer parameter names a seat that does not exist.
    #[error("viewer seat {index} outside the table range 0..=3")]
    ViewerOutOfRange { index: u8 },
}

/// Per-session view settings, immutable once the session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Seat whose perspective the view renders from.
    pub viewer: Seat,
    /// Initial state of the reveal toggle.
    pub reveal_hidden: bool,
}

impl ViewConfig {
    pub const fn new(viewer: Seat, reveal_hidden: bool) -> Self {
        Self {
            viewer,
            reveal_hidden,
        }
    }

    /// Builds the configuration from the `no` and `hide` launch parameters.
    ///
    /// Concealed tiles start revealed unless `hide` is exactly `"1"`. That
    /// default leaks hidden information and reads like a debug affordance,
    /// but it is the documented behavior and is kept as-is pending product
    /// review.
    pub fn from_params(no: &str, hide: Option<&str>) -> Result<Self, ConfigError> {
        let index: u8 = no
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnparsableViewer {
                value: no.to_owned(),
            })?;
        let viewer = Seat::new(index).map_err(|_| ConfigError::ViewerOutOfRange { index })?;

        Ok(Self {
            viewer,
            reveal_hidden: hide != Some("1"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_viewer_and_hide_flag() {
        let config = ViewConfig::from_params("2", Some("1")).unwrap();
        assert_eq!(config.viewer, Seat::new(2).unwrap());
        assert!(!config.reveal_hidden);
    }

    #[test]
    fn reveals_unless_hide_is_exactly_one() {
        assert!(ViewConfig::from_params("0", None).unwrap().reveal_hidden);
        assert!(ViewConfig::from_params("0", Some("")).unwrap().reveal_hidden);
        assert!(ViewConfig::from_params("0", Some("true")).unwrap().reveal_hidden);
        assert!(ViewConfig::from_params("0", Some("01")).unwrap().reveal_hidden);
        assert!(!ViewConfig::from_params("0", Some("1")).unwrap().reveal_hidden);
    }

    #[test]
    fn rejects_bad_viewer_parameters() {
        assert!(matches!(
            ViewConfig::from_params("abc", None),
            Err(ConfigError::UnparsableViewer { .. })
        ));
        assert_eq!(
            ViewConfig::from_params("4", None),
            Err(ConfigError::ViewerOutOfRange { index: 4 })
        );
    }
}
