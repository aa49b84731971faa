use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Raised when a divider option is set to a value outside its declared
/// domain. Validation happens at the configuration boundary; the render
/// step only ever sees pre-validated values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value `{value}` for divider option `{option}`")]
pub struct InvalidConfigurationValue {
    pub option: &'static str,
    pub value: String,
}

impl InvalidConfigurationValue {
    fn new(option: &'static str, value: &str) -> Self {
        Self {
            option,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Option Domains
// ============================================================================

/// Orientation of the divider line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidConfigurationValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(InvalidConfigurationValue::new("direction", s)),
        }
    }
}

/// Horizontal alignment of the optional label along the divider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPosition {
    Left,
    #[default]
    Center,
    Right,
}

impl ContentPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPosition::Left => "left",
            ContentPosition::Center => "center",
            ContentPosition::Right => "right",
        }
    }
}

impl fmt::Display for ContentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentPosition {
    type Err = InvalidConfigurationValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(ContentPosition::Left),
            "center" => Ok(ContentPosition::Center),
            "right" => Ok(ContentPosition::Right),
            _ => Err(InvalidConfigurationValue::new("content_position", s)),
        }
    }
}

// ============================================================================
// Render Configuration
// ============================================================================

/// Transient per-render configuration of a divider. Constructed for one
/// render call and discarded; carries no identity or instance state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerConfig {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub content_position: ContentPosition,
}

impl DividerConfig {
    pub fn new(direction: Direction, content_position: ContentPosition) -> Self {
        Self {
            direction,
            content_position,
        }
    }

    /// Builds a configuration from raw option strings, e.g. values read
    /// from attributes or a configuration document. Absent options fall
    /// back to their defaults; present options must be in-domain.
    pub fn from_values(
        direction: Option<&str>,
        content_position: Option<&str>,
    ) -> Result<Self, InvalidConfigurationValue> {
        let direction = match direction {
            Some(raw) => raw.parse()?,
            None => Direction::default(),
        };
        let content_position = match content_position {
            Some(raw) => raw.parse()?,
            None => ContentPosition::default(),
        };
        Ok(Self::new(direction, content_position))
    }

    /// Class list of the root element. Stylesheets match on these names
    /// exactly, so they are part of the public contract.
    pub fn root_class(&self) -> String {
        format!("baza-xls-divider baza-xls-divider--{}", self.direction)
    }

    /// Class list of the label element, when one is rendered.
    pub fn label_class(&self) -> String {
        format!("baza-xls-divider__text is-{}", self.content_position)
    }

    /// Whether the label container is emitted at all. A vertical divider
    /// has no room to lay out a positioned label, so content is dropped
    /// rather than mis-rendered.
    pub fn shows_label(&self, has_content: bool) -> bool {
        has_content && self.direction != Direction::Vertical
    }
}

// ============================================================================
// Tests
// ============================================================================
