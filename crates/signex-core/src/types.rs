//! # Domain Types
//!
//! The fixed records the site is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TeamMember    │   │    FaqEntry     │   │   Certificate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  question       │   │  title          │       │
//! │  │  position       │   │  answer         │   │  file_name      │       │
//! │  │  expertise[]    │   └─────────────────┘   │  icon           │       │
//! │  │  image_side     │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  ServiceChoice  │   │   ProductLine   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  6 fixed labels │   │  features[]     │                             │
//! │  │  (form select)  │   │  images[]       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record is defined once in [`crate::content`] and lives for the
//! whole page session. Nothing here is mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Side
// =============================================================================

/// Horizontal side, used for image layout and slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// CSS-friendly name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The other side.
    pub const fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// =============================================================================
// Team Member
// =============================================================================

/// A leadership profile shown in the About page carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    /// Role shown under the name.
    pub position: &'static str,
    /// Portrait path under the public image directory.
    pub image: &'static str,
    pub bio: &'static str,
    /// Areas of expertise, in display order.
    pub expertise: &'static [&'static str],
    /// Which side the portrait is laid out on.
    pub image_side: Side,
}

// =============================================================================
// FAQ Entry
// =============================================================================

/// A question/answer pair for the Contact page accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

// =============================================================================
// Certificate
// =============================================================================

/// A downloadable certification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// File name under the certificate prefix; also the suggested save name.
    pub file_name: &'static str,
    /// Emoji glyph shown on the card.
    pub icon: &'static str,
}

// =============================================================================
// Service Choice
// =============================================================================

/// The services a visitor can ask about in the contact form.
///
/// Serialized as the human label so a backend receives exactly what the
/// `<select>` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceChoice {
    #[default]
    #[serde(rename = "Road Sign Boards")]
    RoadSignBoards,
    #[serde(rename = "Highway Furniture")]
    HighwayFurniture,
    #[serde(rename = "Metal Beam Crash Barriers")]
    MetalBeamCrashBarriers,
    #[serde(rename = "Installation Services")]
    InstallationServices,
    #[serde(rename = "Maintenance & Repair")]
    MaintenanceRepair,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceChoice {
    /// All choices in `<select>` order.
    pub const ALL: [ServiceChoice; 6] = [
        ServiceChoice::RoadSignBoards,
        ServiceChoice::HighwayFurniture,
        ServiceChoice::MetalBeamCrashBarriers,
        ServiceChoice::InstallationServices,
        ServiceChoice::MaintenanceRepair,
        ServiceChoice::Other,
    ];

    /// Display label, also used as the `<option>` value.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceChoice::RoadSignBoards => "Road Sign Boards",
            ServiceChoice::HighwayFurniture => "Highway Furniture",
            ServiceChoice::MetalBeamCrashBarriers => "Metal Beam Crash Barriers",
            ServiceChoice::InstallationServices => "Installation Services",
            ServiceChoice::MaintenanceRepair => "Maintenance & Repair",
            ServiceChoice::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ServiceChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| CoreError::UnknownService(s.to_string()))
    }
}

// =============================================================================
// Service Cards & Product Lines
// =============================================================================

/// A short service teaser shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTeaser {
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data for the card icon.
    pub icon_path: &'static str,
}

/// An image reference with alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A product family described on the Services page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLine {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub images: &'static [ImageRef],
}

/// A supporting service (installation, maintenance, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportService {
    pub title: &'static str,
    pub description: &'static str,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_choice_default() {
        assert_eq!(ServiceChoice::default(), ServiceChoice::RoadSignBoards);
    }

    #[test]
    fn test_service_choice_parses_every_label() {
        for choice in ServiceChoice::ALL {
            assert_eq!(choice.label().parse::<ServiceChoice>(), Ok(choice));
        }
    }

    #[test]
    fn test_service_choice_rejects_unknown_label() {
        let err = "Road Paint".parse::<ServiceChoice>().unwrap_err();
        assert_eq!(err, CoreError::UnknownService("Road Paint".to_string()));
    }

    #[test]
    fn test_service_choice_serializes_as_label() {
        let json = serde_json::to_string(&ServiceChoice::MaintenanceRepair).unwrap();
        assert_eq!(json, "\"Maintenance & Repair\"");
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.as_str(), "right");
    }
}
