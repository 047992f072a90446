//! Status lookup tables
//!
//! Every closed enumeration shown as a badge (request status/priority,
//! preorder status, payment status, payment method) implements
//! [`StatusTable`]: one row per variant with its wire code, label, tone and
//! icon. Values read from outside that are not in the table are kept as
//! [`Coded::Unknown`] and rendered as a neutral pass-through label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Neutral,
}

impl Tone {
    /// CSS modifier used by `.status-badge`
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "status-badge status-badge--success",
            Tone::Warning => "status-badge status-badge--warning",
            Tone::Danger => "status-badge status-badge--danger",
            Tone::Info => "status-badge status-badge--info",
            Tone::Accent => "status-badge status-badge--accent",
            Tone::Neutral => "status-badge status-badge--neutral",
        }
    }
}

/// One row of a status table
#[derive(Debug)]
pub struct StatusEntry<S: 'static> {
    pub status: S,
    pub code: &'static str,
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

/// Closed enumeration backed by a presentation table
pub trait StatusTable: Copy + Eq + fmt::Debug + 'static {
    const TABLE: &'static [StatusEntry<Self>];

    /// Icon used when a value is not in the table
    const FALLBACK_ICON: &'static str = "clock";

    fn entry(self) -> Option<&'static StatusEntry<Self>> {
        Self::TABLE.iter().find(|e| e.status == self)
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::TABLE.iter().find(|e| e.code == code).map(|e| e.status)
    }
}

/// A status value as stored on a record: either a known variant or the raw
/// code that came in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coded<S: StatusTable> {
    Known(S),
    Unknown(String),
}

impl<S: StatusTable> Coded<S> {
    pub fn parse(code: &str) -> Self {
        match S::from_code(code) {
            Some(status) => Coded::Known(status),
            None => Coded::Unknown(code.to_string()),
        }
    }

    pub fn known(&self) -> Option<S> {
        match self {
            Coded::Known(s) => Some(*s),
            Coded::Unknown(_) => None,
        }
    }

    pub fn is(&self, status: S) -> bool {
        self.known() == Some(status)
    }

    pub fn code(&self) -> &str {
        match self {
            Coded::Known(s) => s.entry().map_or("", |e| e.code),
            Coded::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Coded::Known(s) => s.entry().map_or("", |e| e.label),
            Coded::Unknown(raw) => raw,
        }
    }

    pub fn tone(&self) -> Tone {
        self.known()
            .and_then(|s| s.entry())
            .map_or(Tone::Neutral, |e| e.tone)
    }

    pub fn icon(&self) -> &'static str {
        self.known()
            .and_then(|s| s.entry())
            .map_or(S::FALLBACK_ICON, |e| e.icon)
    }
}

impl<S: StatusTable> From<S> for Coded<S> {
    fn from(status: S) -> Self {
        Coded::Known(status)
    }
}

impl<S: StatusTable> fmt::Display for Coded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<S: StatusTable> Serialize for Coded<S> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de, S: StatusTable> Deserialize<'de> for Coded<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Coded::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Green,
        Red,
    }

    impl StatusTable for Light {
        const TABLE: &'static [StatusEntry<Self>] = &[
            StatusEntry { status: Light::Green, code: "green", label: "Verde", tone: Tone::Success, icon: "check-circle" },
            StatusEntry { status: Light::Red, code: "red", label: "Rojo", tone: Tone::Danger, icon: "x-circle" },
        ];
    }

    #[test]
    fn test_known_code_uses_table_row() {
        let v: Coded<Light> = Coded::parse("red");
        assert_eq!(v, Coded::Known(Light::Red));
        assert_eq!(v.label(), "Rojo");
        assert_eq!(v.tone(), Tone::Danger);
        assert_eq!(v.icon(), "x-circle");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let v: Coded<Light> = Coded::parse("amber");
        assert_eq!(v.code(), "amber");
        assert_eq!(v.label(), "amber");
        assert_eq!(v.tone(), Tone::Neutral);
        assert_eq!(v.icon(), "clock");
        assert_eq!(v.to_string(), "amber");
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&Coded::from(Light::Green)).unwrap();
        assert_eq!(json, "\"green\"");

        let back: Coded<Light> = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(back, Coded::Unknown("purple".to_string()));
    }
}
