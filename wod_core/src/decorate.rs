//! Presentation decoration applied after timeline construction.
//!
//! Decoration is stateless: it reads the section list and returns a
//! decorated copy, leaving the timeline untouched.

use crate::{Error, Result, SourceKind, TimelineSection};
use serde::{Deserialize, Serialize};

/// Display role of a section
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    Warmup,
    Work,
    Rest,
    Cooldown,
}

impl SectionRole {
    /// Role of a section: main-block entries named "Rest" are rest periods
    pub fn of(section: &TimelineSection) -> Self {
        match section.source_kind {
            SourceKind::Warmup => SectionRole::Warmup,
            SourceKind::Cooldown => SectionRole::Cooldown,
            SourceKind::Main if section.name.eq_ignore_ascii_case("rest") => SectionRole::Rest,
            SourceKind::Main => SectionRole::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionRole::Warmup => "warm-up",
            SectionRole::Work => "work",
            SectionRole::Rest => "rest",
            SectionRole::Cooldown => "cool-down",
        }
    }
}

/// Colors per section role
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Palette {
    #[serde(default = "default_warmup_color")]
    pub warmup: String,

    #[serde(default = "default_work_color")]
    pub work: String,

    #[serde(default = "default_rest_color")]
    pub rest: String,

    #[serde(default = "default_cooldown_color")]
    pub cooldown: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            warmup: default_warmup_color(),
            work: default_work_color(),
            rest: default_rest_color(),
            cooldown: default_cooldown_color(),
        }
    }
}

fn default_warmup_color() -> String {
    "#f5a623".into()
}

fn default_work_color() -> String {
    "#d0021b".into()
}

fn default_rest_color() -> String {
    "#4a90e2".into()
}

fn default_cooldown_color() -> String {
    "#7ed321".into()
}

impl Palette {
    pub fn color_for(&self, role: SectionRole) -> &str {
        match role {
            SectionRole::Warmup => &self.warmup,
            SectionRole::Work => &self.work,
            SectionRole::Rest => &self.rest,
            SectionRole::Cooldown => &self.cooldown,
        }
    }

    /// Check every entry is a `#rrggbb` hex color
    pub fn validate(&self) -> Result<()> {
        for (role, color) in [
            ("warmup", &self.warmup),
            ("work", &self.work),
            ("rest", &self.rest),
            ("cooldown", &self.cooldown),
        ] {
            let valid = color.len() == 7
                && color.starts_with('#')
                && color[1..].chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(Error::Config(format!(
                    "palette color for '{}' is not #rrggbb: {}",
                    role, color
                )));
            }
        }
        Ok(())
    }
}

/// A timeline section with its display role and color
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DecoratedSection {
    pub section: TimelineSection,
    pub role: SectionRole,
    pub color: String,
}

/// Decorate a section list with roles and colors
pub fn decorate(sections: &[TimelineSection], palette: &Palette) -> Vec<DecoratedSection> {
    sections
        .iter()
        .map(|section| {
            let role = SectionRole::of(section);
            DecoratedSection {
                section: section.clone(),
                role,
                color: palette.color_for(role).to_string(),
            }
        })
        .collect()
}

/// Format seconds as `MM:SS` (minutes keep counting past 59)
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, kind: SourceKind) -> TimelineSection {
        TimelineSection {
            name: name.into(),
            effective_duration: 30,
            description: None,
            source_kind: kind,
            round_index: None,
            reps: None,
        }
    }

    #[test]
    fn test_roles() {
        assert_eq!(SectionRole::of(&section("Jog", SourceKind::Warmup)), SectionRole::Warmup);
        assert_eq!(SectionRole::of(&section("Squats", SourceKind::Main)), SectionRole::Work);
        assert_eq!(SectionRole::of(&section("Rest", SourceKind::Main)), SectionRole::Rest);
        assert_eq!(SectionRole::of(&section("REST", SourceKind::Main)), SectionRole::Rest);
        assert_eq!(SectionRole::of(&section("Rest", SourceKind::Cooldown)), SectionRole::Cooldown);
    }

    #[test]
    fn test_decorate_leaves_input_untouched() {
        let sections = vec![
            section("Jog", SourceKind::Warmup),
            section("Squats", SourceKind::Main),
            section("Rest", SourceKind::Main),
            section("Stretch", SourceKind::Cooldown),
        ];
        let before = sections.clone();

        let decorated = decorate(&sections, &Palette::default());
        assert_eq!(sections, before);
        assert_eq!(decorated.len(), 4);

        let colors: Vec<_> = decorated.iter().map(|d| d.color.as_str()).collect();
        assert_eq!(colors, vec!["#f5a623", "#d0021b", "#4a90e2", "#7ed321"]);
        assert_eq!(decorated[1].section, sections[1]);
    }

    #[test]
    fn test_palette_validation() {
        assert!(Palette::default().validate().is_ok());

        let palette = Palette {
            rest: "blue".into(),
            ..Palette::default()
        };
        assert!(matches!(palette.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3_600), "60:00");
    }
}
