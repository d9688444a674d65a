//! Core data types: the [`Brick`] record and the fixed vocabularies it draws from.
//!
//! Bricks serialize with the camelCase keys of the original browser storage entry
//! (`userEmail`, `imageUrl`, `createdAt`, ...) so an existing wall loads unchanged.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const MAX_MEMORY_CHARS: usize = 200;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const X_RANGE: RangeInclusive<u8> = 1..=8;
pub const Y_RANGE: RangeInclusive<u8> = 1..=10;

/// Canned quotes attached to new bricks. Not derived from the memory text.
pub const AI_QUOTES: [&str; 5] = [
    "Every memory is a victory in the heart.",
    "Football is not just a game, it's a feeling.",
    "In every stadium, legends are born.",
    "The beautiful game creates beautiful memories.",
    "Where passion meets the pitch, magic happens.",
];

/// Canned emotion labels attached to new bricks.
pub const EMOTIONS: [&str; 5] = ["joy", "nostalgia", "pride", "excitement", "love"];

pub const DEFAULT_AUTHOR_EMAIL: &str = "fan@example.com";

/// Style token for a brick's background.
///
/// Only the six named tokens can be chosen at submission; anything else read
/// back from storage is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorToken {
    #[default]
    Primary,
    Secondary,
    Accent,
    Highlight,
    Muted,
    Card,
    Other(String),
}

impl ColorToken {
    pub const ALL: [ColorToken; 6] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Highlight,
        ColorToken::Muted,
        ColorToken::Card,
    ];

    pub fn token(&self) -> &str {
        match self {
            ColorToken::Primary => "bg-brick-primary",
            ColorToken::Secondary => "bg-brick-secondary",
            ColorToken::Accent => "bg-brick-accent",
            ColorToken::Highlight => "bg-brick-highlight",
            ColorToken::Muted => "bg-brick-muted",
            ColorToken::Card => "bg-card",
            ColorToken::Other(raw) => raw,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColorToken::Primary => "Primary",
            ColorToken::Secondary => "Secondary",
            ColorToken::Accent => "Accent",
            ColorToken::Highlight => "Highlight",
            ColorToken::Muted => "Muted",
            ColorToken::Card => "Card",
            ColorToken::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ColorToken::Other(_))
    }
}

impl From<String> for ColorToken {
    fn from(raw: String) -> Self {
        ColorToken::ALL
            .into_iter()
            .find(|c| c.token() == raw)
            .unwrap_or(ColorToken::Other(raw))
    }
}

impl From<ColorToken> for String {
    fn from(color: ColorToken) -> Self {
        color.token().to_string()
    }
}

impl FromStr for ColorToken {
    type Err = String;

    /// Accepts either the display name ("accent") or the raw token ("bg-brick-accent").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.token() == s)
            .ok_or_else(|| {
                let names: Vec<String> = ColorToken::ALL
                    .into_iter()
                    .map(|c| c.name().to_lowercase())
                    .collect();
                format!("Unknown color '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supporter club of a brick's author.
///
/// The CLI only accepts the fifteen listed names. Any other name read back
/// from storage is kept verbatim as `Unlisted` so one odd entry cannot make the
/// wall unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Club {
    RealMadrid,
    Barcelona,
    Liverpool,
    ManchesterUnited,
    BayernMunich,
    Juventus,
    ParisSaintGermain,
    Chelsea,
    Arsenal,
    ManchesterCity,
    AcMilan,
    InterMilan,
    BorussiaDortmund,
    AtleticoMadrid,
    Other,
    Unlisted(String),
}

impl Club {
    pub const ALL: [Club; 15] = [
        Club::RealMadrid,
        Club::Barcelona,
        Club::Liverpool,
        Club::ManchesterUnited,
        Club::BayernMunich,
        Club::Juventus,
        Club::ParisSaintGermain,
        Club::Chelsea,
        Club::Arsenal,
        Club::ManchesterCity,
        Club::AcMilan,
        Club::InterMilan,
        Club::BorussiaDortmund,
        Club::AtleticoMadrid,
        Club::Other,
    ];

    pub fn name(&self) -> &str {
        match self {
            Club::RealMadrid => "Real Madrid",
            Club::Barcelona => "FC Barcelona",
            Club::Liverpool => "Liverpool FC",
            Club::ManchesterUnited => "Manchester United",
            Club::BayernMunich => "Bayern Munich",
            Club::Juventus => "Juventus",
            Club::ParisSaintGermain => "Paris Saint-Germain",
            Club::Chelsea => "Chelsea FC",
            Club::Arsenal => "Arsenal FC",
            Club::ManchesterCity => "Manchester City",
            Club::AcMilan => "AC Milan",
            Club::InterMilan => "Inter Milan",
            Club::BorussiaDortmund => "Borussia Dortmund",
            Club::AtleticoMadrid => "Atletico Madrid",
            Club::Other => "Other",
            Club::Unlisted(raw) => raw,
        }
    }
}

impl FromStr for Club {
    type Err = String;

    /// Strict: only the listed names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Club::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown club: {}", s))
    }
}

impl From<String> for Club {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(Club::Unlisted(raw))
    }
}

impl From<Club> for String {
    fn from(club: Club) -> Self {
        club.name().to_string()
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid coordinates used only for visual variety. Overlaps are expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(X_RANGE),
            y: rng.gen_range(Y_RANGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brick {
    pub id: String,
    #[serde(rename = "userEmail")]
    pub author_email: String,
    pub memory: String,
    #[serde(
        rename = "imageUrl",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_ref: Option<String>,
    pub color: ColorToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<Club>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub view_count: u32,
}

impl Brick {
    /// The part of the author's email shown on the wall (everything before `@`).
    pub fn author_name(&self) -> &str {
        self.author_email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(&self.author_email)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// The three bricks a fresh wall starts with, dated one to three days before `now`.
pub fn demo_bricks(now: DateTime<Utc>) -> Vec<Brick> {
    #[allow(clippy::too_many_arguments)]
    fn demo(
        id: &str,
        email: &str,
        memory: &str,
        club: Club,
        x: u8,
        quote: &str,
        emotion: &str,
        created_at: DateTime<Utc>,
        is_favorite: bool,
        tags: [&str; 2],
        view_count: u32,
    ) -> Brick {
        Brick {
            id: id.to_string(),
            author_email: email.to_string(),
            memory: memory.to_string(),
            image_ref: None,
            color: ColorToken::Primary,
            club: Some(club),
            position: Position { x, y: 1 },
            ai_quote: Some(quote.to_string()),
            emotion: Some(emotion.to_string()),
            created_at,
            is_favorite,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            view_count,
        }
    }

    vec![
        demo(
            "1",
            "legend@madrid.com",
            "Watching Ronaldo's bicycle kick against Juventus - pure magic! Still gives me goosebumps.",
            Club::RealMadrid,
            1,
            "Football is poetry in motion.",
            "joy",
            now - Duration::days(1),
            true,
            ["legendary", "champions-league"],
            15,
        ),
        demo(
            "2",
            "kop@liverpool.com",
            "You'll Never Walk Alone echoing through Anfield on European nights. Nothing compares.",
            Club::Liverpool,
            2,
            "In every stadium, legends are born.",
            "pride",
            now - Duration::days(2),
            false,
            ["anfield", "ynwa"],
            8,
        ),
        demo(
            "3",
            "barca@fan.com",
            "Messi's last dance at Camp Nou. Tears of joy and sadness mixed together.",
            Club::Barcelona,
            3,
            "Every memory is a victory in the heart.",
            "nostalgia",
            now - Duration::days(3),
            false,
            ["messi", "farewell"],
            12,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_name_strips_domain() {
        let brick = demo_bricks(Utc::now()).remove(0);
        assert_eq!(brick.author_name(), "legend");
    }

    #[test]
    fn author_name_without_at_is_whole_address() {
        let mut brick = demo_bricks(Utc::now()).remove(0);
        brick.author_email = "anonymous".into();
        assert_eq!(brick.author_name(), "anonymous");
    }

    #[test]
    fn color_parses_name_or_token() {
        assert_eq!("accent".parse::<ColorToken>().unwrap(), ColorToken::Accent);
        assert_eq!("bg-card".parse::<ColorToken>().unwrap(), ColorToken::Card);
        assert!("bg-team-red".parse::<ColorToken>().is_err());
    }

    #[test]
    fn unknown_stored_color_is_preserved() {
        let color = ColorToken::from("bg-team-red".to_string());
        assert_eq!(color, ColorToken::Other("bg-team-red".into()));
        assert!(!color.is_known());
        assert_eq!(String::from(color), "bg-team-red");
    }

    #[test]
    fn club_parses_case_insensitively() {
        assert_eq!("liverpool fc".parse::<Club>().unwrap(), Club::Liverpool);
        assert_eq!("Other".parse::<Club>().unwrap(), Club::Other);
        assert!("Liverpool".parse::<Club>().is_err());
    }

    #[test]
    fn unlisted_stored_club_is_preserved() {
        let club = Club::from("Wrexham AFC".to_string());
        assert_eq!(club, Club::Unlisted("Wrexham AFC".into()));
        assert_eq!(String::from(club), "Wrexham AFC");
        assert_eq!(Club::from("liverpool fc".to_string()), Club::Liverpool);
    }

    #[test]
    fn brick_json_uses_storage_keys() {
        let brick = demo_bricks(Utc::now()).remove(0);
        let json = serde_json::to_value(&brick).unwrap();
        assert_eq!(json["userEmail"], "legend@madrid.com");
        assert_eq!(json["club"], "Real Madrid");
        assert_eq!(json["color"], "bg-brick-primary");
        assert_eq!(json["x"], 1);
        assert_eq!(json["isFavorite"], true);
        assert_eq!(json["viewCount"], 15);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn sparse_entry_fills_defaults() {
        let raw = r#"{
            "id": "42",
            "userEmail": "fan@example.com",
            "memory": "First match",
            "imageUrl": "",
            "color": "bg-brick-muted",
            "x": 4,
            "y": 9,
            "createdAt": "2024-05-01T18:30:00.000Z"
        }"#;
        let brick: Brick = serde_json::from_str(raw).unwrap();
        assert_eq!(brick.image_ref, None);
        assert_eq!(brick.color, ColorToken::Muted);
        assert_eq!(brick.position, Position { x: 4, y: 9 });
        assert!(!brick.is_favorite);
        assert!(brick.tags.is_empty());
        assert_eq!(brick.view_count, 0);
        assert_eq!(
            brick.created_at,
            "2024-05-01T18:30:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
