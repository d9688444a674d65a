use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FanbrickError, Result, ValidationError};
use crate::model::{
    Brick, Club, ColorToken, Position, AI_QUOTES, DEFAULT_AUTHOR_EMAIL, EMOTIONS, MAX_IMAGE_BYTES,
    MAX_MEMORY_CHARS,
};
use crate::wall::Wall;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use uuid::Builder;

/// What a visitor fills in on the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrickDraft {
    pub memory: String,
    pub color: ColorToken,
    pub club: Option<Club>,
    pub image_ref: Option<String>,
    pub author_email: Option<String>,
    pub tags: Vec<String>,
}

impl BrickDraft {
    pub fn new(memory: impl Into<String>) -> Self {
        Self {
            memory: memory.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn club(mut self, club: Club) -> Self {
        self.club = Some(club);
        self
    }

    pub fn image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn author(mut self, email: impl Into<String>) -> Self {
        self.author_email = Some(email.into());
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the form before anything is built. Length counts characters as typed.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.memory.trim().is_empty() {
            return Err(ValidationError::MemoryRequired);
        }
        if self.memory.chars().count() > MAX_MEMORY_CHARS {
            return Err(ValidationError::MemoryTooLong);
        }
        if !self.color.is_known() {
            return Err(ValidationError::UnknownColor);
        }
        Ok(())
    }
}

/// Size check done when an image is picked, before the form is submitted.
pub fn check_image_size(bytes: u64) -> std::result::Result<(), ValidationError> {
    if bytes > MAX_IMAGE_BYTES {
        Err(ValidationError::ImageTooLarge)
    } else {
        Ok(())
    }
}

/// Picks a local image file for a draft, rejecting files over 5 MiB.
/// Returns the reference to store on the brick.
pub fn select_image(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path).map_err(FanbrickError::Io)?;
    check_image_size(meta.len())?;
    let absolute = path.canonicalize().map_err(FanbrickError::Io)?;
    Ok(absolute.display().to_string())
}

fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

/// Validates `draft` and builds the brick it describes.
///
/// Id, position, quote and emotion all come from `rng`; the quote and emotion
/// are picked uniformly and have nothing to do with the memory text.
pub fn build_brick<R: Rng + ?Sized>(
    draft: &BrickDraft,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Brick> {
    draft.validate()?;

    let id = Builder::from_random_bytes(rng.gen()).into_uuid();
    let position = Position::random(rng);
    let ai_quote = AI_QUOTES.choose(rng).map(|q| q.to_string());
    let emotion = EMOTIONS.choose(rng).map(|e| e.to_string());

    Ok(Brick {
        id: id.to_string(),
        author_email: draft
            .author_email
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
        memory: draft.memory.trim().to_string(),
        image_ref: draft.image_ref.clone().filter(|r| !r.is_empty()),
        color: draft.color.clone(),
        club: draft.club.clone(),
        position,
        ai_quote,
        emotion,
        created_at: now,
        is_favorite: false,
        tags: normalize_tags(&draft.tags),
        view_count: 0,
    })
}

pub fn run<R: Rng + ?Sized>(
    wall: &Wall,
    draft: &BrickDraft,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let brick = build_brick(draft, rng, now)?;
    let next = wall.with_brick(brick.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Brick placed ({}): {}",
        next.len(),
        brick.memory
    )));
    Ok(result.with_affected_bricks(vec![brick]).with_next_wall(next))
}
