use crate::model::question::{Question, QuestionType};

//
// ─── MEDIA CORE TYPES ──────────────────────────────────────────────────────────
//

/// Fixed box that video players are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectBox {
    pub width: u32,
    pub height: u32,
}

impl AspectBox {
    pub const WIDESCREEN: AspectBox = AspectBox {
        width: 16,
        height: 9,
    };

    /// Height as a percentage of width, for padding-based responsive boxes.
    #[must_use]
    pub fn padding_percent(self) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        self.height as f32 * 100.0 / self.width as f32
    }
}

/// Something the question view knows how to render next to the text.
///
/// Sources are passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderableMedia {
    Audio { src: String },
    Video { src: String, aspect: AspectBox },
    Photo { src: String },
}

impl RenderableMedia {
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            RenderableMedia::Audio { src }
            | RenderableMedia::Video { src, .. }
            | RenderableMedia::Photo { src } => src,
        }
    }
}

//
// ─── RESOLUTION ────────────────────────────────────────────────────────────────
//

/// Resolve the media attached to a question.
///
/// A declared media type without its file yields `None`; missing media never
/// blocks the question from being displayed.
#[must_use]
pub fn resolve(question: &Question) -> Option<RenderableMedia> {
    match question.question_type {
        QuestionType::Audio => {
            present(question.audio_file.as_deref()).map(|src| RenderableMedia::Audio { src })
        }
        QuestionType::Video => {
            present(question.video_file.as_deref()).map(|src| RenderableMedia::Video {
                src,
                aspect: AspectBox::WIDESCREEN,
            })
        }
        QuestionType::Photo => {
            present(question.photo_file.as_deref()).map(|src| RenderableMedia::Photo { src })
        }
        QuestionType::None | QuestionType::Other(_) => None,
    }
}

// File fields come back as "" when cleared server-side.
fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(str::to_string)
}
