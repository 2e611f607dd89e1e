//! Prompt construction for each generation step.
//!
//! Each builder returns a [`Prompt`]: a system/user message pair plus the
//! sampling parameters used for that step. The user message ends with a
//! line-oriented output format that [`crate::parsing`] knows how to read.

use crate::content::GenerationKind;
use crate::error::CoreError;
use crate::language::Language;

/// Default completion budget.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Scripts are longer than the other outputs.
pub const SCRIPT_MAX_TOKENS: u32 = 3000;

/// Number of title candidates requested per topic.
pub const TITLE_COUNT: usize = 5;

/// Number of thumbnail suggestions requested per title.
pub const THUMBNAIL_COUNT: usize = 3;

/// Default script length when a client does not specify one.
pub const DEFAULT_VIDEO_LENGTH_MINUTES: u32 = 5;

/// Longest script length accepted.
pub const MAX_VIDEO_LENGTH_MINUTES: u32 = 60;

/// A fully rendered prompt, ready to be sent to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: GenerationKind,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Language-specific prompt fragments.
struct Templates {
    system: &'static str,
    titles: &'static str,
    description: &'static str,
    script: &'static str,
    thumbnail: &'static str,
    topic_label: &'static str,
    title_label: &'static str,
    length_label: &'static str,
    minutes: &'static str,
    titles_format: &'static str,
    description_format: &'static str,
    script_format: &'static str,
    thumbnail_format: &'static str,
}

const EN: Templates = Templates {
    system: "You are an expert AI assistant for YouTube content creators. Generate content in English.",
    titles: "Generate 5 SEO-optimized YouTube video titles. Each title should be 50-70 characters, catchy and clickable.",
    description: "Generate a descriptive paragraph (2-3 sentences) and 10-15 hashtags for the given title.",
    script: "Generate a structured video script for the given title. Include a hook (15-30 seconds), main sections, and an outro.",
    thumbnail: "Generate 3 short text suggestions (2-5 words) for thumbnail design based on the given title.",
    topic_label: "Topic",
    title_label: "Title",
    length_label: "Video length",
    minutes: "minutes",
    titles_format: "Return only the 5 titles as a list, one title per line.",
    description_format: "Output format:\nDESCRIPTION: [2-3 sentence description]\nHASHTAGS: #tag1 #tag2 #tag3...",
    script_format: "Output format:\nHOOK: [15-30 seconds]\nSECTION1: [title] - [content]\nSECTION2: [title] - [content]\nSECTION3: [title] - [content]\nOUTRO: [with a call to action]",
    thumbnail_format: "Return only 3 short text suggestions, one per line (2-5 words).",
};

const TR: Templates = Templates {
    system: "Sen YouTube içerik üreticileri için uzman bir AI asistanısın. Türkçe içerik üreteceksin.",
    titles: "YouTube videosu için 5 adet SEO-optimized başlık üret. Her başlık 50-70 karakter arası olmalı, dikkat çekici ve tıklanabilir olmalı.",
    description: "Verilen başlık için 2-3 cümlelik açıklayıcı paragraf ve 10-15 adet hashtag üret.",
    script: "Verilen başlık için yapılandırılmış video senaryosu üret. Hook (15-30 saniye), ana bölümler ve outro içermeli.",
    thumbnail: "Verilen başlık için thumbnail'da kullanılabilecek 3 adet kısa metin önerisi (2-5 kelime) üret.",
    topic_label: "Konu",
    title_label: "Başlık",
    length_label: "Video Süresi",
    minutes: "dakika",
    titles_format: "Sadece 5 başlığı liste halinde ver, her satırda bir başlık.",
    description_format: "Çıktı formatı:\nAÇIKLAMA: [2-3 cümlelik açıklama]\nHASHTAGLAR: #tag1 #tag2 #tag3...",
    script_format: "Çıktı formatı:\nHOOK: [15-30 saniye]\nBÖLÜM1: [başlık] - [içerik]\nBÖLÜM2: [başlık] - [içerik]\nBÖLÜM3: [başlık] - [içerik]\nOUTRO: [call-to-action ile]",
    thumbnail_format: "Sadece 3 kısa metin önerisi ver, her satırda bir öneri (2-5 kelime).",
};

fn templates(language: Language) -> &'static Templates {
    match language {
        Language::En => &EN,
        Language::Tr => &TR,
    }
}

/// Prompt for title candidates on a topic.
pub fn titles_prompt(topic: &str, language: Language) -> Prompt {
    let t = templates(language);
    Prompt {
        kind: GenerationKind::Titles,
        system: t.system.to_string(),
        user: format!("{}\n\n{}: {topic}\n\n{}", t.titles, t.topic_label, t.titles_format),
        temperature: 0.7,
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

/// Prompt for a description paragraph and hashtags.
pub fn description_prompt(title: &str, language: Language) -> Prompt {
    let t = templates(language);
    Prompt {
        kind: GenerationKind::Description,
        system: t.system.to_string(),
        user: format!(
            "{}\n\n{}: {title}\n\n{}",
            t.description, t.title_label, t.description_format
        ),
        temperature: 0.8,
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

/// Prompt for a structured script of the given length.
pub fn script_prompt(title: &str, video_length_minutes: u32, language: Language) -> Prompt {
    let t = templates(language);
    Prompt {
        kind: GenerationKind::Script,
        system: t.system.to_string(),
        user: format!(
            "{}\n\n{}: {title}\n{}: {video_length_minutes} {}\n\n{}",
            t.script, t.title_label, t.length_label, t.minutes, t.script_format
        ),
        temperature: 0.7,
        max_tokens: SCRIPT_MAX_TOKENS,
    }
}

/// Prompt for short thumbnail overlay texts.
pub fn thumbnail_prompt(title: &str, language: Language) -> Prompt {
    let t = templates(language);
    Prompt {
        kind: GenerationKind::Thumbnail,
        system: t.system.to_string(),
        user: format!(
            "{}\n\n{}: {title}\n\n{}",
            t.thumbnail, t.title_label, t.thumbnail_format
        ),
        temperature: 0.9,
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

/// Resolve a requested script length, rejecting values outside `1..=60`.
pub fn validate_video_length(minutes: Option<u32>) -> Result<u32, CoreError> {
    let minutes = minutes.unwrap_or(DEFAULT_VIDEO_LENGTH_MINUTES);
    if minutes == 0 || minutes > MAX_VIDEO_LENGTH_MINUTES {
        return Err(CoreError::Validation(format!(
            "video_length_minutes must be between 1 and {MAX_VIDEO_LENGTH_MINUTES}, got {minutes}"
        )));
    }
    Ok(minutes)
}
