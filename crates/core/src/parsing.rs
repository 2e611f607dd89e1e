//! Shaping of free-text provider output into step contracts.
//!
//! Providers are asked for a line-oriented format (see [`crate::prompts`])
//! but are free to deviate, so every parser has a fallback that still
//! yields a usable value.

use std::sync::LazyLock;

use regex::Regex;

use crate::content::{DescriptionContent, Script, ScriptSection};

/// One leading list marker: `1.`, `2)`, `-`, `*` or `•`.
static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+[.)]|[-*•])\s*").expect("list marker pattern is valid"));

const DESCRIPTION_MARKERS: [&str; 2] = ["DESCRIPTION:", "AÇIKLAMA:"];
const HASHTAG_MARKER: &str = "HASHTAG";
const SECTION_MARKERS: [&str; 2] = ["SECTION", "BÖLÜM"];
const HOOK_MARKER: &str = "HOOK:";
const OUTRO_MARKER: &str = "OUTRO:";

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

// ---------------------------------------------------------------------------
// Lists (titles, thumbnail texts)
// ---------------------------------------------------------------------------

/// Split a response into at most `max` list items, one per line.
///
/// A single leading numbering or bullet marker is removed, so numbers
/// that belong to the item (`2024 Best Recipes`) survive. Wrapping double
/// quotes are removed too. Lines left empty after stripping are skipped.
pub fn parse_numbered_list(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            let marker_len = LIST_MARKER_RE.find(line).map_or(0, |m| m.end());
            line[marker_len..].trim().trim_matches('"').trim()
        })
        .filter(|item| !item.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Description + hashtags
// ---------------------------------------------------------------------------

/// Extract the description paragraph and hashtags from a response.
///
/// The last line that looks like a hashtag line wins. If no description
/// marker is found the whole response is used; if no hashtag line yields
/// tags, every `#word` in the response is collected.
pub fn parse_description(text: &str) -> DescriptionContent {
    let mut description = String::new();
    let mut hashtags: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim) {
        if DESCRIPTION_MARKERS.iter().any(|m| line.starts_with(m)) {
            description = after_colon(line).to_string();
        } else if line.starts_with(HASHTAG_MARKER) || line.contains('#') {
            let tag_text = line.split_once(':').map_or(line, |(_, rest)| rest);
            hashtags = tag_text
                .split_whitespace()
                .filter(|token| token.starts_with('#'))
                .map(str::to_string)
                .collect();
        }
    }

    if description.is_empty() {
        description = text.trim().to_string();
    }
    if hashtags.is_empty() {
        hashtags = HASHTAG_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
    }

    DescriptionContent {
        description,
        hashtags,
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// Which script field unmarked continuation lines are appended to.
enum Cursor {
    None,
    Hook,
    Section,
    Outro,
}

/// Extract hook, sections and outro from a script response.
///
/// Section lines look like `SECTION1: Boil the water - Use a big pot`.
/// Continuation lines are appended to whichever field was opened last.
pub fn parse_script(text: &str) -> Script {
    let mut script = Script::default();
    let mut current: Option<ScriptSection> = None;
    let mut cursor = Cursor::None;

    for raw in text.lines() {
        let line = raw.trim().trim_start_matches('*').trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(HOOK_MARKER) {
            script.hook = clean_marker_value(after_colon(line));
            cursor = Cursor::Hook;
        } else if SECTION_MARKERS.iter().any(|m| line.starts_with(m)) {
            if let Some(section) = current.take() {
                script.sections.push(finish_section(section));
            }
            let (head, content) = line.split_once(" - ").unwrap_or((line, ""));
            current = Some(ScriptSection {
                title: clean_marker_value(after_colon(head)),
                content: content.trim().to_string(),
            });
            cursor = Cursor::Section;
        } else if line.starts_with(OUTRO_MARKER) {
            if let Some(section) = current.take() {
                script.sections.push(finish_section(section));
            }
            script.outro = clean_marker_value(after_colon(line));
            cursor = Cursor::Outro;
        } else {
            match cursor {
                Cursor::Hook => append_line(&mut script.hook, line),
                Cursor::Section => {
                    if let Some(section) = current.as_mut() {
                        append_line(&mut section.content, line);
                    }
                }
                Cursor::Outro => append_line(&mut script.outro, line),
                Cursor::None => {}
            }
        }
    }

    if let Some(section) = current.take() {
        script.sections.push(finish_section(section));
    }
    script
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Text after the first `:`, or the whole line when there is none.
fn after_colon(line: &str) -> &str {
    line.split_once(':').map_or(line, |(_, rest)| rest).trim()
}

/// Strip markdown emphasis left over around a marker value.
fn clean_marker_value(value: &str) -> String {
    value.trim_matches('*').trim().to_string()
}

fn append_line(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

fn finish_section(mut section: ScriptSection) -> ScriptSection {
    section.content = section.content.trim().to_string();
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_list_strips_markers_and_caps_length() {
        let text = "1. First title\n2) Second title\n\n- Third\n4. \"Fourth\"\n5. Fifth\n6. Sixth";
        let items = parse_numbered_list(text, 5);
        assert_eq!(
            items,
            vec!["First title", "Second title", "Third", "Fourth", "Fifth"]
        );
    }

    #[test]
    fn numbered_list_skips_marker_only_lines() {
        let items = parse_numbered_list("1.\n2. Real one\n   \n", 3);
        assert_eq!(items, vec!["Real one"]);
    }

    #[test]
    fn numbered_list_keeps_numbers_inside_items() {
        let text = "1. 2024 Best Pasta Recipes\n2) 10-minute meals\n3. 5 Pasta Mistakes\n• Bullet item";
        let items = parse_numbered_list(text, 5);
        assert_eq!(
            items,
            vec!["2024 Best Pasta Recipes", "10-minute meals", "5 Pasta Mistakes", "Bullet item"]
        );
    }

    #[test]
    fn unnumbered_lines_are_kept_verbatim() {
        let items = parse_numbered_list("2024 Best Pasta Recipes\n10-minute meals", 5);
        assert_eq!(items, vec!["2024 Best Pasta Recipes", "10-minute meals"]);
    }

    #[test]
    fn description_with_markers() {
        let text = "DESCRIPTION: Learn to cook pasta like a chef.\nHASHTAGS: #pasta #cooking #food";
        let parsed = parse_description(text);
        assert_eq!(parsed.description, "Learn to cook pasta like a chef.");
        assert_eq!(parsed.hashtags, vec!["#pasta", "#cooking", "#food"]);
    }

    #[test]
    fn turkish_description_marker_is_recognized() {
        let text = "AÇIKLAMA: Makarna pişirmenin sırları.\nHASHTAGLAR: #makarna #yemek";
        let parsed = parse_description(text);
        assert_eq!(parsed.description, "Makarna pişirmenin sırları.");
        assert_eq!(parsed.hashtags, vec!["#makarna", "#yemek"]);
    }

    #[test]
    fn description_falls_back_to_whole_text() {
        let text = "  A plain answer about pasta, see #pasta and #al_dente.  ";
        let parsed = parse_description(text);
        assert_eq!(
            parsed.description,
            "A plain answer about pasta, see #pasta and #al_dente."
        );
        // Tokens are split on whitespace only, so trailing punctuation stays.
        assert_eq!(parsed.hashtags, vec!["#pasta", "#al_dente."]);
    }

    #[test]
    fn last_hashtag_line_wins() {
        let text = "DESCRIPTION: Pasta night.\nHASHTAGS: #draft #tags\nHASHTAGS: #pasta #dinner";
        let parsed = parse_description(text);
        assert_eq!(parsed.hashtags, vec!["#pasta", "#dinner"]);
    }

    #[test]
    fn later_line_with_hash_overrides_tag_line() {
        let text = "DESCRIPTION: Pasta night.\nHASHTAGS: #pasta #dinner\nFollow for more #recipes";
        let parsed = parse_description(text);
        assert_eq!(parsed.description, "Pasta night.");
        assert_eq!(parsed.hashtags, vec!["#recipes"]);
    }

    #[test]
    fn description_regex_fallback_when_tags_are_glued() {
        let parsed = parse_description("DESCRIPTION: Nice.\nTags: (#pasta),(#food)");
        assert_eq!(parsed.description, "Nice.");
        assert_eq!(parsed.hashtags, vec!["#pasta", "#food"]);
    }

    #[test]
    fn script_sections_and_continuations() {
        let text = "HOOK: Ever burned pasta?\n\
                    SECTION1: Water - Use a big pot.\n\
                    Salt it well.\n\
                    SECTION2: Timing\n\
                    Taste early.\n\
                    OUTRO: Subscribe for more!";
        let script = parse_script(text);
        assert_eq!(script.hook, "Ever burned pasta?");
        assert_eq!(script.sections.len(), 2);
        assert_eq!(script.sections[0].title, "Water");
        assert_eq!(script.sections[0].content, "Use a big pot. Salt it well.");
        assert_eq!(script.sections[1].title, "Timing");
        assert_eq!(script.sections[1].content, "Taste early.");
        assert_eq!(script.outro, "Subscribe for more!");
    }

    #[test]
    fn script_handles_markdown_and_turkish_markers() {
        let text = "**HOOK:** Merhaba!\n**BÖLÜM1:** Giriş - Başlayalım\n**OUTRO:** Abone olun";
        let script = parse_script(text);
        assert_eq!(script.hook, "Merhaba!");
        assert_eq!(script.sections[0].title, "Giriş");
        assert_eq!(script.sections[0].content, "Başlayalım");
        assert_eq!(script.outro, "Abone olun");
    }

    #[test]
    fn lines_after_outro_extend_outro() {
        let script = parse_script("SECTION1: A - b\nOUTRO: Bye\nSee you next time");
        assert_eq!(script.sections[0].content, "b");
        assert_eq!(script.outro, "Bye See you next time");
    }
}
