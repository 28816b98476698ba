//! Speech scripts: sentences and paced segments
//!
//! A playback driver speaks a transcompiled text one segment at a time and
//! waits between segments. This module computes that plan; it never touches
//! audio.
//!
//! Hyphen-grouped tokens (`symbol-of-alpha`) are spoken piece by piece with
//! the short `grouped_ms` pause, ordinary spaces get `space_ms`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pause lengths in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PauseSettings {
    /// After a sentence end
    /// Default: 1000
    pub period_ms: u32,
    /// At a line break
    /// Default: 800
    pub newline_ms: u32,
    /// After a comma
    /// Default: 500
    pub comma_ms: u32,
    /// Between words
    /// Default: 200
    pub space_ms: u32,
    /// Between the pieces of a hyphen-grouped token
    /// Default: 40
    pub grouped_ms: u32,
}

impl Default for PauseSettings {
    fn default() -> Self {
        Self {
            period_ms: 1000,
            newline_ms: 800,
            comma_ms: 500,
            space_ms: 200,
            grouped_ms: 40,
        }
    }
}

/// One step of a playback plan
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Segment {
    Speak(String),
    Pause(u32),
}

fn ends_sentence(word: &str) -> bool {
    word == "period" || word.ends_with(['.', '!', '?'])
}

/// Split a spoken script into sentences.
///
/// A sentence ends after `.`, `!`, `?` or the spoken word `period`. Words
/// inside a sentence are joined by single spaces.
pub fn split_sentences(parsed: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in parsed.split_whitespace() {
        current.push(word);
        if ends_sentence(word) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }

    sentences
}

/// Segment list under construction
#[derive(Default)]
struct Plan {
    segments: Vec<Segment>,
}

impl Plan {
    fn speak(&mut self, word: &str) {
        self.segments.push(Segment::Speak(word.to_string()));
    }

    /// Adjacent pauses merge into the longest; nothing pauses before the
    /// first word
    fn pause(&mut self, ms: u32) {
        match self.segments.last_mut() {
            None => {}
            Some(Segment::Pause(current)) => *current = (*current).max(ms),
            Some(Segment::Speak(_)) => self.segments.push(Segment::Pause(ms)),
        }
    }

    fn token(&mut self, token: &str, settings: &PauseSettings) {
        let word = token.trim_end_matches([',', ';', ':', '.', '!', '?']);
        let trailing = &token[word.len()..];

        let mut pieces = word.split('-').filter(|p| !p.is_empty());
        if let Some(first) = pieces.next() {
            self.speak(first);
            for piece in pieces {
                self.pause(settings.grouped_ms);
                self.speak(piece);
            }
        }

        if word == "period" || trailing.contains(['.', '!', '?']) {
            self.pause(settings.period_ms);
        } else if !trailing.is_empty() {
            self.pause(settings.comma_ms);
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        if let Some(Segment::Pause(_)) = self.segments.last() {
            self.segments.pop();
        }
        self.segments
    }
}

/// Plan the segments a playback driver speaks, with the pauses between them
pub fn plan_segments(parsed: &str, settings: &PauseSettings) -> Vec<Segment> {
    let mut plan = Plan::default();
    let mut rest = parsed.trim();

    while !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        plan.token(token, settings);

        let next = tail.trim_start();
        let gap = &tail[..tail.len() - next.len()];
        if gap.contains('\n') {
            plan.pause(settings.newline_ms);
        } else if !gap.is_empty() {
            plan.pause(settings.space_ms);
        }
        rest = next;
    }

    let segments = plan.finish();
    log::debug!("script: planned {} segment(s)", segments.len());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Segment::{Pause, Speak};

    fn speak(word: &str) -> Segment {
        Speak(word.to_string())
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Hello there. How are you? Fine"),
            vec!["Hello there.", "How are you?", "Fine"]
        );
        assert_eq!(
            split_sentences("x equals 3 point 14 period Done"),
            vec!["x equals 3 point 14 period", "Done"]
        );
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_words_and_spaces() {
        let plan = plan_segments("a b", &PauseSettings::default());
        assert_eq!(plan, vec![speak("a"), Pause(200), speak("b")]);
    }

    #[test]
    fn test_grouped_token_short_pauses() {
        let plan = plan_segments("symbol-of-alpha", &PauseSettings::default());
        assert_eq!(
            plan,
            vec![speak("symbol"), Pause(40), speak("of"), Pause(40), speak("alpha")]
        );
    }

    #[test]
    fn test_pauses_merge_to_longest() {
        let settings = PauseSettings::default();
        assert_eq!(
            plan_segments("equation, x", &settings),
            vec![speak("equation"), Pause(500), speak("x")]
        );
        assert_eq!(
            plan_segments("a period b", &settings),
            vec![speak("a"), Pause(200), speak("period"), Pause(1000), speak("b")]
        );
        assert_eq!(
            plan_segments("a\n\nb", &settings),
            vec![speak("a"), Pause(800), speak("b")]
        );
    }

    #[test]
    fn test_no_leading_or_trailing_pause() {
        let plan = plan_segments(" Done. ", &PauseSettings::default());
        assert_eq!(plan, vec![speak("Done")]);
        assert!(plan_segments("", &PauseSettings::default()).is_empty());
        assert!(plan_segments("-- ,", &PauseSettings::default()).is_empty());
    }

    #[test]
    fn test_custom_settings() {
        let settings = PauseSettings {
            space_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            plan_segments("a b", &settings),
            vec![speak("a"), Pause(0), speak("b")]
        );
    }
}
