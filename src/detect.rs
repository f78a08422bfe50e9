use crate::error::DetectError;
use crate::sounds::Sound;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub enum Matcher {
    Pattern(Regex),
    Exact(Vec<String>),
}

impl Matcher {
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map(Matcher::Pattern)
    }

    pub fn exact<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matcher::Exact(
            values
                .into_iter()
                .map(|value| value.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn is_repeatable(&self) -> bool {
        matches!(self, Matcher::Pattern(_))
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(regex) => regex.is_match(text),
            Matcher::Exact(values) => {
                let folded = text.to_lowercase();
                values.iter().any(|value| *value == folded)
            }
        }
    }
}

// An empty match moves the cursor one character forward so the scan always
// terminates.
pub fn count_matches(text: &str, matcher: &Matcher) -> Result<usize, DetectError> {
    let regex = match matcher {
        Matcher::Pattern(regex) => regex,
        Matcher::Exact(_) => return Err(DetectError::NotRepeatable),
    };

    if text.is_empty() {
        return Ok(0);
    }

    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = regex.find_at(text, pos) {
        count += 1;
        if !found.is_empty() {
            pos = found.end();
            continue;
        }
        match text[found.end()..].chars().next() {
            Some(ch) => pos = found.end() + ch.len_utf8(),
            None => break,
        }
    }

    Ok(count)
}

#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub sound: Sound,
    pub matcher: Matcher,
    pub aliases: Matcher,
}

impl PatternEntry {
    pub fn new(sound: Sound, pattern: &str, aliases: &[&str]) -> Result<Self, DetectError> {
        let matcher = Matcher::pattern(pattern)
            .map_err(|source| DetectError::InvalidPattern { sound, source })?;
        Ok(Self {
            sound,
            matcher,
            aliases: Matcher::exact(aliases),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub sound: Sound,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    pub fn new(entries: Vec<PatternEntry>) -> Result<Self, DetectError> {
        if let Some(entry) = entries.iter().find(|entry| !entry.matcher.is_repeatable()) {
            return Err(DetectError::EntryNotRepeatable { sound: entry.sound });
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> &'static PatternTable {
        static TABLE: OnceLock<PatternTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            builtin_entries()
                .and_then(PatternTable::new)
                .expect("built-in emoji patterns compile")
        })
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn occurrences(&self, text: &str, cap: usize) -> Result<Vec<Occurrence>, DetectError> {
        let mut found = Vec::new();
        for entry in &self.entries {
            let count = count_matches(text, &entry.matcher)?.min(cap);
            if count > 0 {
                found.push(Occurrence {
                    sound: entry.sound,
                    count,
                });
            }
        }
        Ok(found)
    }

    pub fn classify(&self, name: &str) -> Option<Sound> {
        let folded = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.aliases.is_match(&folded) || entry.matcher.is_match(&folded))
            .map(|entry| entry.sound)
    }
}

// Tags and keywords are ASCII-only, case folding included. Only the glyph
// alternatives run in Unicode mode.
fn tag(stem: &str) -> String {
    format!("(?-u:<a?:[[:word:]]*{stem}[[:word:]]*:[0-9]*>)")
}

fn builtin_entries() -> Result<Vec<PatternEntry>, DetectError> {
    Ok(vec![
        PatternEntry::new(Sound::Moyai, &format!("{}|🗿", tag("mo?yai")), &["🗿", "moyai"])?,
        PatternEntry::new(
            Sound::Huhcat,
            &format!("{}|(?-u:[[:word:]]*huh[[:word:]]*)", tag("huhcat")),
            &["huhcat", "huh"],
        )?,
        PatternEntry::new(Sound::What, &tag("what"), &["what"])?,
        PatternEntry::new(Sound::Chadge, &tag("chadge"), &["chadge"])?,
        PatternEntry::new(Sound::Gayge, &tag("gayge"), &["gayge"])?,
        PatternEntry::new(Sound::Pipe, &tag("fall"), &["pipe"])?,
        PatternEntry::new(Sound::Bonk, &tag("bonk"), &["bonk"])?,
        PatternEntry::new(Sound::Sus, &tag("sus"), &["sus"])?,
    ])
}
