//! Achievement title synthesis: a short "Verb Object" headline for a statement.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::lexicon::{
    DEVELOPED_OBJECT_STOPS, GENERIC_NOUNS, IMPACT_VERBS, OBJECT_PHRASE_STOPS, THIN_VERBS,
    TITLE_FILLER_WORDS,
};
use crate::extraction::normalize::{
    capitalize, char_len, collapse_repeated_words, strip_zero_width, title_case,
};
use crate::nlp::{PartOfSpeech, TaggedSentence};

pub const DEFAULT_TITLE: &str = "Impact Highlight";

const MAX_TITLE_WORDS: usize = 4;
const OBJECT_PHRASE_TOKENS: usize = 5;
const BORROW_WINDOW: usize = 6;

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:the|a|an)\s+").unwrap());

static DEVELOPED_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:co-developed|developed)\s+([A-Za-z][\w-]+(?:\s+[A-Za-z][\w-]+)*)")
        .unwrap()
});

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

fn is_impact_word(word: &str) -> bool {
    IMPACT_VERBS.contains(&word.to_lowercase().as_str())
}

fn is_filler(word: &str) -> bool {
    TITLE_FILLER_WORDS.contains(&capitalize(word).as_str())
}

/// Words of `text` with surrounding `,` / `.` and zero-width spaces removed.
fn plain_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| strip_zero_width(w.trim_matches([',', '.'])))
        .collect()
}

/// Builds the title for one cleaned achievement statement.
pub fn synthesize_title(cleaned: &str, sentence: &TaggedSentence) -> String {
    let raw = leading_verb_phrase(sentence)
        .or_else(|| impact_verb_phrase(cleaned, sentence))
        .or_else(|| developed_object(cleaned))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    polish(&raw, cleaned)
}

/// "Increased revenue" from "Increased revenue by 35%".
fn leading_verb_phrase(sentence: &TaggedSentence) -> Option<String> {
    let (first, rest) = sentence.tokens.split_first()?;
    if first.pos != PartOfSpeech::Verb && !is_impact_word(&first.text) {
        return None;
    }
    let phrase: Vec<&str> = rest
        .iter()
        .take(OBJECT_PHRASE_TOKENS)
        .map(|t| t.text.as_str())
        .take_while(|t| !OBJECT_PHRASE_STOPS.contains(&t.to_lowercase().as_str()))
        .collect();
    (!phrase.is_empty()).then(|| format!("{} {}", first.text, phrase.join(" ")))
}

/// An impact verb anywhere in the line, paired with its best noun phrase.
fn impact_verb_phrase(cleaned: &str, sentence: &TaggedSentence) -> Option<String> {
    let words = plain_words(cleaned);
    let first = words.first()?;
    let verb = if is_impact_word(first) {
        capitalize(first)
    } else {
        sentence
            .tokens
            .iter()
            .find(|t| is_impact_word(&t.text))
            .map(|t| capitalize(&t.text))?
    };
    let verb_lower = verb.to_lowercase();

    let candidates: Vec<String> = sentence
        .noun_chunks
        .iter()
        .filter(|chunk| chunk.root_pos != PartOfSpeech::Pronoun)
        .filter_map(|chunk| {
            let text = LEADING_ARTICLE.replace(chunk.text.trim(), "");
            let words: Vec<String> = text
                .split_whitespace()
                .filter(|w| w.to_lowercase() != verb_lower)
                .map(capitalize)
                .collect();
            (!words.is_empty()).then(|| words.join(" "))
        })
        .collect();

    let Some(first_phrase) = candidates.first() else {
        return Some(format!("{verb} Initiative"));
    };
    let is_generic = |phrase: &str| GENERIC_NOUNS.contains(&phrase);
    let best = if is_generic(first_phrase.as_str()) {
        candidates
            .iter()
            .find(|p| !is_generic(p.as_str()))
            .unwrap_or(first_phrase)
    } else {
        first_phrase
    };
    Some(format!("{verb} {best}"))
}

/// "Developed X" where X is the object after the verb, up to a stop word.
fn developed_object(cleaned: &str) -> Option<String> {
    if !cleaned.to_lowercase().contains("developed") {
        return None;
    }
    let caps = DEVELOPED_OBJECT.captures(cleaned)?;
    let mut object: Vec<&str> = Vec::new();
    for word in caps[1].split_whitespace() {
        let lower = word.to_lowercase();
        if !object.is_empty() && DEVELOPED_OBJECT_STOPS.iter().any(|s| lower.starts_with(s)) {
            break;
        }
        object.push(word);
    }
    Some(format!("Developed {}", strip_zero_width(&object.join(" "))))
}

/// Trims, pads, caps, title-cases, and de-duplicates a raw title.
fn polish(raw: &str, cleaned: &str) -> String {
    let mut words: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    while words.last().is_some_and(|w| is_filler(w)) {
        words.pop();
    }

    // "Led Team" says little; borrow content words from the statement.
    let thin = words
        .first()
        .is_some_and(|w| THIN_VERBS.contains(&w.as_str()));
    if words.len() <= 2 && thin {
        let description = plain_words(cleaned);
        let start = words.len();
        if description.len() > start + 1 {
            for candidate in description.iter().take(BORROW_WINDOW).skip(start) {
                if !is_filler(candidate) && char_len(candidate) > 2 {
                    words.push(capitalize(candidate));
                    if words.len() >= MAX_TITLE_WORDS {
                        break;
                    }
                }
            }
        }
    }
    words.truncate(MAX_TITLE_WORDS);

    let title = title_case(&words.join(" "));
    let title = match title.split_once('(') {
        Some((head, tail)) if !tail.contains(')') => head.to_string(),
        _ => PARENTHETICAL.replace_all(&title, "").into_owned(),
    };

    let title = collapse_repeated_words(&title);
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
