//! Built-in heuristic tagger: gazetteer entities plus suffix-rule parts of speech.
//!
//! Fast, deterministic, no model download. Good enough to disambiguate a name
//! line or a city, and to find the verb and noun phrases of an achievement bullet.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    EntityLabel, EntityTag, EntityTagger, NounChunk, PartOfSpeech, TaggedSentence, TaggerError,
    Token,
};
use crate::extraction::lexicon::IMPACT_VERBS;
use crate::extraction::normalize::{split_lines, starts_uppercase};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+(?:[-'’.]\w+)*|[^\w\s]").unwrap());

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "these", "those", "each", "every", "all", "my", "our", "their",
    "his", "her", "its", "your",
];

/// Pronouns that head a noun chunk of their own.
const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "you", "he", "she", "it", "they", "me", "us", "them"];

const RELATIVE_PRONOUNS: &[&str] = &["that", "which", "who", "whom", "whose"];

const ADPOSITIONS: &[&str] = &[
    "by", "for", "of", "to", "in", "on", "at", "with", "from", "through", "across", "into",
    "over", "under", "via", "within", "during", "per", "about", "using",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "while", "whereas", "so", "nor"];

const ADJECTIVES: &[&str] = &[
    "new", "key", "high", "low", "large", "small", "major", "global", "annual", "internal",
    "external", "real-time", "end-to-end", "cross-functional", "multiple", "several", "top",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["al", "ive", "ous", "ful", "able", "ible", "less"];

const BASE_VERBS: &[&str] = &[
    "led", "built", "grew", "ran", "won", "drove", "cut", "made", "shipped", "owned", "designed",
    "architected", "spearheaded", "migrated", "automated", "deployed", "negotiated", "mentored",
    "trained", "hired", "established", "founded", "introduced", "drive", "build", "lead", "manage",
];

const ORG_SUFFIXES: &[&str] = &["Inc", "Corp", "LLC", "Ltd", "Co"];

const BUILTIN_FIRST_NAMES: &[&str] = &[
    "aaron", "adam", "aisha", "alex", "alexander", "alice", "amanda", "amy", "andrea", "andrew",
    "angela", "anna", "anthony", "arjun", "ashley", "ben", "benjamin", "brian", "carlos",
    "carol", "catherine", "charles", "chen", "chris", "christopher", "daniel", "david", "deborah",
    "diana", "elena", "elizabeth", "emily", "emma", "eric", "fatima", "frank", "george", "grace",
    "hannah", "hiroshi", "isabel", "jack", "james", "jane", "jason", "jennifer", "jessica", "john",
    "jose", "joseph", "juan", "julia", "karen", "kevin", "laura", "linda", "lisa", "maria",
    "mark", "mary", "matthew", "michael", "michelle", "mohammed", "nancy", "nicole", "olivia",
    "omar", "patricia", "paul", "priya", "rahul", "rachel", "raj", "richard", "robert", "ryan",
    "sam", "sarah", "sofia", "stephanie", "steven", "susan", "thomas", "wei", "william", "yuki",
];

const BUILTIN_PLACES: &[&str] = &[
    "alabama", "alaska", "arizona", "atlanta", "austin", "australia", "bangalore", "berlin",
    "boston", "brazil", "california", "canada", "chicago", "china", "colorado", "dallas",
    "denver", "dublin", "england", "florida", "france", "georgia", "germany", "houston", "india",
    "ireland", "israel", "italy", "japan", "london", "los angeles", "massachusetts", "mexico",
    "miami", "mumbai", "netherlands", "new jersey", "new york", "new york city", "ohio",
    "oregon", "paris", "pennsylvania", "portland", "san diego", "san francisco", "san jose",
    "seattle", "singapore", "spain", "sydney", "texas", "tokyo", "toronto", "united kingdom",
    "united states", "vancouver", "virginia", "washington",
];

/// Gazetteers backing the heuristic tagger. Entries are lower-case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub first_names: HashSet<String>,
    #[serde(default)]
    pub places: HashSet<String>,
    #[serde(default)]
    pub verbs: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        let mut verbs: HashSet<String> = owned(BASE_VERBS);
        verbs.extend(IMPACT_VERBS.iter().map(|w| w.to_string()));
        Self {
            first_names: owned(BUILTIN_FIRST_NAMES),
            places: owned(BUILTIN_PLACES),
            verbs,
        }
    }
}

impl Lexicon {
    /// Merges another lexicon in, lower-casing its entries.
    pub fn extend(&mut self, other: Lexicon) {
        self.first_names
            .extend(other.first_names.into_iter().map(|w| w.to_lowercase()));
        self.places
            .extend(other.places.into_iter().map(|w| w.to_lowercase()));
        self.verbs
            .extend(other.verbs.into_iter().map(|w| w.to_lowercase()));
    }
}

/// Splits text into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

fn is_word(token: &str) -> bool {
    token.chars().all(char::is_alphabetic) && !token.is_empty()
}

fn is_capitalized_word(token: &str) -> bool {
    is_word(token) && starts_uppercase(token)
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger {
    lexicon: Lexicon,
}

impl HeuristicTagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn part_of_speech(&self, token: &str, index: usize) -> PartOfSpeech {
        let lower = token.to_lowercase();
        let word = lower.as_str();

        if !token.chars().any(char::is_alphanumeric) {
            return PartOfSpeech::Punctuation;
        }
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return PartOfSpeech::Numeral;
        }
        if DETERMINERS.contains(&word) {
            return PartOfSpeech::Determiner;
        }
        if PERSONAL_PRONOUNS.contains(&word) || RELATIVE_PRONOUNS.contains(&word) {
            return PartOfSpeech::Pronoun;
        }
        if ADPOSITIONS.contains(&word) {
            return PartOfSpeech::Adposition;
        }
        if CONJUNCTIONS.contains(&word) {
            return PartOfSpeech::Conjunction;
        }
        if self.lexicon.verbs.contains(word) || (word.ends_with("ed") && word.len() > 4) {
            return PartOfSpeech::Verb;
        }
        if ADJECTIVES.contains(&word)
            || (word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)))
        {
            return PartOfSpeech::Adjective;
        }
        if index > 0 && starts_uppercase(token) {
            return PartOfSpeech::ProperNoun;
        }
        PartOfSpeech::Noun
    }

    fn noun_chunks(tokens: &[Token]) -> Vec<NounChunk> {
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.pos == PartOfSpeech::Pronoun
                && PERSONAL_PRONOUNS.contains(&token.text.to_lowercase().as_str())
            {
                chunks.push(NounChunk {
                    text: token.text.clone(),
                    root_pos: PartOfSpeech::Pronoun,
                });
                i += 1;
                continue;
            }

            let start = i;
            let mut j = i;
            if tokens[j].pos == PartOfSpeech::Determiner {
                j += 1;
            }
            let mut last_nominal = None;
            while j < tokens.len()
                && matches!(
                    tokens[j].pos,
                    PartOfSpeech::Adjective
                        | PartOfSpeech::Numeral
                        | PartOfSpeech::Noun
                        | PartOfSpeech::ProperNoun
                )
            {
                if tokens[j].pos.is_nominal() {
                    last_nominal = Some(j);
                }
                j += 1;
            }

            match last_nominal {
                Some(end) => {
                    let text = tokens[start..=end]
                        .iter()
                        .map(|t| t.text.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    chunks.push(NounChunk {
                        text,
                        root_pos: tokens[end].pos,
                    });
                    i = end + 1;
                }
                None => i += 1,
            }
        }
        chunks
    }

    fn tag_line(&self, line: &str, entities: &mut Vec<EntityTag>) {
        let tokens = tokenize(line);
        let mut i = 0;
        while i < tokens.len() {
            if !is_capitalized_word(tokens[i]) {
                i += 1;
                continue;
            }

            let run = tokens[i..]
                .iter()
                .take_while(|t| is_capitalized_word(t) && !ORG_SUFFIXES.contains(t))
                .count();
            if run == 0 {
                i += 1;
                continue;
            }

            if let Some(len) = (1..=run.min(3))
                .rev()
                .find(|&len| self.lexicon.places.contains(&tokens[i..i + len].join(" ").to_lowercase()))
            {
                entities.push(EntityTag::new(tokens[i..i + len].join(" "), EntityLabel::Gpe));
                i += len;
                continue;
            }

            if run >= 2 && self.lexicon.first_names.contains(&tokens[i].to_lowercase()) {
                let len = run.min(3);
                entities.push(EntityTag::new(tokens[i..i + len].join(" "), EntityLabel::Person));
                i += len;
                continue;
            }

            if let Some(suffix) = tokens.get(i + run) {
                if ORG_SUFFIXES.contains(suffix) {
                    entities.push(EntityTag::new(
                        tokens[i..=i + run].join(" "),
                        EntityLabel::Org,
                    ));
                    i += run + 1;
                    continue;
                }
            }

            // "Greater Seattle": the entity may start inside the run.
            i += 1;
        }
    }
}

impl EntityTagger for HeuristicTagger {
    fn tag_entities(&self, text: &str) -> Result<Vec<EntityTag>, TaggerError> {
        let mut entities = Vec::new();
        for line in split_lines(text) {
            self.tag_line(line, &mut entities);
        }
        Ok(entities)
    }

    fn analyze(&self, text: &str) -> Result<TaggedSentence, TaggerError> {
        let tokens: Vec<Token> = tokenize(text)
            .into_iter()
            .enumerate()
            .map(|(i, t)| Token::new(t, self.part_of_speech(t, i)))
            .collect();
        let noun_chunks = Self::noun_chunks(&tokens);
        Ok(TaggedSentence {
            tokens,
            noun_chunks,
        })
    }
}
