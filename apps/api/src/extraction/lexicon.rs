//! Lexicon: every keyword list, blacklist, and header set the extractors consult.
//!
//! Matching is case-insensitive substring matching unless a table says otherwise.
//! Entries are lower-case except where the consumer compares against capitalised text.

// ────────────────────────────────────────────────────────────────────────────
// Line structure
// ────────────────────────────────────────────────────────────────────────────

/// Glyphs that open a bullet line.
pub const BULLET_GLYPHS: &[char] = &['●', '\u{2022}', '\u{2023}', '\u{2043}', '\u{204C}', '-', '*'];

/// Substrings that mark a line as contact details rather than prose.
pub const CONTACT_MARKERS: &[&str] = &["@", "+", "www.", "linkedin.com", "/in/", "tel:", "phone:"];

/// First words that continue the previous statement.
pub const CONTINUATION_CONNECTIVES: &[&str] = &[
    "that", "which", "and", "but", "or", "with", "by", "for", "from", "to", "in", "of", "at", "as",
    "on", "while", "where", "when", "who", "whose",
];

/// Extra leading words that disqualify a statement as a standalone achievement.
pub const ACHIEVEMENT_LEAD_CONNECTIVES: &[&str] = &[
    "resulting",
    "including",
    "utilizing",
    "leveraging",
    "during",
    "within",
    "across",
    "through",
    "plus",
    "also",
    "additionally",
    "furthermore",
];

/// Section names that open a header line (case-sensitive prefix).
pub const SECTION_KEYWORDS: &[&str] =
    &["Education", "Experience", "Skills", "Summary", "Objective", "Awards"];

/// Seniority and role nouns that can make up a bare job-title line.
pub const JOB_TITLE_WORDS: &[&str] = &[
    "Engineering",
    "Software",
    "Senior",
    "Lead",
    "Staff",
    "Principal",
    "Director",
    "Manager",
    "VP",
    "CEO",
    "CTO",
    "COO",
    "CFO",
    "Founder",
    "Owner",
    "Co-Founder",
    "President",
    "Advisor",
    "Consultant",
    "Head",
    "Chief",
];

/// Optional second word of a bare job-title line.
pub const JOB_TITLE_SUFFIXES: &[&str] = &[
    "Manager",
    "Engineer",
    "Developer",
    "Architect",
    "Director",
    "Officer",
    "Lead",
    "Specialist",
];

// ────────────────────────────────────────────────────────────────────────────
// Identity
// ────────────────────────────────────────────────────────────────────────────

/// Substrings that rule a line out as a person's name.
pub const NON_NAME_INDICATORS: &[&str] = &[
    "page",
    "curriculum",
    "resume",
    "contact",
    "mobile",
    "email",
    "linkedin",
    "publications",
    "certifications",
    "skills",
    "languages",
    "honors",
    "awards",
    "greater",
    "area",
    "region",
    "metro",
    "north",
    "south",
    "east",
    "west",
    "central",
    "bay",
    "united states",
    "kingdom",
    "canada",
    "australia",
    "software engineer",
    "software design",
    "software infrastructure",
    "software development",
    "developer",
    "manager",
    "director",
    "consultant",
    "specialist",
    "top skills",
    "summary",
];

/// Extra markers skipped by the top-of-document name scan.
pub const NAME_CONTACT_MARKERS: &[&str] = &["@", "phone", "resume", "curriculum", "contact"];

/// Section words that make a line unsuitable for entity-tagged name lookup.
pub const NAME_TAGGER_SKIPS: &[&str] = &["summary", "experience", "education", "skills", "contact"];

/// Whole PERSON spans the tagger is known to hallucinate.
pub const NAME_BOILERPLATE: &[&str] =
    &["curriculum vitae", "resume", "software engineer", "contact", "email"];

/// Job-title nouns that identify a role line.
pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "consultant",
    "founder",
    "ceo",
    "cto",
    "coo",
    "cfo",
    "vp",
    "president",
    "lead",
    "head",
    "chief",
    "analyst",
    "designer",
    "architect",
    "specialist",
    "advisor",
    "partner",
    "scientist",
    "researcher",
    "professor",
    "coach",
    "strategist",
    "executive",
    "expert",
];

/// Section markers that end a role scan.
pub const ROLE_SKIP_KEYWORDS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "contact",
    "languages",
    "publications",
    "certifications",
    "page ",
    "top skills",
];

/// Technology and product names a tagger mistakes for places (case-sensitive).
pub const TECH_BLACKLIST: &[&str] = &[
    "Spark",
    "Python",
    "Java",
    "Docker",
    "Kubernetes",
    "React",
    "Elastic",
    "Spring",
    "Swift",
    "Kafka",
    "Pandas",
    "Ansible",
    "Terraform",
    "Unity",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Node",
    "Django",
    "Flask",
    "FastAPI",
];

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub const SUMMARY_HEADERS: &[&str] =
    &["summary", "profile", "professional summary", "about me", "objective"];

pub const SUMMARY_STOP_HEADERS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "skills",
    "education",
    "projects",
    "certifications",
    "publications",
    "languages",
    "interests",
];

pub const AWARD_HEADERS: &[&str] = &[
    "honors-awards",
    "honors & awards",
    "awards and honors",
    "awards & honors",
    "honors and awards",
    "awards",
    "honors",
    "recognition",
    "certifications",
    "licenses & certifications",
    "licenses and certifications",
];

pub const AWARD_STOP_HEADERS: &[&str] = &[
    "experience",
    "employment",
    "education",
    "skills",
    "languages",
    "publications",
    "projects",
    "interests",
    "contact",
    "summary",
    "about",
    "recommendations",
];

/// Phrases that close an award entry.
pub const AWARD_ENDINGS: &[&str] = &[
    "winner",
    "of the year",
    "award",
    "recognition",
    "honoree",
    "nominee",
    "prize",
    "medal",
    "fellow",
    "scholar",
    "grant",
];

// ────────────────────────────────────────────────────────────────────────────
// Achievements
// ────────────────────────────────────────────────────────────────────────────

pub const IMPACT_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "saved",
    "generated",
    "delivered",
    "led",
    "managed",
    "built",
    "launched",
    "achieved",
    "optimized",
    "streamlined",
    "developed",
    "co-developed",
    "created",
    "implemented",
    "scaled",
    "grew",
];

/// Verbs too weak to stand as a two-word title (case-sensitive).
pub const THIN_VERBS: &[&str] = &["Led", "Managed", "Developed", "Built", "Created"];

/// Tokens that end the object phrase following a leading verb.
pub const OBJECT_PHRASE_STOPS: &[&str] = &[
    ",", ".", "and", "with", "using", "by", "for", "of", "to", "in", "on", "at", "that", "which",
];

/// Capitalised function words trimmed from or skipped by titles.
pub const TITLE_FILLER_WORDS: &[&str] = &[
    "Using", "With", "And", "For", "By", "In", "To", "The", "A", "An", "Of", "Through", "At", "On",
    "That", "Which",
];

/// Single-word noun phrases too vague to headline an achievement.
pub const GENERIC_NOUNS: &[&str] = &[
    "Activity",
    "Project",
    "Task",
    "Work",
    "Process",
    "Initiative",
    "Core",
    "Role",
    "Time",
    "System",
    "Systems",
    "Team",
    "Teams",
    "Platform",
    "Feature",
    "Company",
];

/// Word prefixes that end the object of "developed".
pub const DEVELOPED_OBJECT_STOPS: &[&str] = &["using", "with", "for", "by", "to", "through"];

/// Returns true when `haystack` contains any entry of `table`.
pub fn contains_any(haystack: &str, table: &[&str]) -> bool {
    table.iter().any(|needle| haystack.contains(needle))
}
