//! Award Extractor: entries under an honors/awards/certifications heading.

use crate::extraction::lexicon::{contains_any, AWARD_ENDINGS, AWARD_HEADERS, AWARD_STOP_HEADERS};
use crate::extraction::models::Award;
use crate::extraction::normalize::{char_len, collapse_repeated_words, split_lines};

const MAX_HEADER_CHARS: usize = 35;
const MAX_STOP_LINE_CHARS: usize = 25;
const MIN_TRAILING_CHARS: usize = 10;

/// Lower-cased with spaces and hyphens removed, so "Honors-Awards" matches "honors awards".
fn squash(text: &str) -> String {
    text.trim().to_lowercase().replace([' ', '-'], "")
}

fn is_award_header(line: &str) -> bool {
    let clean = squash(line);
    char_len(&clean) < MAX_HEADER_CHARS
        && AWARD_HEADERS.iter().any(|header| clean.contains(&squash(header)))
}

fn is_stop_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && char_len(line) < MAX_STOP_LINE_CHARS
        && contains_any(&line.to_lowercase(), AWARD_STOP_HEADERS)
}

fn award_title(buffer: &[&str]) -> String {
    collapse_repeated_words(&buffer.join(" ").replace("- ", "– "))
}

pub fn extract_awards(text: &str) -> Vec<Award> {
    let lines: Vec<&str> = split_lines(text).collect();
    let Some(header) = lines.iter().position(|line| is_award_header(line)) else {
        return Vec::new();
    };

    let section = lines[header + 1..]
        .iter()
        .take_while(|line| !is_stop_line(line))
        .map(|line| line.trim())
        .filter(|line| !line.is_empty());

    let mut awards = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    for line in section {
        buffer.push(line);
        if contains_any(&buffer.join(" ").to_lowercase(), AWARD_ENDINGS) {
            awards.push(Award::from_title(award_title(&buffer)));
            buffer.clear();
        }
    }

    // Leftover text with no closing phrase still counts as one entry.
    let trailing = collapse_repeated_words(&buffer.join(" "));
    if char_len(&trailing) > MIN_TRAILING_CHARS {
        awards.push(Award::from_title(trailing));
    }
    awards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::models::AWARD_METRIC;

    fn titles(awards: &[Award]) -> Vec<&str> {
        awards.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_section_until_stop_header() {
        let text = "Jane Smith\nHonors-Awards\nEmployee of the Year 2020\nExperience\nBest Hackathon Project Award";
        let awards = extract_awards(text);
        assert_eq!(titles(&awards), vec!["Employee of the Year 2020"]);
        assert_eq!(awards[0].metric, AWARD_METRIC);
        assert_eq!(
            awards[0].description,
            "Recognized for excellence: Employee of the Year 2020"
        );
    }

    #[test]
    fn test_wrapped_entry_joined_and_dash_rewritten() {
        let text = "HONORS & AWARDS\nDean's List - Fall\nSemester Scholar\nPresident's  Innovation\nPrize";
        assert_eq!(
            titles(&extract_awards(text)),
            vec!["Dean's List – Fall Semester Scholar", "President's Innovation Prize"]
        );
    }

    #[test]
    fn test_trailing_buffer_kept_when_long_enough() {
        let text = "Certifications\nAWS Solutions Architect Professional\nEducation";
        assert_eq!(
            titles(&extract_awards(text)),
            vec!["AWS Solutions Architect Professional"]
        );
        assert!(extract_awards("Awards\nCKA\nSkills").is_empty());
    }

    #[test]
    fn test_repeated_adjacent_words_collapsed() {
        let awards = extract_awards("Awards\nBest Best Paper Award\nExperience");
        assert_eq!(titles(&awards), vec!["Best Paper Award"]);
        assert_eq!(awards[0].description, "Recognized for excellence: Best Paper Award");

        let trailing = extract_awards("Certifications\nCertified Certified Kubernetes Administrator");
        assert_eq!(titles(&trailing), vec!["Certified Kubernetes Administrator"]);
    }

    #[test]
    fn test_no_header_is_empty() {
        let text = "Employee of the Year 2020\nTop Performer Award";
        assert!(extract_awards(text).is_empty());
    }

    #[test]
    fn test_long_line_mentioning_awards_is_not_header() {
        let text = "Received several awards for outstanding service to the community\nFellow";
        assert!(extract_awards(text).is_empty());
    }
}
