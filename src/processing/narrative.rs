//! Natural-language summary of a skill distribution

use crate::processing::skills::SkillFrequency;

const NO_SKILL_DATA: &str = "No skill data available.";

/// Describe a skill distribution in plain language. Deterministic: the same
/// distribution always yields the same string.
pub fn describe_skills(freq: &SkillFrequency) -> String {
    if freq.is_empty() {
        return NO_SKILL_DATA.to_string();
    }

    // Non-empty, so both bounds exist
    let max_count = freq.max_count().unwrap_or(0);
    let min_count = freq.min_count().unwrap_or(0);

    let top_skills: Vec<&str> = freq
        .iter()
        .filter(|(_, n)| *n == max_count)
        .map(|(s, _)| s)
        .collect();
    let rare_skills: Vec<&str> = freq
        .iter()
        .filter(|(_, n)| *n == min_count)
        .map(|(s, _)| s)
        .collect();

    let mut narrative = if top_skills.len() == 1 {
        format!(
            "The most common skill is {}, appearing {} times among candidates.",
            top_skills[0], max_count
        )
    } else {
        format!(
            "Multiple top skills stand out: {}, each with {} candidates.",
            top_skills.join(", "),
            max_count
        )
    };

    // Skip the rare-skill sentence when every skill ties for the minimum:
    // a uniform distribution has no "rare" skills to call out.
    if !rare_skills.is_empty() && rare_skills.len() < freq.len() {
        narrative.push_str(&format!(
            " On the other hand, {} are the least common skills, appearing only {} times.",
            rare_skills.join(", "),
            min_count
        ));
    }

    if freq.len() > 5 {
        narrative.push_str(&format!(
            " Overall, there is a diverse skill set covering {} unique skills.",
            freq.len()
        ));
    } else {
        narrative.push_str(&format!(
            " The candidate pool is focused on a smaller set of {} skills.",
            freq.len()
        ));
    }

    narrative
}
