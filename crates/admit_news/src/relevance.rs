//! Keyword filter deciding whether a story belongs on a student's dashboard.
//!
//! Matching is plain substring containment on lowercased text, so "schoolboy"
//! matches "school". Any excluded keyword rejects the text even when included
//! keywords are present.

pub const EXCLUDED_KEYWORDS: &[&str] = &[
    "murder",
    " rape",
    "killed",
    "killing",
    "stabbed",
    "shot dead",
    "suicide",
    "arrested",
    "police",
    "crime",
    "terror",
    "riots",
    "assault",
    "molest",
    "kidnap",
    "gangster",
    "election",
    "bjp",
    "congress",
    "lok sabha",
    "rajya sabha",
    "parliament",
    "cricket",
    " ipl",
    "world cup",
    "football",
    "bollywood",
];

pub const INCLUDED_KEYWORDS: &[&str] = &[
    "exam",
    "jee",
    "neet",
    "cuet",
    "clat",
    "upsc",
    "cbse",
    "icse",
    "board result",
    "admission",
    "admit card",
    "universit",
    "college",
    "campus",
    "iit",
    "iim",
    "aiims",
    "nirf",
    "ugc",
    "aicte",
    "ncert",
    "national testing agency",
    "scholarship",
    "fellowship",
    "student",
    "school",
    "syllabus",
    "counselling",
    "counseling",
    "cutoff",
    "cut-off",
    "merit list",
    "semester",
    "degree",
    "undergraduate",
    "postgraduate",
    "phd",
    "study abroad",
    "ielts",
    "toefl",
    "gmat",
    "student visa",
    "education",
    "academic",
    "internship",
    "placement",
];

pub fn is_relevant(text: &str) -> bool {
    // leading space lets space-prefixed keywords match the first word
    let text = format!(" {}", text.to_lowercase());
    if EXCLUDED_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return false;
    }
    INCLUDED_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

pub fn is_relevant_article(title: &str, description: &str) -> bool {
    is_relevant(&format!("{} {}", title, description))
}
