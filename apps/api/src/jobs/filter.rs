//! Post-fetch filtering of job postings by experience level.
//!
//! Patterns are compiled once at startup. A posting passes when its title or
//! description mentions one of the level's markers; the result is then trimmed
//! to the configured limit.

use regex::{Regex, RegexBuilder};

use crate::jobs::models::{ExperienceLevel, JobPosting};

const JUNIOR_PATTERN: &str = r"\b(junior|entry[- ]level|0-2 years|1-3 years experience)\b";
const MID_PATTERN: &str = r"\b(mid[- ]level|associate|3-5 years experience)\b";
const SENIOR_PATTERN: &str = r"\b(senior|lead|principal|staff|5\+ years|8\+ years experience)\b";

#[derive(Debug, Clone)]
pub struct JobFilter {
    junior: Regex,
    mid: Regex,
    senior: Regex,
    limit: usize,
}

impl JobFilter {
    pub fn new(limit: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            junior: compile(JUNIOR_PATTERN)?,
            mid: compile(MID_PATTERN)?,
            senior: compile(SENIOR_PATTERN)?,
            limit,
        })
    }

    fn pattern(&self, level: ExperienceLevel) -> &Regex {
        match level {
            ExperienceLevel::Junior => &self.junior,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }

    /// Without a level only the limit applies.
    pub fn apply(&self, postings: Vec<JobPosting>, level: Option<ExperienceLevel>) -> Vec<JobPosting> {
        postings
            .into_iter()
            .filter(|p| match level {
                Some(level) => {
                    let re = self.pattern(level);
                    re.is_match(&p.title) || re.is_match(&p.job_description)
                }
                None => true,
            })
            .take(self.limit)
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
