use chrono::{Datelike, NaiveDate};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PROFILE_FILE: &str = "profile.json";

pub static BUILD_DATE: LazyLock<NaiveDate> = LazyLock::new(|| {
    NaiveDate::parse_from_str(env!("BUILD_DATE"), "%Y-%m-%d")
        .expect("build script should emit BUILD_DATE as YYYY-MM-DD")
});

pub static GLOBAL_PROFILE: LazyLock<Result<Profile, ProfileError>> =
    LazyLock::new(|| load(PROFILE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Profile content not found: {0}")]
    Missing(String),
    #[error("Couldn't parse profile content: {0}")]
    Parse(String),
    #[error("Skill {name} has level {level}, expected 0-100")]
    InvalidSkillLevel { name: String, level: u8 },
    #[error("Position {title} ends before it starts")]
    InvalidPeriod { title: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub avatar: AvatarImage,
    pub resume_file: String,
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Position>,
    pub expertise: Vec<String>,
    pub summary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub start: NaiveDate,
    /// `None` for the current position.
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub description: String,
    pub skills: Vec<String>,
}

impl Profile {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProfileError> {
        serde_json::from_slice(bytes).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ProfileError::InvalidSkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        if let Some(position) = self
            .experience
            .iter()
            .find(|p| p.end.is_some_and(|end| end < p.start))
        {
            return Err(ProfileError::InvalidPeriod {
                title: position.title.clone(),
            });
        }
        Ok(())
    }
}

impl Position {
    /// e.g. "Sep 2022 - Present · 2 yrs 5 mos"
    pub fn period(&self, today: NaiveDate) -> String {
        let start = self.start.format("%b %Y");
        let (end_label, end) = match self.end {
            Some(end) => (end.format("%b %Y").to_string(), end),
            None => ("Present".to_string(), today),
        };
        format!("{start} - {end_label} · {}", tenure(self.start, end))
    }
}

/// Months between two dates, counting both the first and last month.
pub fn tenure(start: NaiveDate, end: NaiveDate) -> String {
    let month_index = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
    let months = (month_index(end) - month_index(start) + 1).max(1);
    let (years, months) = (months / 12, months % 12);

    let plural = |n: i32, one: &str, many: &str| {
        if n == 1 {
            format!("{n} {one}")
        } else {
            format!("{n} {many}")
        }
    };
    match (years, months) {
        (0, m) => plural(m, "mo", "mos"),
        (y, 0) => plural(y, "yr", "yrs"),
        (y, m) => format!("{} {}", plural(y, "yr", "yrs"), plural(m, "mo", "mos")),
    }
}

fn load(name: &str) -> Result<Profile, ProfileError> {
    let file = Content::get(name).ok_or_else(|| ProfileError::Missing(name.to_string()))?;
    let profile = Profile::from_json(&file.data)?;
    profile.validate()?;
    Ok(profile)
}

pub fn get_profile() -> Result<&'static Profile, ProfileError> {
    GLOBAL_PROFILE.as_ref().map_err(Clone::clone)
}
