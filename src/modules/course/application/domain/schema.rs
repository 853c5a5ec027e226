use crate::shared::storage::StorageFault;

use super::entities::Skill;

/// Course fields as submitted, or a stored course with a patch merged over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<String>,
    pub tuition: Option<i32>,
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidCourse {
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: i32,
    pub minimum_skill: Skill,
    pub scholarship_available: bool,
}

pub fn validate_course(draft: CourseDraft) -> Result<ValidCourse, StorageFault> {
    let mut errors = Vec::new();

    let title = required(draft.title, "Please add a course title", &mut errors);
    let description = required(draft.description, "Please add a description", &mut errors);
    let weeks = required(draft.weeks, "Please add number of weeks", &mut errors);

    if draft.tuition.is_none() {
        errors.push("Please add a tuition cost".to_string());
    }

    let minimum_skill = draft
        .minimum_skill
        .as_deref()
        .and_then(|s| s.trim().parse::<Skill>().ok());
    if minimum_skill.is_none() {
        errors.push(
            "Please add a minimum skill (beginner, intermediate or advanced)".to_string(),
        );
    }

    match (title, description, weeks, draft.tuition, minimum_skill) {
        (Some(title), Some(description), Some(weeks), Some(tuition), Some(minimum_skill))
            if errors.is_empty() =>
        {
            Ok(ValidCourse {
                title,
                description,
                weeks,
                tuition,
                minimum_skill,
                scholarship_available: draft.scholarship_available.unwrap_or(false),
            })
        }
        _ => Err(StorageFault::Validation(errors)),
    }
}

fn required(value: Option<String>, message: &str, errors: &mut Vec<String>) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}
