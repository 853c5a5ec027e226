use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

use crate::shared::storage::StorageFault;

use super::entities::CAREERS;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_PHONE_LEN: usize = 20;

static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap_or_else(|e| unreachable!("website pattern: {e}"))
});

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").unwrap_or_else(|e| unreachable!("slug pattern: {e}"))
});

/// Bootcamp fields as submitted on create; anything may be missing.
#[derive(Debug, Clone, Default)]
pub struct BootcampDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

/// The schema-checked text fields of a bootcamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootcampFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub careers: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidBootcamp {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub careers: Vec<String>,
}

/// Create-time validation: the stored fields plus the address to geocode.
pub fn validate_new_bootcamp(
    draft: &BootcampDraft,
) -> Result<(ValidBootcamp, String), StorageFault> {
    let mut errors = Vec::new();

    let valid = check_fields(
        BootcampFields {
            name: draft.name.clone(),
            description: draft.description.clone(),
            website: draft.website.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            careers: draft.careers.clone(),
        },
        &mut errors,
    );

    let address = match draft.address.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => Some(a.to_string()),
        _ => {
            errors.push("Please add an address".to_string());
            None
        }
    };

    match (valid, address) {
        (Some(valid), Some(address)) if errors.is_empty() => Ok((valid, address)),
        _ => Err(StorageFault::Validation(errors)),
    }
}

/// Validation of a stored bootcamp after a patch has been merged over it.
pub fn validate_bootcamp(fields: BootcampFields) -> Result<ValidBootcamp, StorageFault> {
    let mut errors = Vec::new();

    match check_fields(fields, &mut errors) {
        Some(valid) if errors.is_empty() => Ok(valid),
        _ => Err(StorageFault::Validation(errors)),
    }
}

/// `"Devworks Bootcamp!"` -> `"devworks-bootcamp"`
pub fn slugify(name: &str) -> String {
    NON_SLUG
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

fn check_fields(fields: BootcampFields, errors: &mut Vec<String>) -> Option<ValidBootcamp> {
    let name = match trimmed(fields.name) {
        None => {
            errors.push("Please add a name".to_string());
            None
        }
        Some(n) if n.chars().count() > MAX_NAME_LEN => {
            errors.push("Name can not be more than 50 characters".to_string());
            None
        }
        Some(n) => Some(n),
    };

    let description = match trimmed(fields.description) {
        None => {
            errors.push("Please add a description".to_string());
            None
        }
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LEN => {
            errors.push("Description can not be more than 500 characters".to_string());
            None
        }
        Some(d) => Some(d),
    };

    let website = trimmed(fields.website);
    if matches!(&website, Some(w) if !WEBSITE.is_match(w)) {
        errors.push("Please use a valid URL with HTTP or HTTPS".to_string());
    }

    let phone = trimmed(fields.phone);
    if matches!(&phone, Some(p) if p.chars().count() > MAX_PHONE_LEN) {
        errors.push("Phone number can not be longer than 20 characters".to_string());
    }

    let email = trimmed(fields.email);
    if matches!(&email, Some(e) if !EmailAddress::is_valid(e)) {
        errors.push("Please add a valid email".to_string());
    }

    let careers = fields.careers.unwrap_or_default();
    if careers.is_empty() {
        errors.push("Please add at least one career".to_string());
    }
    for career in careers.iter().filter(|c| !CAREERS.contains(&c.as_str())) {
        errors.push(format!("{} is not a supported career", career));
    }

    let (name, description) = (name?, description?);

    Some(ValidBootcamp {
        slug: slugify(&name),
        name,
        description,
        website,
        phone,
        email,
        careers,
    })
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
