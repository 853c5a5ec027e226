use email_address::EmailAddress;

use crate::shared::storage::StorageFault;

use super::entities::Role;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Account fields as submitted; anything may be missing.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Who is creating the account decides which roles are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePolicy {
    SelfRegistration,
    Administrator,
}

pub fn validate_new_user(draft: UserDraft, policy: RolePolicy) -> Result<ValidUser, StorageFault> {
    let mut errors = Vec::new();

    let name = check_name(draft.name, &mut errors);
    let email = check_email(draft.email, &mut errors);

    let password = match draft.password {
        Some(p) if p.chars().count() >= MIN_PASSWORD_LEN => Some(p),
        _ => {
            errors.push("Please add a password of at least 6 characters".to_string());
            None
        }
    };

    let role = match draft.role.as_deref().map(str::parse::<Role>) {
        None => Some(Role::User),
        Some(Ok(Role::Admin)) if policy == RolePolicy::SelfRegistration => {
            errors.push("Role must be either user or publisher".to_string());
            None
        }
        Some(Ok(role)) => Some(role),
        Some(Err(_)) => {
            errors.push(match policy {
                RolePolicy::SelfRegistration => "Role must be either user or publisher".to_string(),
                RolePolicy::Administrator => {
                    "Role must be one of user, publisher or admin".to_string()
                }
            });
            None
        }
    };

    match (name, email, password, role) {
        (Some(name), Some(email), Some(password), Some(role)) if errors.is_empty() => {
            Ok(ValidUser {
                name,
                email,
                password,
                role,
            })
        }
        _ => Err(StorageFault::Validation(errors)),
    }
}

/// Name and email after a partial update has been merged.
pub fn validate_details(
    name: Option<String>,
    email: Option<String>,
) -> Result<(String, String), StorageFault> {
    let mut errors = Vec::new();

    let name = check_name(name, &mut errors);
    let email = check_email(email, &mut errors);

    match (name, email) {
        (Some(name), Some(email)) if errors.is_empty() => Ok((name, email)),
        _ => Err(StorageFault::Validation(errors)),
    }
}

/// Admin edit of an account after the patch has been merged.
pub fn validate_account(
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
) -> Result<(String, String, Role), StorageFault> {
    let mut errors = Vec::new();

    let name = check_name(name, &mut errors);
    let email = check_email(email, &mut errors);
    let role = match role.as_deref().map(str::parse::<Role>) {
        Some(Ok(role)) => Some(role),
        _ => {
            errors.push("Role must be one of user, publisher or admin".to_string());
            None
        }
    };

    match (name, email, role) {
        (Some(name), Some(email), Some(role)) if errors.is_empty() => Ok((name, email, role)),
        _ => Err(StorageFault::Validation(errors)),
    }
}

pub fn validate_password(password: &str) -> Result<(), StorageFault> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StorageFault::Validation(vec![
            "Please add a password of at least 6 characters".to_string(),
        ]));
    }
    Ok(())
}

fn check_name(name: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match name.map(|n| n.trim().to_string()) {
        Some(n) if !n.is_empty() => Some(n),
        _ => {
            errors.push("Please add a name".to_string());
            None
        }
    }
}

fn check_email(email: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match email.map(|e| e.trim().to_string()) {
        Some(e) if e.is_empty() => {
            errors.push("Please add an email".to_string());
            None
        }
        None => {
            errors.push("Please add an email".to_string());
            None
        }
        Some(e) if !EmailAddress::is_valid(&e) => {
            errors.push("Please add a valid email".to_string());
            None
        }
        Some(e) => Some(e),
    }
}
