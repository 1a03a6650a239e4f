//! User account form shared by "New user" and "Add user to company".

use contracts::system::users::CreateUserDto;

use crate::shared::validation::{
    check, parse_email, parse_min_length, parse_required, ValidationErrors,
};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
    Password,
    FullName,
}

impl UserField {
    pub fn key(&self) -> &'static str {
        match self {
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Password => "password",
            UserField::FullName => "full_name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserField::Username => "Username",
            UserField::Email => "Email",
            UserField::Password => "Password",
            UserField::FullName => "Full name",
        }
    }

    pub fn get<'a>(&self, form: &'a UserForm) -> &'a str {
        match self {
            UserField::Username => &form.username,
            UserField::Email => &form.email,
            UserField::Password => &form.password,
            UserField::FullName => &form.full_name,
        }
    }

    pub fn set(&self, form: &mut UserForm, value: String) {
        match self {
            UserField::Username => form.username = value,
            UserField::Email => form.email = value,
            UserField::Password => form.password = value,
            UserField::FullName => form.full_name = value,
        }
    }
}

/// Request body for a valid form, or every field error
pub fn build_user_dto(form: &UserForm) -> Result<CreateUserDto, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let username = check(
        &mut errors,
        UserField::Username.key(),
        parse_required(&form.username, UserField::Username.label()),
    );
    let email = check(
        &mut errors,
        UserField::Email.key(),
        parse_email(&form.email, UserField::Email.label()),
    );
    let password = check(
        &mut errors,
        UserField::Password.key(),
        parse_min_length(&form.password, UserField::Password.label(), MIN_PASSWORD_LEN),
    );

    match (username, email, password) {
        (Some(username), Some(email), Some(password)) if errors.is_empty() => Ok(CreateUserDto {
            username,
            password,
            email,
            full_name: Some(form.full_name.trim().to_string()).filter(|n| !n.is_empty()),
            is_admin: form.is_admin,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            password: "s3cret-pass".into(),
            full_name: "  ".into(),
            is_admin: true,
        }
    }

    #[test]
    fn valid_form_builds_dto() {
        let dto = build_user_dto(&filled()).unwrap();
        assert_eq!(dto.username, "jdoe");
        assert_eq!(dto.full_name, None);
        assert!(dto.is_admin);
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = build_user_dto(&UserForm::default()).unwrap_err();
        assert!(errors.contains("username"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
        assert!(!errors.contains("full_name"));
    }

    #[test]
    fn email_needs_a_dot_after_the_at() {
        let mut form = filled();
        form.email = "jdoe@localhost".into();
        assert!(build_user_dto(&form).unwrap_err().contains("email"));
    }

    #[test]
    fn password_needs_eight_characters() {
        let mut form = filled();
        form.password = "short".into();
        let errors = build_user_dto(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("password"));

        form.password = "12345678".into();
        assert!(build_user_dto(&form).is_ok());
    }
}
