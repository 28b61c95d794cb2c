//! 表单校验
//!
//! 校验失败的表单不会发出请求。错误按字段收集，界面逐项展示。

use crate::error::AppError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";
const PHONE_PATTERN: &str = r"^[0-9]{10}$";

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn phone_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).ok()).as_ref()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value.trim()))
}

/// 恰好 10 位数字
pub fn is_valid_phone(value: &str) -> bool {
    phone_regex().is_some_and(|re| re.is_match(value.trim()))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// =========================================================
// FieldErrors
// =========================================================

/// 字段名 -> 错误消息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一字段只保留第一条错误
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn require(&mut self, field: &'static str, value: &str, label: &str) {
        if is_blank(value) {
            self.add(field, format!("{} is required", label));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        let message = errors
            .0
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "Invalid input".to_string());
        AppError::validation(message)
    }
}

// =========================================================
// 登录 / 注册
// =========================================================

/// 登录与注册共用的凭据校验
pub fn validate_credentials(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(email) {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Enter a valid email address");
    }
    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
    errors.into_result()
}

// =========================================================
// 技师入驻
// =========================================================

/// 技师入驻第一步的表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub skills: String,
    /// 原始输入，空字符串表示未填写
    pub experience_years: String,
}

impl OnboardingForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.name) {
            errors.add("name", "Name is required");
        } else if self.name.trim().chars().count() < MIN_NAME_LEN {
            errors.add(
                "name",
                format!("Name must be at least {} characters", MIN_NAME_LEN),
            );
        }

        if is_blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Enter a valid email address");
        }

        if is_blank(&self.phone) {
            errors.add("phone", "Phone is required");
        } else if !is_valid_phone(&self.phone) {
            errors.add("phone", "Phone must be exactly 10 digits");
        }

        errors.require("city", &self.city, "City");
        errors.require("skills", &self.skills, "Skills");

        match self.experience_years.trim() {
            "" => errors.add("experience_years", "Experience is required"),
            raw => match raw.parse::<i64>() {
                Ok(years) if years >= 0 => {}
                Ok(_) => errors.add("experience_years", "Experience cannot be negative"),
                Err(_) => errors.add("experience_years", "Experience must be a number"),
            },
        }

        errors.into_result()
    }

    /// 逗号分隔的技能列表
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 入驻步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Details,
    Documents,
}

impl OnboardingStep {
    /// 第一步通过校验才能前进
    pub fn next(self, form: &OnboardingForm) -> Result<Self, FieldErrors> {
        match self {
            OnboardingStep::Details => form.validate().map(|_| OnboardingStep::Documents),
            OnboardingStep::Documents => Ok(OnboardingStep::Documents),
        }
    }

    pub fn back(self) -> Self {
        OnboardingStep::Details
    }

    pub fn number(self) -> u8 {
        match self {
            OnboardingStep::Details => 1,
            OnboardingStep::Documents => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_onboarding() -> OnboardingForm {
        OnboardingForm {
            name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            city: "Pune".into(),
            skills: "AC, Plumbing".into(),
            experience_years: "0".into(),
        }
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a.b+c@mail.example.com"));
        assert!(is_valid_email(" user@host "));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("a@b.com", "123456").is_ok());
        let errs = validate_credentials("bad", "12345").unwrap_err();
        assert!(errs.has("email"));
        assert!(errs.has("password"));
        let errs = validate_credentials("", "").unwrap_err();
        assert_eq!(errs.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_onboarding_valid_form_advances() {
        let form = valid_onboarding();
        assert_eq!(
            OnboardingStep::Details.next(&form),
            Ok(OnboardingStep::Documents)
        );
        assert_eq!(form.skill_list(), vec!["AC", "Plumbing"]);
        assert_eq!(OnboardingStep::Documents.back(), OnboardingStep::Details);
    }

    #[test]
    fn test_onboarding_rejections() {
        let mut form = valid_onboarding();
        form.name = "R".into();
        form.phone = "98765 4321".into();
        form.experience_years = "-1".into();
        form.city = "  ".into();

        let errs = OnboardingStep::Details.next(&form).unwrap_err();

        assert!(errs.has("name"));
        assert!(errs.has("phone"));
        assert!(errs.has("experience_years"));
        assert!(errs.has("city"));
        assert!(!errs.has("email"));
        assert_eq!(errs.len(), 4);

        let err: AppError = errs.into();
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn test_phone_requires_exactly_ten_digits() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("012345678"));
        assert!(!is_valid_phone("01234567890"));
        assert!(!is_valid_phone("01234abcde"));
    }
}
