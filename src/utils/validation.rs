use crate::domain::model::{UserProfile, UNKNOWN_HOUR};
use crate::utils::error::{BaziError, Result};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use url::Url;

pub const MIN_BIRTH_YEAR: i32 = 1900;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BaziError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BaziError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn form_error(field: &str, message: &str) -> BaziError {
    BaziError::ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Days offered for a month. Lunar months are always offered 30 days.
pub fn days_in_month(year: i32, month: u32, is_lunar: bool) -> u32 {
    if is_lunar {
        return 30;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(form_error("phone", "请输入电话号码"));
    }
    let re = Regex::new(r"^\d{5,15}$").map_err(|e| BaziError::ConfigError {
        message: format!("invalid phone pattern: {}", e),
    })?;
    if !re.is_match(trimmed) {
        return Err(form_error("phone", "请输入有效的电话号码"));
    }
    Ok(())
}

/// Form-layer checks. The calculator itself accepts anything.
impl Validate for UserProfile {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(form_error("name", "请输入您的姓名"));
        }

        let current_year = Local::now().year();
        if self.birth_year < MIN_BIRTH_YEAR || self.birth_year > current_year {
            return Err(form_error("birthYear", "请选择出生年份"));
        }

        if !(1..=12).contains(&self.birth_month) {
            return Err(form_error("birthMonth", "请选择出生月份"));
        }

        let max_day = days_in_month(self.birth_year, self.birth_month, self.is_lunar);
        if self.birth_day < 1 || self.birth_day > max_day {
            return Err(form_error("birthDay", "请选择出生日期"));
        }

        if self.birth_hour > UNKNOWN_HOUR {
            return Err(form_error("birthHour", "请选择出生时辰"));
        }

        if self.birth_place.trim().is_empty() {
            return Err(form_error("birthPlace", "请输入出生地点"));
        }

        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }

        Ok(())
    }
}
