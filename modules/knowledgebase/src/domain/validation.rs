//! Settings form validation
//!
//! Pure functions: the validator maps a raw form plus the previously
//! persisted settings to a new settings record and a status. Each field is
//! validated independently - one field's failure never blocks another's
//! update, it only keeps that field on its previous value and appends a
//! message.

use crate::contract::{RawSettingsForm, Settings, SettingsStatus};

/// Maximum length of a content-type slug
pub const MAX_POST_TYPE_LEN: usize = 20;

/// Trailing message appended when every field validated cleanly
pub const SUCCESS_MESSAGE: &str = "Your settings have been saved.";

/// Field-level validation failures
///
/// These never abort a submission; they degrade to "keep previous value,
/// record message".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Menu page title is empty after sanitizing
    EmptyTitle,
    /// Menu position parsed below zero
    NegativePosition,
    /// Content-type slug longer than `MAX_POST_TYPE_LEN` after stripping
    TooLong,
    /// Content-type slug empty after stripping
    Empty,
}

impl FieldError {
    /// The admin-facing message for this failure
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Menu page title cannot be empty",
            Self::NegativePosition => "Menu position cannot be negative",
            Self::TooLong => "Post type name cannot be longer than 20 characters",
            Self::Empty => "Post type cannot be empty",
        }
    }
}

/// Validate a raw form against the previous settings
///
/// Returns the reconciled record (failed fields fall back to their previous
/// values) and a fresh status. `status.status` is true, with a trailing
/// success message appended, only when every field validated cleanly.
pub fn validate(raw: &RawSettingsForm, prev: &Settings) -> (Settings, SettingsStatus) {
    let mut status = SettingsStatus::new();
    let mut save = prev.clone();

    match validate_menu_page_title(raw.menu_page_title.as_deref().unwrap_or_default()) {
        Ok(title) => save.menu_page_title = title,
        Err(e) => status.messages.push(e.message().to_string()),
    }

    match validate_menu_position(raw.menu_position.as_deref().unwrap_or_default()) {
        Ok(position) => save.menu_position = position,
        Err(e) => status.messages.push(e.message().to_string()),
    }

    // hide_menu has no failure path: absent means unchecked
    save.hide_menu = parse_checkbox(raw.hide_menu.as_deref());

    match validate_post_type(raw.post_type.as_deref().unwrap_or_default()) {
        Ok(post_type) => save.post_type = post_type,
        Err(e) => status.messages.push(e.message().to_string()),
    }

    if status.messages.is_empty() {
        status.status = true;
        status.messages.push(SUCCESS_MESSAGE.to_string());
    }

    (save, status)
}

/// Sanitize and check the menu page title
pub fn validate_menu_page_title(raw: &str) -> Result<String, FieldError> {
    let title = sanitize_text(raw);
    let title = title.trim();
    if title.is_empty() {
        Err(FieldError::EmptyTitle)
    } else {
        Ok(title.to_string())
    }
}

/// Parse and check the menu position
pub fn validate_menu_position(raw: &str) -> Result<i64, FieldError> {
    let position = loose_int(raw);
    if position < 0 {
        Err(FieldError::NegativePosition)
    } else {
        Ok(position)
    }
}

/// Checkbox semantics: present and loosely parsing to a positive integer
pub fn parse_checkbox(raw: Option<&str>) -> bool {
    raw.map(|v| loose_int(v) > 0).unwrap_or(false)
}

/// Normalize and check the content-type slug
///
/// Lower-cases the input and strips every character outside `[a-z0-9_]`
/// before applying the length rules.
pub fn validate_post_type(raw: &str) -> Result<String, FieldError> {
    let slug: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if slug.len() > MAX_POST_TYPE_LEN {
        Err(FieldError::TooLong)
    } else if slug.is_empty() {
        Err(FieldError::Empty)
    } else {
        Ok(slug)
    }
}

/// Strip markup and control characters, leaving plain text
///
/// Everything between `<` and the next `>` is removed; an unterminated tag
/// swallows the rest of the input. ASCII control characters are dropped.
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ if c.is_control() => {}
            _ => out.push(c),
        }
    }
    out
}

/// Loose integer cast: optional sign plus leading digits, anything else is 0
///
/// Mirrors the permissive form-input coercion of the hosting platform:
/// `"5"` is 5, `"5abc"` is 5, `"-3"` is -3, `"abc"` and `""` are 0.
pub fn loose_int(raw: &str) -> i64 {
    let s = raw.trim();
    let mut chars = s.char_indices();
    let mut end = 0;
    let mut saw_digit = false;
    if let Some((_, c)) = chars.next() {
        if c == '+' || c == '-' || c.is_ascii_digit() {
            saw_digit = c.is_ascii_digit();
            end = c.len_utf8();
            for (i, c) in chars {
                if c.is_ascii_digit() {
                    saw_digit = true;
                    end = i + c.len_utf8();
                } else {
                    break;
                }
            }
        }
    }
    if !saw_digit {
        return 0;
    }
    s[..end].parse().unwrap_or(0)
}
