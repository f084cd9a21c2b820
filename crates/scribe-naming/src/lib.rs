//! Naming rules for scribe.
//!
//! Validation for the user-visible identifiers that appear in URLs (group
//! slugs and usernames), sanitizing of uploaded file names, and the naming
//! scheme for indexes and constraints used by the DDL generator.

use thiserror::Error;

/// Longest slug a group may carry.
pub const SLUG_MAX_LEN: usize = 50;

/// Longest username a user may carry.
pub const USERNAME_MAX_LEN: usize = 150;

/// Longest stem kept from an uploaded file name.
pub const UPLOAD_STEM_MAX_LEN: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("This field cannot be blank.")]
    Blank,
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },
    #[error("Enter a valid “slug” consisting of letters, numbers, underscores or hyphens.")]
    InvalidSlug,
    #[error(
        "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
    )]
    InvalidUsername,
}

// ============================================================================
// URL identifiers
// ============================================================================

/// Validate a group slug: ASCII letters, digits, `-` and `_`.
pub fn validate_slug(slug: &str) -> Result<(), NameError> {
    check_length(slug, SLUG_MAX_LEN)?;
    if slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(NameError::InvalidSlug)
    }
}

/// Validate a username: letters, digits, and `@ . + - _`.
///
/// Letters and digits may be any Unicode alphanumerics.
pub fn validate_username(username: &str) -> Result<(), NameError> {
    check_length(username, USERNAME_MAX_LEN)?;
    if username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        Ok(())
    } else {
        Err(NameError::InvalidUsername)
    }
}

fn check_length(value: &str, max: usize) -> Result<(), NameError> {
    let actual = value.chars().count();
    if actual == 0 {
        return Err(NameError::Blank);
    }
    if actual > max {
        return Err(NameError::TooLong { max, actual });
    }
    Ok(())
}

// ============================================================================
// Uploads
// ============================================================================

/// Reduce a client-supplied file name to a safe stem.
///
/// Drops any directory part and the extension, turns whitespace runs into
/// `_`, and removes everything except alphanumerics, `-` and `_`. Falls back
/// to `image` when nothing survives.
pub fn sanitize_upload_stem(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let stem = match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    };

    let cleaned: String = stem
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(UPLOAD_STEM_MAX_LEN)
        .collect();

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

// ============================================================================
// Constraint Naming (for SQL generation)
// ============================================================================

/// Format: ix_{table}__{col1}_{col2}...
pub fn build_index_name(table: &str, columns: &[String]) -> String {
    format!("ix_{}__{}", table, columns.join("_"))
}

/// Format: uq_{table}__{col1}_{col2}...
pub fn build_unique_constraint_name(table: &str, columns: &[String]) -> String {
    format!("uq_{}__{}", table, columns.join("_"))
}

/// Format: fk_{table}__{col1}_{col2}...
pub fn build_foreign_key_name(table: &str, columns: &[String]) -> String {
    format!("fk_{}__{}", table, columns.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cats")]
    #[case("CIA")]
    #[case("rust-lang_2024")]
    fn test_validate_slug_accepts(#[case] slug: &str) {
        assert_eq!(validate_slug(slug), Ok(()));
    }

    #[rstest]
    #[case("", NameError::Blank)]
    #[case("with space", NameError::InvalidSlug)]
    #[case("naïve", NameError::InvalidSlug)]
    #[case("a/b", NameError::InvalidSlug)]
    fn test_validate_slug_rejects(#[case] slug: &str, #[case] expected: NameError) {
        assert_eq!(validate_slug(slug), Err(expected));
    }

    #[test]
    fn test_validate_slug_too_long() {
        let slug = "a".repeat(SLUG_MAX_LEN + 1);
        assert_eq!(
            validate_slug(&slug),
            Err(NameError::TooLong {
                max: SLUG_MAX_LEN,
                actual: SLUG_MAX_LEN + 1
            })
        );
    }

    #[rstest]
    #[case("JohnDoe")]
    #[case("doe.j@cia.gov")]
    #[case("ping+pong-_")]
    #[case("Пинг")]
    fn test_validate_username_accepts(#[case] username: &str) {
        assert_eq!(validate_username(username), Ok(()));
    }

    #[rstest]
    #[case("john doe")]
    #[case("john/doe")]
    #[case("john?")]
    fn test_validate_username_rejects(#[case] username: &str) {
        assert_eq!(validate_username(username), Err(NameError::InvalidUsername));
    }

    #[rstest]
    #[case("photo.jpeg", "photo")]
    #[case("my holiday  photo.PNG", "my_holiday_photo")]
    #[case("../../etc/passwd", "passwd")]
    #[case("C:\\Users\\me\\cat.gif", "cat")]
    #[case(".hidden", "hidden")]
    #[case("???.png", "image")]
    #[case("", "image")]
    fn test_sanitize_upload_stem(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_upload_stem(input), expected);
    }

    #[test]
    fn test_sanitize_upload_stem_truncates() {
        let long = format!("{}.png", "x".repeat(200));
        assert_eq!(sanitize_upload_stem(&long).len(), UPLOAD_STEM_MAX_LEN);
    }

    #[test]
    fn test_constraint_names() {
        let cols = vec!["user_id".to_string(), "author_id".to_string()];
        assert_eq!(build_index_name("posts", &["pub_date".into()]), "ix_posts__pub_date");
        assert_eq!(
            build_unique_constraint_name("follows", &cols),
            "uq_follows__user_id_author_id"
        );
        assert_eq!(
            build_foreign_key_name("follows", &cols[..1]),
            "fk_follows__user_id"
        );
    }
}
