//! Note Form Validation

use crate::models::{NewNote, NoteTag};

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 50;
pub const CONTENT_MAX: usize = 500;

/// Raw form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: String,
}

/// Per-field messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

pub fn validate(draft: &NoteDraft) -> Result<NewNote, FormErrors> {
    let title = draft.title.trim();
    let content = draft.content.trim();
    let tag = NoteTag::parse(&draft.tag);

    let title_len = title.chars().count();
    let errors = FormErrors {
        title: if title.is_empty() {
            Some("Title is required".to_string())
        } else if title_len < TITLE_MIN {
            Some(format!("Title must be at least {} characters", TITLE_MIN))
        } else if title_len > TITLE_MAX {
            Some(format!("Title must be at most {} characters", TITLE_MAX))
        } else {
            None
        },
        content: (content.chars().count() > CONTENT_MAX)
            .then(|| format!("Content must be at most {} characters", CONTENT_MAX)),
        tag: tag.is_none().then(|| "Tag is required".to_string()),
    };

    match tag {
        Some(tag) if errors.is_empty() => Ok(NewNote {
            title: title.to_string(),
            content: content.to_string(),
            tag,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str, tag: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let note = validate(&draft("  Standup  ", " notes ", "Meeting")).unwrap();
        assert_eq!(note.title, "Standup");
        assert_eq!(note.content, "notes");
        assert_eq!(note.tag, NoteTag::Meeting);
    }

    #[test]
    fn test_title_bounds() {
        assert_eq!(
            validate(&draft("", "", "Todo")).unwrap_err().title.as_deref(),
            Some("Title is required")
        );
        assert!(validate(&draft("ab", "", "Todo")).unwrap_err().title.is_some());
        assert!(validate(&draft(&"x".repeat(51), "", "Todo")).unwrap_err().title.is_some());
        assert!(validate(&draft(&"x".repeat(50), "", "Todo")).is_ok());
    }

    #[test]
    fn test_content_limit_counts_chars() {
        assert!(validate(&draft("Title", &"é".repeat(500), "Todo")).is_ok());
        let errors = validate(&draft("Title", &"é".repeat(501), "Todo")).unwrap_err();
        assert!(errors.content.is_some());
        assert!(errors.title.is_none());
    }

    #[test]
    fn test_unknown_tag() {
        let errors = validate(&draft("Title", "", "Urgent")).unwrap_err();
        assert_eq!(errors.tag.as_deref(), Some("Tag is required"));
    }
}
