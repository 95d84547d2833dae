//! Interactive form prompts with client-side validation
//!
//! Validation runs before any request is sent: required text fields carry
//! minimum lengths, percentage-like numbers are clamped to [0, 100], and
//! selection fields are menus over closed enumerations so free text is
//! impossible. Sentiment-like fields are conventionally -1..1 but not
//! enforced, matching the backend.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

/// Minimum length for titles, names, and themes
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum length for short labels (stat cards, metric labels)
pub const MIN_LABEL_LEN: usize = 2;

/// Minimum length for descriptions and recommendations
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Validate a required text field against its minimum length.
///
/// Used for flag-provided values; interactive prompts enforce the same
/// rule inline through `validate_with`.
pub fn validate_text(field: &str, value: &str, min_len: usize) -> Result<()> {
    if value.trim().len() < min_len {
        Err(miette::miette!(
            "{} must be at least {} characters",
            field,
            min_len
        ))
    } else {
        Ok(())
    }
}

/// Clamp a percentage-like value into [0, 100]
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Prompt for required text with a minimum length
pub fn input_text(prompt: &str, default: Option<&str>, min_len: usize) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .validate_with(move |value: &String| -> Result<(), String> {
            if value.trim().len() < min_len {
                Err(format!("Min {} characters", min_len))
            } else {
                Ok(())
            }
        });
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let value = input.interact_text().into_diagnostic()?;
    Ok(value.trim().to_string())
}

/// Prompt for optional free text (blank allowed)
pub fn input_optional_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
    }
    let value = input.interact_text().into_diagnostic()?;
    Ok(value.trim().to_string())
}

/// Prompt for a number; dialoguer re-prompts until it parses
pub fn input_f64(prompt: &str, default: f64) -> Result<f64> {
    let theme = ColorfulTheme::default();
    Input::<f64>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .into_diagnostic()
}

/// Prompt for a percentage, clamped to [0, 100]
pub fn input_percent(prompt: &str, default: f64) -> Result<f64> {
    Ok(clamp_percent(input_f64(prompt, default)?))
}

/// Prompt for a non-negative count
pub fn input_u64(prompt: &str, default: u64) -> Result<u64> {
    let theme = ColorfulTheme::default();
    Input::<u64>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .into_diagnostic()
}

/// Prompt for a display order value
pub fn input_i64(prompt: &str, default: i64) -> Result<i64> {
    let theme = ColorfulTheme::default();
    Input::<i64>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .into_diagnostic()
}

/// Select one variant from a closed enumeration
pub fn select_one<T>(prompt: &str, options: &[T], current: T) -> Result<T>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let theme = ColorfulTheme::default();
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let default_idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()
        .into_diagnostic()?;
    Ok(options[selection])
}

/// Yes/no confirmation
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let theme = ColorfulTheme::default();
    Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .into_diagnostic()
}

/// Edit an ordered list through an add/remove loop.
///
/// Entries stay in insertion order and duplicates are permitted. `render`
/// produces the one-line summary shown per entry; `add` prompts for a new
/// entry.
pub fn edit_list<T>(
    label: &str,
    mut items: Vec<T>,
    render: impl Fn(&T) -> String,
    mut add: impl FnMut() -> Result<T>,
) -> Result<Vec<T>> {
    let theme = ColorfulTheme::default();
    loop {
        if items.is_empty() {
            println!("  {} (none)", style(label).dim());
        } else {
            println!("  {}:", style(label).dim());
            for (i, item) in items.iter().enumerate() {
                println!("    {}. {}", i + 1, render(item));
            }
        }

        let choices = ["Add", "Remove", "Done"];
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("Edit {}", label))
            .items(&choices)
            .default(2)
            .interact()
            .into_diagnostic()?;

        match choice {
            0 => items.push(add()?),
            1 => {
                if items.is_empty() {
                    continue;
                }
                let labels: Vec<String> = items.iter().map(&render).collect();
                let idx = Select::with_theme(&theme)
                    .with_prompt("Remove which entry?")
                    .items(&labels)
                    .default(0)
                    .interact()
                    .into_diagnostic()?;
                items.remove(idx);
            }
            _ => break,
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_min_length() {
        assert!(validate_text("Title", "ok", MIN_TITLE_LEN).is_err());
        assert!(validate_text("Title", "long enough", MIN_TITLE_LEN).is_ok());
        // Whitespace padding doesn't satisfy the minimum
        assert!(validate_text("Title", "a    ", MIN_TITLE_LEN).is_err());
    }

    #[test]
    fn test_validate_description_length() {
        assert!(validate_text("Description", "too short", MIN_DESCRIPTION_LEN).is_err());
        assert!(validate_text("Description", "detailed enough to pass", MIN_DESCRIPTION_LEN).is_ok());
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(50.0), 50.0);
        assert_eq!(clamp_percent(150.0), 100.0);
    }
}
