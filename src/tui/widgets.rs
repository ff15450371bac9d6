use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::error::FormError;
use crate::forms::{FieldKind, Form, FormField};
use crate::skills::SkillTags;
use crate::theme::Theme;

pub fn footer(frame: &mut Frame, area: Rect, help: &str, theme: Theme) {
    let help = Paragraph::new(format!(" {}", help)).style(theme.muted());
    frame.render_widget(help, area);
}

/// Body above a one-line help footer.
pub fn split_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Yes/no box drawn on top of the current screen.
pub fn confirm_dialog(frame: &mut Frame, prompt: &str, theme: Theme) {
    let area = centered(frame.area(), 60, 5);
    frame.render_widget(Clear, area);
    let text = Text::from(vec![
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::from(Span::styled("y: yes   n/Esc: no", theme.muted())),
    ]);
    let dialog = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Confirm "))
        .style(theme.base())
        .wrap(Wrap { trim: true });
    frame.render_widget(dialog, area);
}

pub fn next_focus(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

/// Routes one key to the focused field. Returns false when the key means
/// nothing to that field so the caller can handle it.
pub fn edit_field<F: Form>(form: &mut F, field: F::Field, key: KeyEvent) -> bool {
    match field.kind() {
        FieldKind::Text | FieldKind::LongText | FieldKind::File => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = form.value(field);
                value.push(c);
                form.set_text(field, value);
                true
            }
            KeyCode::Backspace => {
                let mut value = form.value(field);
                value.pop();
                form.set_text(field, value);
                true
            }
            _ => false,
        },
        FieldKind::Select => match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                form.cycle(field, true);
                true
            }
            KeyCode::Left => {
                form.cycle(field, false);
                true
            }
            _ => false,
        },
        FieldKind::Toggle => match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                form.cycle(field, true);
                true
            }
            _ => false,
        },
        FieldKind::Tags => false,
    }
}

/// One line per field: label, value, and a marker when the last submit
/// found it empty. `tags` is the tag list and pending input of a `Tags` field.
pub fn form_lines<F: Form>(
    form: &F,
    focus: usize,
    error: Option<&FormError>,
    tags: Option<(&SkillTags, &str)>,
    theme: Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, field) in F::Field::ALL.iter().copied().enumerate() {
        let focused = i == focus;
        let marker = if field.marked() { " *" } else { "" };
        let label_style = if focused { theme.selected() } else { theme.bold() };
        let value = form.value(field);

        let mut spans = vec![
            Span::styled(format!("{}{}", field.label(), marker), label_style),
            Span::raw(": "),
        ];
        match field.kind() {
            FieldKind::Select => {
                let shown = if value.is_empty() { "Select an option".to_string() } else { value };
                spans.push(Span::raw(format!("< {} >", shown)));
            }
            FieldKind::Toggle => {
                let mark = if value == "yes" { "[x]" } else { "[ ]" };
                spans.push(Span::raw(mark.to_string()));
            }
            FieldKind::Tags => {
                if let Some((tags, input)) = tags {
                    for tag in tags.as_slice() {
                        spans.push(Span::styled(format!("[{}] ", tag), theme.accent()));
                    }
                    spans.push(Span::raw(format!("+ {}", input)));
                }
            }
            FieldKind::File if value.is_empty() => {
                spans.push(Span::styled("(type a file path)".to_string(), theme.muted()));
            }
            _ => spans.push(Span::raw(value)),
        }
        if focused && matches!(field.kind(), FieldKind::Text | FieldKind::LongText | FieldKind::File | FieldKind::Tags) {
            spans.push(Span::styled("_", theme.accent()));
        }
        if error.is_some_and(|e| e.is_missing(field.label())) {
            spans.push(Span::styled("  required", theme.error()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ApplicationField, ApplicationForm, JobPostField, JobPostForm};
    use crate::models::Experience;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_into_text_field() {
        let mut form = ApplicationForm::default();
        for c in "Ann".chars() {
            assert!(edit_field(&mut form, ApplicationField::FullName, key(KeyCode::Char(c))));
        }
        edit_field(&mut form, ApplicationField::FullName, key(KeyCode::Backspace));
        assert_eq!(form.full_name, "An");
    }

    #[test]
    fn test_select_cycles_with_arrows() {
        let mut form = ApplicationForm::default();
        edit_field(&mut form, ApplicationField::YearsOfExperience, key(KeyCode::Right));
        edit_field(&mut form, ApplicationField::YearsOfExperience, key(KeyCode::Right));
        assert_eq!(form.years_of_experience, Some(Experience::OneToThree));
        assert!(!edit_field(&mut form, ApplicationField::YearsOfExperience, key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_tags_field_is_left_to_caller() {
        let mut form = JobPostForm::default();
        assert!(!edit_field(&mut form, JobPostField::Skills, key(KeyCode::Char('a'))));
        assert!(edit_field(&mut form, JobPostField::Remote, key(KeyCode::Char(' '))));
        assert!(form.remote);
    }

    #[test]
    fn test_form_lines_flag_missing_fields() {
        let form = ApplicationForm::default();
        let err = form.validate().unwrap_err();
        let lines = form_lines(&form, 0, Some(&err), None, Theme::Dark);
        assert_eq!(lines.len(), ApplicationField::ALL.len());
        let text = |l: &Line| l.spans.iter().map(|s| s.content.to_string()).collect::<String>();
        assert!(text(&lines[0]).contains("required"));
        assert!(!text(&lines[2]).contains("required"));
    }

    #[test]
    fn test_tag_chips_come_from_the_tag_list() {
        let mut form = JobPostForm::default();
        form.skills.add("NLP, LLMs");
        form.skills.add("Rust");
        let lines = form_lines(&form, 0, None, Some((&form.skills, "Py")), Theme::Dark);
        let skills = JobPostField::ALL
            .iter()
            .position(|f| *f == JobPostField::Skills)
            .unwrap();
        let chips: Vec<String> = lines[skills]
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .filter(|c| c.starts_with('['))
            .collect();
        assert_eq!(chips, vec!["[NLP, LLMs] ".to_string(), "[Rust] ".to_string()]);
        assert!(lines[skills].spans.iter().any(|s| s.content == "+ Py"));
    }

    #[test]
    fn test_next_focus_wraps() {
        assert_eq!(next_focus(2, 3, true), 0);
        assert_eq!(next_focus(0, 3, false), 2);
        assert_eq!(next_focus(0, 0, true), 0);
    }
}
