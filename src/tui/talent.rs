use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

use super::widgets::{edit_field, footer, form_lines, next_focus, split_footer};
use super::{Intent, Route, Term};
use crate::config::Settings;
use crate::error::{BoardError, FormError};
use crate::filter::positions_label;
use crate::forms::{ApplicationField, FormField};
use crate::models::{Choice, EmploymentType, JobListing};
use crate::seed;
use crate::talent::{TalentFlow, TalentView};
use crate::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(250);

struct Screen {
    flow: TalentFlow,
    selected: usize,
    searching: bool,
    focus: usize,
    error: Option<FormError>,
    scroll_offset: u16,
}

impl Screen {
    fn new(flow: TalentFlow) -> Self {
        Self {
            flow,
            selected: 0,
            searching: false,
            focus: 0,
            error: None,
            scroll_offset: 0,
        }
    }

    fn highlighted(&self) -> Option<&JobListing> {
        self.flow.visible().get(self.selected).copied()
    }

    /// Keep the cursor inside the filtered list after criteria change.
    fn clamp_selection(&mut self) {
        let len = self.flow.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn next(&mut self) {
        if self.selected + 1 < self.flow.visible().len() {
            self.selected += 1;
        }
    }

    fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Returns an intent when the key leaves the screen.
    fn handle_key(&mut self, key: KeyEvent, theme: &mut Theme) -> Option<Intent> {
        let result = match self.flow.view() {
            TalentView::Browsing if self.searching => {
                self.handle_search_key(key);
                Ok(())
            }
            TalentView::Browsing => return self.handle_browse_key(key, theme),
            TalentView::Viewing(_) => match key.code {
                KeyCode::Char('q') => return Some(Intent::Quit),
                KeyCode::Char('t') => {
                    theme.toggle();
                    Ok(())
                }
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.flow.back(),
                KeyCode::Enter | KeyCode::Char('a') => {
                    self.focus = 0;
                    self.error = None;
                    self.flow.start_application()
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset = self.scroll_offset.saturating_add(2);
                    Ok(())
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(2);
                    Ok(())
                }
                _ => Ok(()),
            },
            TalentView::Applying(_) => self.handle_form_key(key),
            TalentView::Submitted { .. } => match key.code {
                KeyCode::Char('q') => return Some(Intent::Quit),
                _ => Ok(()),
            },
        };
        match result {
            Ok(()) => {}
            Err(BoardError::Form(err)) => self.error = Some(err),
            Err(err) => tracing::warn!(%err, "ignored key"),
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.searching = false,
            KeyCode::Backspace => {
                self.flow.filter.query.pop();
            }
            KeyCode::Char(c) => self.flow.filter.query.push(c),
            _ => {}
        }
        self.clamp_selection();
    }

    fn handle_browse_key(&mut self, key: KeyEvent, theme: &mut Theme) -> Option<Intent> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Intent::Quit),
            KeyCode::Char('b') => return Some(Intent::Go(Route::Home)),
            KeyCode::Char('t') => theme.toggle(),
            KeyCode::Char('/') | KeyCode::Char('s') => self.searching = true,
            KeyCode::Char('f') => self.flow.filters_expanded = !self.flow.filters_expanded,
            KeyCode::Char('r') => self.flow.filter.remote_only = !self.flow.filter.remote_only,
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.flow.filter.toggle_type(EmploymentType::ALL[idx]);
            }
            KeyCode::Char('x') => self.flow.filter = Default::default(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.prev(),
            KeyCode::Enter => {
                if let Some(id) = self.highlighted().map(|j| j.id.clone()) {
                    self.scroll_offset = 0;
                    if let Err(err) = self.flow.select(&id) {
                        tracing::warn!(%err, "select failed");
                    }
                }
            }
            _ => {}
        }
        self.clamp_selection();
        None
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<(), BoardError> {
        let fields = ApplicationField::ALL;
        match key.code {
            KeyCode::Esc => {
                self.error = None;
                self.flow.back()
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = next_focus(self.focus, fields.len(), true);
                Ok(())
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = next_focus(self.focus, fields.len(), false);
                Ok(())
            }
            KeyCode::Enter => self.flow.submit(Instant::now()),
            _ => {
                edit_field(&mut self.flow.form, fields[self.focus], key);
                Ok(())
            }
        }
    }
}

pub fn run(terminal: &mut Term, theme: &mut Theme, settings: &Settings) -> Result<Intent> {
    let flow = TalentFlow::new(seed::talent_listings(), settings.return_delay);
    let mut screen = Screen::new(flow);

    loop {
        terminal.draw(|frame| draw(frame, &screen, *theme))?;

        let timeout = screen
            .flow
            .pending_return(Instant::now())
            .map(|left| left.min(IDLE_POLL))
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(intent) = screen.handle_key(key, theme) {
                        return Ok(intent);
                    }
                }
            }
        }

        if screen.flow.tick(Instant::now()) {
            screen.error = None;
            screen.clamp_selection();
        }
    }
}

fn draw(frame: &mut Frame, screen: &Screen, theme: Theme) {
    let (body, help) = split_footer(frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let help_text = match screen.flow.view() {
        TalentView::Browsing if screen.searching => "type to search  Enter/Esc:done",
        TalentView::Browsing => {
            "j/k:navigate  Enter:view  /:search  f:filters  1-4:type  r:remote  x:clear  b:home  t:theme  q:quit"
        }
        TalentView::Viewing(_) => "a:apply  Esc:back to jobs  j/k:scroll  t:theme  q:quit",
        TalentView::Applying(_) => {
            "Tab/Up/Down:field  </>/Space:choose  Enter:submit  Esc:back"
        }
        TalentView::Submitted { .. } => "returning to the job list...  q:quit",
    };
    footer(frame, help, help_text, theme);

    match screen.flow.view() {
        TalentView::Browsing => draw_browse(frame, body, screen, theme),
        TalentView::Viewing(job) => {
            let detail = Paragraph::new(detail_text(job, theme))
                .block(Block::default().borders(Borders::ALL).title(" Job Detail "))
                .wrap(Wrap { trim: false })
                .scroll((screen.scroll_offset, 0));
            frame.render_widget(detail, body);
        }
        TalentView::Applying(job) => {
            let mut lines = vec![
                Line::from(Span::styled(format!("Apply for {}", job.title), theme.bold())),
                Line::from(Span::styled(format!("{} - {}", job.company, job.location), theme.muted())),
                Line::from(""),
            ];
            lines.extend(form_lines(
                &screen.flow.form,
                screen.focus,
                screen.error.as_ref(),
                None,
                theme,
            ));
            if let Some(err) = &screen.error {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(err.to_string(), theme.error())));
            }
            let form = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(" Application "))
                .wrap(Wrap { trim: false });
            frame.render_widget(form, body);
        }
        TalentView::Submitted { job, .. } => {
            let left = screen
                .flow
                .pending_return(Instant::now())
                .map(|d| d.as_secs() + 1)
                .unwrap_or(0);
            let text = Text::from(vec![
                Line::from(Span::styled("Application Submitted!", theme.success().add_modifier(Modifier::BOLD))),
                Line::from(""),
                Line::from(format!(
                    "Thank you for applying to {} at {}. We'll review your application and get back to you soon.",
                    job.title, job.company
                )),
                Line::from(""),
                Line::from(Span::styled(format!("Back to the job list in {}s", left), theme.muted())),
            ]);
            let done = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .wrap(Wrap { trim: true });
            frame.render_widget(done, body);
        }
    }
}

fn draw_browse(frame: &mut Frame, area: Rect, screen: &Screen, theme: Theme) {
    let filter = &screen.flow.filter;
    let mut header = vec![
        Line::from(Span::styled("Find Your Next AI Opportunity", theme.bold())),
        Line::from(vec![
            Span::raw("Search: "),
            Span::styled(
                if filter.query.is_empty() && !screen.searching {
                    "job titles, companies, or skills".to_string()
                } else {
                    filter.query.clone()
                },
                if screen.searching { theme.accent() } else { theme.muted() },
            ),
            Span::styled(if screen.searching { "_" } else { "" }, theme.accent()),
        ]),
    ];
    if screen.flow.filters_expanded {
        let mut spans = vec![Span::raw("Job Type: ")];
        for (i, t) in EmploymentType::ALL.iter().enumerate() {
            let mark = if filter.types.contains(t) { "x" } else { " " };
            spans.push(Span::raw(format!("{}[{}] {}  ", i + 1, mark, t.label())));
        }
        header.push(Line::from(spans));
        let mark = if filter.remote_only { "x" } else { " " };
        header.push(Line::from(format!("Location: r[{}] Remote Only", mark)));
    } else {
        header.push(Line::from(Span::styled("Filters hidden (f to show)", theme.muted())));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header.len() as u16 + 2), Constraint::Min(0)])
        .split(area);
    frame.render_widget(
        Paragraph::new(Text::from(header)).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let visible = screen.flow.visible();
    let title = format!(" {} ", positions_label(visible.len()));
    if visible.is_empty() {
        let empty = Paragraph::new("No matching jobs found. Try adjusting your search or filters.")
            .style(theme.muted())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|job| {
            let remote = if job.remote { " (Remote)" } else { "" };
            ListItem::new(vec![
                Line::from(Span::styled(job.title.clone(), theme.bold())),
                Line::from(Span::styled(
                    format!("  {} | {}{} | {}", job.company, job.location, remote, job.employment_type),
                    theme.muted(),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(theme.selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(screen.selected));
    frame.render_stateful_widget(list, panels[0], &mut list_state);

    if let Some(job) = screen.highlighted() {
        let preview = Paragraph::new(detail_text(job, theme))
            .block(Block::default().borders(Borders::ALL).title(" Preview "))
            .wrap(Wrap { trim: false });
        frame.render_widget(preview, panels[1]);
    }
}

fn detail_text(job: &JobListing, theme: Theme) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(job.title.clone(), theme.bold())),
        Line::from(format!("at {}", job.company)),
        Line::from(""),
        Line::from(format!(
            "Location: {}{}",
            job.location,
            if job.remote { " (Remote available)" } else { "" }
        )),
        Line::from(format!("Job Type: {}", job.employment_type)),
        Line::from(format!("Salary:   {}", job.salary)),
        Line::from(Span::styled(format!("Posted {}", job.posted_date), theme.muted())),
        Line::from(""),
        Line::from(Span::styled("Job Description", theme.bold())),
    ];
    for line in textwrap::fill(&job.description, 70).lines() {
        lines.push(Line::from(line.to_string()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Required Skills", theme.bold())));
    let skills: Vec<Span> = job
        .skills
        .iter()
        .map(|s| Span::styled(format!("[{}] ", s), theme.accent()))
        .collect();
    lines.push(Line::from(skills));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Form;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn screen() -> Screen {
        Screen::new(TalentFlow::new(seed::talent_listings(), Duration::from_secs(3)))
    }

    fn press(screen: &mut Screen, code: KeyCode) -> Option<Intent> {
        let mut theme = Theme::Dark;
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut theme)
    }

    fn render(screen: &Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, screen, Theme::Dark)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_search_typing_narrows_list() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('/'));
        for c in "vision".chars() {
            press(&mut s, KeyCode::Char(c));
        }
        press(&mut s, KeyCode::Enter);
        assert!(!s.searching);
        assert_eq!(s.flow.filter.query, "vision");
        assert_eq!(s.highlighted().map(|j| j.id.as_str()), Some("job2"));
        assert!(render(&s).contains("1 position available"));
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut s = screen();
        for _ in 0..5 {
            press(&mut s, KeyCode::Down);
        }
        assert_eq!(s.selected, 5);
        press(&mut s, KeyCode::Char('3'));
        assert_eq!(s.selected, 0);
        assert_eq!(s.highlighted().map(|j| j.id.as_str()), Some("job2"));
    }

    #[test]
    fn test_enter_view_apply_and_missing_fields_marked() {
        let mut s = screen();
        press(&mut s, KeyCode::Enter);
        assert!(matches!(s.flow.view(), TalentView::Viewing(_)));
        press(&mut s, KeyCode::Char('a'));
        assert!(matches!(s.flow.view(), TalentView::Applying(_)));

        // Typing goes into the form, not into shortcuts.
        press(&mut s, KeyCode::Char('q'));
        assert_eq!(s.flow.form.full_name, "q");

        press(&mut s, KeyCode::Enter);
        assert!(s.error.as_ref().is_some_and(|e| e.is_missing("Email")));
        assert!(matches!(s.flow.view(), TalentView::Applying(_)));
        assert!(render(&s).contains("required"));
    }

    #[test]
    fn test_quit_from_success_panel() {
        let mut s = screen();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('a'));
        let form = &mut s.flow.form;
        form.set_text(ApplicationField::FullName, "Ada".into());
        form.set_text(ApplicationField::Email, "ada@example.com".into());
        form.set_text(ApplicationField::Resume, "cv.pdf".into());
        form.cycle(ApplicationField::YearsOfExperience, true);
        form.set_text(ApplicationField::RelevantProjects, "Engines".into());
        press(&mut s, KeyCode::Enter);
        assert!(matches!(s.flow.view(), TalentView::Submitted { .. }));

        // Other keys wait for the timer.
        assert_eq!(press(&mut s, KeyCode::Char('x')), None);
        assert!(matches!(s.flow.view(), TalentView::Submitted { .. }));
        assert_eq!(press(&mut s, KeyCode::Char('q')), Some(Intent::Quit));
    }

    #[test]
    fn test_browse_shortcuts_return_intents() {
        let mut s = screen();
        assert_eq!(press(&mut s, KeyCode::Char('b')), Some(Intent::Go(Route::Home)));
        assert_eq!(press(&mut s, KeyCode::Char('q')), Some(Intent::Quit));
    }

    #[test]
    fn test_empty_result_renders_notice() {
        let mut s = screen();
        s.flow.filter.query = "quantum chromodynamics".into();
        s.clamp_selection();
        assert!(render(&s).contains("0 positions available"));
    }
}
