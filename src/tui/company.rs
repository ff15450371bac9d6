use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use super::widgets::{confirm_dialog, edit_field, footer, form_lines, next_focus, split_footer};
use super::{Intent, Route, Term};
use crate::company::{CompanyDashboard, DELETE_PROMPT, DashboardView, Section};
use crate::error::{BoardError, FormError};
use crate::forms::{FormField, JobPostField, ProfileField};
use crate::models::Choice;
use crate::seed;
use crate::theme::Theme;

struct Screen {
    dash: CompanyDashboard,
    selected: usize,
    focus: usize,
    error: Option<FormError>,
    pending_delete: Option<String>,
    notice: Option<String>,
}

impl Screen {
    fn new(dash: CompanyDashboard) -> Self {
        Self {
            dash,
            selected: 0,
            focus: 0,
            error: None,
            pending_delete: None,
            notice: None,
        }
    }

    fn highlighted_id(&self) -> Option<String> {
        self.dash.jobs().get(self.selected).map(|j| j.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.dash.jobs().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn go(&mut self, section: Section) {
        self.focus = 0;
        self.error = None;
        self.notice = None;
        self.dash.navigate(section);
    }

    fn handle_key(&mut self, key: KeyEvent, theme: &mut Theme) -> Option<Intent> {
        if let Some(id) = self.pending_delete.clone() {
            let answer = match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
                _ => return None,
            };
            self.pending_delete = None;
            match self.dash.delete_job(&id, &mut |_: &str| answer) {
                Ok(true) => self.notice = Some("Job listing deleted".to_string()),
                Ok(false) => {}
                Err(err) => tracing::warn!(%err, "delete failed"),
            }
            self.clamp_selection();
            return None;
        }

        if let Some(section) = sidebar_section(self.dash.view(), key) {
            self.go(section);
            return None;
        }

        let result = match self.dash.view() {
            DashboardView::Jobs => return self.handle_jobs_key(key, theme),
            DashboardView::Applications(_) => match key.code {
                KeyCode::Char('q') => return Some(Intent::Quit),
                KeyCode::Char('t') => {
                    theme.toggle();
                    Ok(())
                }
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => self.dash.back(),
                _ => Ok(()),
            },
            DashboardView::Post | DashboardView::Edit(_) => self.handle_job_form_key(key),
            DashboardView::Profile => self.handle_profile_key(key),
        };
        match result {
            Ok(()) => {}
            Err(BoardError::Form(err)) => self.error = Some(err),
            Err(err) => tracing::warn!(%err, "ignored key"),
        }
        None
    }

    fn handle_jobs_key(&mut self, key: KeyEvent, theme: &mut Theme) -> Option<Intent> {
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Intent::Quit),
            KeyCode::Char('b') => return Some(Intent::Go(Route::Home)),
            KeyCode::Char('t') => {
                theme.toggle();
                Ok(())
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.dash.jobs().len() {
                    self.selected += 1;
                }
                Ok(())
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Ok(())
            }
            KeyCode::Char('e') => match self.highlighted_id() {
                Some(id) => {
                    self.focus = 0;
                    self.error = None;
                    self.notice = None;
                    self.dash.edit(&id)
                }
                None => Ok(()),
            },
            KeyCode::Enter | KeyCode::Char('v') => match self.highlighted_id() {
                Some(id) => self.dash.view_applications(&id),
                None => Ok(()),
            },
            KeyCode::Char('d') => {
                self.pending_delete = self.highlighted_id();
                Ok(())
            }
            _ => Ok(()),
        };
        if let Err(err) = result {
            tracing::warn!(%err, "ignored key");
        }
        None
    }

    fn handle_job_form_key(&mut self, key: KeyEvent) -> Result<(), BoardError> {
        let fields = JobPostField::ALL;
        let field = fields[self.focus];
        match key.code {
            KeyCode::Esc => {
                self.error = None;
                self.dash.cancel_form()
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = next_focus(self.focus, fields.len(), true);
                Ok(())
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = next_focus(self.focus, fields.len(), false);
                Ok(())
            }
            // Enter on the tag input adds the tag instead of submitting.
            KeyCode::Enter if field == JobPostField::Skills => {
                self.dash.add_skill();
                Ok(())
            }
            KeyCode::Enter => {
                let editing = matches!(self.dash.view(), DashboardView::Edit(_));
                let id = self.dash.submit_job()?;
                self.error = None;
                self.focus = 0;
                self.selected = self.dash.jobs().iter().position(|j| j.id == id).unwrap_or(0);
                let notice = if editing { "Job listing updated" } else { "Job listing posted" };
                self.notice = Some(notice.to_string());
                Ok(())
            }
            KeyCode::Backspace if field == JobPostField::Skills => {
                if self.dash.skill_input.buffer.is_empty() {
                    if let Some(last) = self.dash.form.skills.as_slice().last().cloned() {
                        self.dash.remove_skill(&last);
                    }
                } else {
                    self.dash.skill_input.pop();
                }
                Ok(())
            }
            KeyCode::Char(c) if field == JobPostField::Skills => {
                self.dash.skill_input.push(c);
                Ok(())
            }
            _ => {
                edit_field(&mut self.dash.form, field, key);
                Ok(())
            }
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) -> Result<(), BoardError> {
        let fields = ProfileField::ALL;
        match key.code {
            KeyCode::Esc => {
                self.dash.discard_profile();
                self.go(Section::Jobs);
                Ok(())
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = next_focus(self.focus, fields.len(), true);
                Ok(())
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = next_focus(self.focus, fields.len(), false);
                Ok(())
            }
            KeyCode::Enter => {
                self.dash.save_profile()?;
                self.error = None;
                self.notice = Some("Profile saved".to_string());
                Ok(())
            }
            _ => {
                edit_field(&mut self.dash.profile_draft, fields[self.focus], key);
                Ok(())
            }
        }
    }
}

/// Sidebar shortcuts. F1-F3 work everywhere; digits and letters only where
/// no text field takes the key.
fn sidebar_section(view: &DashboardView, key: KeyEvent) -> Option<Section> {
    match key.code {
        KeyCode::F(n @ 1..=3) => Some(Section::ALL[n as usize - 1]),
        KeyCode::Char(c) if matches!(view, DashboardView::Jobs | DashboardView::Applications(_)) => {
            match c {
                '1' => Some(Section::Jobs),
                '2' | 'n' => Some(Section::PostNew),
                '3' | 'p' => Some(Section::Profile),
                _ => None,
            }
        }
        _ => None,
    }
}

pub fn run(terminal: &mut Term, theme: &mut Theme) -> Result<Intent> {
    let dash = CompanyDashboard::new(
        seed::company_info(),
        seed::company_listings(),
        seed::sample_applicants(),
    );
    let mut screen = Screen::new(dash);

    loop {
        terminal.draw(|frame| draw(frame, &screen, *theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(intent) = screen.handle_key(key, theme) {
                return Ok(intent);
            }
        }
    }
}

fn current_section(view: &DashboardView) -> Section {
    match view {
        DashboardView::Post => Section::PostNew,
        DashboardView::Profile => Section::Profile,
        _ => Section::Jobs,
    }
}

fn draw(frame: &mut Frame, screen: &Screen, theme: Theme) {
    let (body, help) = split_footer(frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let help_text = if screen.pending_delete.is_some() {
        "y:delete  n/Esc:keep"
    } else {
        match screen.dash.view() {
            DashboardView::Jobs => {
                "j/k:navigate  Enter/v:applications  e:edit  d:delete  n:post job  p:profile  b:home  t:theme  q:quit"
            }
            DashboardView::Applications(_) => "Esc:back to listings  1-3/F1-F3:sections  t:theme  q:quit",
            DashboardView::Post | DashboardView::Edit(_) => {
                "Tab/Up/Down:field  Enter:submit (adds skill on Required Skills)  Esc:cancel  F1-F3:sections"
            }
            DashboardView::Profile => "Tab/Up/Down:field  </>/Space:choose  Enter:save  Esc:discard  F1-F3:sections",
        }
    };
    footer(frame, help, help_text, theme);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(body);

    draw_sidebar(frame, chunks[0], screen, theme);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(chunks[1]);
    if let Some(notice) = &screen.notice {
        frame.render_widget(Paragraph::new(notice.as_str()).style(theme.success()), main[0]);
    }

    match screen.dash.view() {
        DashboardView::Jobs => draw_jobs(frame, main[1], screen, theme),
        DashboardView::Applications(job) => {
            let applicants = screen.dash.applicants_for(&job.id);
            let title = format!(" Applications for {} ", job.title);
            if applicants.is_empty() {
                let empty = Paragraph::new("No applications received yet.")
                    .style(theme.muted())
                    .block(Block::default().borders(Borders::ALL).title(title));
                frame.render_widget(empty, main[1]);
            } else {
                let rows: Vec<Row> = applicants
                    .iter()
                    .map(|a| {
                        Row::new(vec![
                            a.name.clone(),
                            a.email.clone(),
                            a.experience.label().to_string(),
                            a.applied_date.clone(),
                            a.status.as_str().to_string(),
                        ])
                    })
                    .collect();
                let table = Table::new(
                    rows,
                    [
                        Constraint::Length(16),
                        Constraint::Length(25),
                        Constraint::Length(11),
                        Constraint::Length(11),
                        Constraint::Min(10),
                    ],
                )
                .header(Row::new(vec!["Name", "Email", "Experience", "Applied", "Status"]).style(theme.bold()))
                .block(Block::default().borders(Borders::ALL).title(title));
                frame.render_widget(table, main[1]);
            }
        }
        DashboardView::Post | DashboardView::Edit(_) => {
            let (title, action) = match screen.dash.view() {
                DashboardView::Edit(_) => (" Edit Job Posting ", "Enter: Update Job"),
                _ => (" Post a New Job ", "Enter: Post Job"),
            };
            let mut lines = form_lines(
                &screen.dash.form,
                screen.focus,
                screen.error.as_ref(),
                Some((&screen.dash.form.skills, screen.dash.skill_input.buffer.as_str())),
                theme,
            );
            if !screen.dash.form.is_complete() {
                lines.push(Line::from(Span::styled(
                    "Fill the starred fields and add at least one required skill",
                    theme.muted(),
                )));
            }
            if let Some(err) = &screen.error {
                lines.push(Line::from(Span::styled(err.to_string(), theme.error())));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(action, theme.accent())));
            let form = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(title))
                .wrap(Wrap { trim: false });
            frame.render_widget(form, main[1]);
        }
        DashboardView::Profile => {
            let mut lines = form_lines(
                &screen.dash.profile_draft,
                screen.focus,
                screen.error.as_ref(),
                None,
                theme,
            );
            if let Some(err) = &screen.error {
                lines.push(Line::from(Span::styled(err.to_string(), theme.error())));
            }
            let form = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(" Company Profile "))
                .wrap(Wrap { trim: false });
            frame.render_widget(form, main[1]);
        }
    }

    if screen.pending_delete.is_some() {
        confirm_dialog(frame, DELETE_PROMPT, theme);
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, screen: &Screen, theme: Theme) {
    let company = screen.dash.company();
    let active = current_section(screen.dash.view());
    let mut lines = vec![
        Line::from(Span::styled(company.name.clone(), theme.bold())),
        Line::from(Span::styled("Company Dashboard", theme.muted())),
        Line::from(""),
    ];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active { theme.selected() } else { theme.base() };
        lines.push(Line::from(Span::styled(format!("F{} {}", i + 1, section.label()), style)));
    }
    let sidebar = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn draw_jobs(frame: &mut Frame, area: Rect, screen: &Screen, theme: Theme) {
    let jobs = screen.dash.jobs();
    let title = format!(" My Job Listings ({}) ", jobs.len());
    if jobs.is_empty() {
        let empty = Paragraph::new("You haven't posted any jobs yet. Press n to post your first job.")
            .style(theme.muted())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = jobs
        .iter()
        .map(|job| {
            let remote = if job.remote { " (Remote)" } else { "" };
            let applicants = job.applicants.unwrap_or(0);
            ListItem::new(vec![
                Line::from(Span::styled(job.title.clone(), theme.bold())),
                Line::from(Span::styled(
                    format!(
                        "  {}{} | {} | Posted {} | View {} applications",
                        job.location, remote, job.employment_type, job.posted_date, applicants
                    ),
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
    frame.render_stateful_widget(list, area, &mut list_state);
}
