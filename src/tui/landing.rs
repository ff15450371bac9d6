use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::widgets::{footer, split_footer};
use super::{Intent, Route, Term};
use crate::theme::Theme;

const PILLARS: [(&str, &str); 4] = [
    (
        "AI That Fits, Flawlessly",
        "Architects of seamless implementation who navigate both technological complexity and business imperatives with sophisticated clarity.",
    ),
    (
        "Elite Minds, Proven Mastery",
        "Work with specialists who've been meticulously screened and bring hands-on expertise from industry-leading AI deployments.",
    ),
    (
        "Scale Smart, Hire Smarter",
        "Accelerate your AI vision with on-demand access to top-tier talent, minus the complexity and cost of traditional hiring.",
    ),
    (
        "Talent That Transcends the Trend",
        "We bring you the rare few who deliver substance over spectacle, architects of solutions that move the needle.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Articulate Your Vision",
        "Engage with our talent advisor to distill precise requirements for your challenge.",
    ),
    (
        "Get a Curated Match",
        "Receive a bespoke selection of specialists evaluated against your domain and vision.",
    ),
    (
        "Seamless Commencement",
        "Select your engagement framework and start building. No friction, no delays.",
    ),
];

pub fn run(terminal: &mut Term, theme: &mut Theme) -> Result<Intent> {
    let mut scroll: u16 = 0;
    loop {
        terminal.draw(|frame| draw(frame, *theme, scroll))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Intent::Quit),
                KeyCode::Char('a') => return Ok(Intent::Go(Route::Apply)),
                KeyCode::Char('h') => return Ok(Intent::Go(Route::Hire)),
                KeyCode::Char('t') => theme.toggle(),
                KeyCode::Down | KeyCode::Char('j') => scroll = scroll.saturating_add(2),
                KeyCode::Up | KeyCode::Char('k') => scroll = scroll.saturating_sub(2),
                _ => {}
            }
        }
    }
}

fn draw(frame: &mut Frame, theme: Theme, scroll: u16) {
    let (body, help) = split_footer(frame.area());

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("AIWAVE", theme.bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your Access Point to ", theme.bold()),
            Span::styled("World-Class ", theme.highlight().add_modifier(Modifier::BOLD)),
            Span::styled("AI", theme.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" Expertise", theme.bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Are you an expert? "),
            Span::styled("Your legacy begins here. [a]", theme.highlight()),
        ]),
        Line::from(vec![
            Span::raw("Looking for an AI game-changer? "),
            Span::styled("Discover your catalysts. [h]", theme.accent()),
        ]),
        Line::from(""),
    ];

    lines.push(Line::from(Span::styled("WHY AIWAVE", theme.accent())));
    for (title, text) in PILLARS {
        lines.push(Line::from(Span::styled(format!("  {}", title), theme.bold())));
        for line in textwrap::fill(text, 70).lines() {
            lines.push(Line::from(format!("    {}", line)));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("HOW IT WORKS", theme.accent())));
    for (i, (title, text)) in STEPS.iter().enumerate() {
        lines.push(Line::from(Span::styled(format!("  {}. {}", i + 1, title), theme.bold())));
        for line in textwrap::fill(text, 70).lines() {
            lines.push(Line::from(format!("     {}", line)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Terms | Privacy | Contact    (c) 2025 AIWave. All rights reserved.",
        theme.muted(),
    )));

    let page = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL))
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(page, body);

    footer(frame, help, "a:apply as talent  h:hire talent  j/k:scroll  t:theme  q:quit", theme);
}
