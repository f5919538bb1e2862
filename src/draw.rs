use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::schedule::{ScheduleLine, schedule_lines};
use crate::components::selector::{OptionList, SelectorList};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

static TABS: &[&str; 2] = &["Picks", "Schedule"];

const HELP_TEXT: &str = "\
q / Ctrl-c   quit
1 / 2        Picks / Schedule tab
?  Esc       open / close help
] n  [ p     next / previous week
0 a          all weeks
j k          move between selectors (Picks) or scroll (Schedule)
h l Enter    change the focused pick
x Bksp       clear the focused pick
g            back to the top of the schedule
R            reload the schedule
f            full screen
\"            toggle logs";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Picks => draw_picks(f, layout.main, app),
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if app.state.show_logs {
            draw_logs(f, layout.logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });
    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Picks => 0,
        MenuItem::Schedule => 1,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let week = Paragraph::new(format!("{}  Help: ? ", app.state.week.label()))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(week, tab_bar[1]);
}

fn draw_picks(f: &mut Frame, area: Rect, app: &App) {
    let [selectors_area, options_area, summary_area, schedule_area] =
        LayoutAreas::picks_panes(area);
    let picks = &app.state.picks;

    let block = default_border(Color::White).title(" Picks ");
    let inner = block.inner(selectors_area);
    f.render_widget(block, selectors_area);
    f.render_widget(SelectorList { picks }, inner);

    if let Some(selector) = picks.focused() {
        let block = default_border(Color::DarkGray).title(format!(" {} ", selector.id.label()));
        let inner = block.inner(options_area);
        f.render_widget(block, options_area);
        f.render_widget(OptionList { selector }, inner);
    }

    let summary: Vec<Line> = picks
        .summary_lines()
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::styled(line, Style::default().add_modifier(Modifier::BOLD))
            } else {
                Line::from(line)
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: false })
            .block(default_border(Color::DarkGray)),
        summary_area,
    );

    draw_schedule(f, schedule_area, app);
}

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Schedule - {} ", app.state.week.label());
    let lines: Vec<Line> = schedule_lines(&app.state.schedule, app.state.week.get())
        .iter()
        .map(ScheduleLine::styled)
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .scroll((app.state.schedule_scroll, 0))
            .block(default_border(Color::White).title(title)),
        area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use tui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn picks_tab_shows_selectors_and_loading_schedule() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new(AppSettings::default(), Some(3));
        draw(&mut terminal, &mut app, LoadingState::default());

        let text = screen(&terminal);
        assert!(text.contains("AFC East: Select a team"));
        assert!(text.contains("Your Picks:"));
        assert!(text.contains("Loading schedule..."));
        assert!(text.contains("Week 3"));
    }

    #[test]
    fn tiny_terminal_draws_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(8, 8)).unwrap();
        let mut app = App::new(AppSettings::default(), None);
        draw(&mut terminal, &mut app, LoadingState::default());
        assert!(!screen(&terminal).contains("Picks"));
    }
}
