use crate::state::picks::{NO_SELECTION, PicksState, Selector};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::Widget;

/// One row per selector: "<label>: <choice>", focused row highlighted.
pub struct SelectorList<'a> {
    pub picks: &'a PicksState,
}

impl Widget for SelectorList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, selector) in self.picks.selectors.iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.y + area.height {
                break;
            }
            let focused = row == self.picks.focused;
            render_line(selector_line(selector, focused), area.x, y, area.width, buf);
        }
    }
}

fn selector_line(selector: &Selector, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let choice_style = if selector.chosen.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("{marker}{}: ", selector.id.label()), label_style),
        Span::styled(selector.display(), choice_style),
    ])
}

/// Every option of the focused selector, chosen one marked.
pub struct OptionList<'a> {
    pub selector: &'a Selector,
}

impl Widget for OptionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chosen = self.selector.chosen_index();
        let placeholder = Line::from(Span::styled(
            format_option(chosen.is_none(), NO_SELECTION),
            Style::default().fg(Color::DarkGray),
        ));
        let options = self.selector.options.iter().enumerate().map(|(i, option)| {
            let is_chosen = chosen == Some(i);
            let style = if is_chosen {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format_option(is_chosen, &option.to_string()), style))
        });

        for (row, line) in std::iter::once(placeholder).chain(options).enumerate() {
            let y = area.y + row as u16;
            if y >= area.y + area.height {
                break;
            }
            render_line(line, area.x, y, area.width, buf);
        }
    }
}

fn format_option(chosen: bool, text: &str) -> String {
    let mark = if chosen { "(*)" } else { "( )" };
    format!("{mark} {text}")
}

fn render_line(line: Line, x: u16, y: u16, max_width: u16, buf: &mut Buffer) {
    let mut cx = x;
    let limit = x.saturating_add(max_width);
    for span in &line.spans {
        let run: String = span
            .content
            .chars()
            .take(limit.saturating_sub(cx) as usize)
            .collect();
        if run.is_empty() {
            break;
        }
        let width = run.chars().count() as u16;
        buf.set_string(cx, y, run, span.style);
        cx += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn selector_rows_show_label_and_choice() {
        let mut picks = PicksState::default();
        picks.choose_next();
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);
        SelectorList { picks: &picks }.render(area, &mut buf);

        assert_eq!(row(&buf, 0), "> AFC East: Bills");
        assert_eq!(row(&buf, 1), "  AFC North: Select a team");
        assert_eq!(row(&buf, 8), "  Sunday Night Game: Select a team");
    }

    #[test]
    fn rows_are_clipped_to_area() {
        let picks = PicksState::default();
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        SelectorList { picks: &picks }.render(area, &mut buf);
        assert_eq!(row(&buf, 0), "> AFC Ea");
    }

    #[test]
    fn option_list_marks_choice() {
        let mut picks = PicksState::default();
        picks.choose_next();
        picks.choose_next();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        OptionList { selector: &picks.selectors[0] }.render(area, &mut buf);

        assert_eq!(row(&buf, 0), "( ) Select a team");
        assert_eq!(row(&buf, 1), "( ) Bills");
        assert_eq!(row(&buf, 2), "(*) Dolphins");
    }
}
