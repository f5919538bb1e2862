use tui::layout::{Constraint, Layout, Rect, Size};
pub const TAB_BAR_HEIGHT: u16 = 3;
pub const LOG_PANE_HEIGHT: u16 = 8;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub tab_bar: [Rect; 2],
    pub main: Rect,
    /// Zero-sized unless the log pane is showing.
    pub logs: Rect,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool, show_logs: bool) {
        *self = Self::from_rect(area, full_screen, show_logs);
    }

    fn from_rect(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        let (body, logs) = if show_logs {
            let [body, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)])
                    .areas(area);
            (body, logs)
        } else {
            (area, Rect::ZERO)
        };

        if full_screen {
            return LayoutAreas {
                tab_bar: [Rect::ZERO, Rect::ZERO],
                main: body,
                logs,
            };
        }

        let [tab, main] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(body);

        LayoutAreas {
            tab_bar: Self::split_tab_bar(tab),
            main,
            logs,
        }
    }

    fn split_tab_bar(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(area)
    }

    /// Picks tab: selectors over the focused selector's options on the left,
    /// picks summary over the schedule on the right.
    pub fn picks_panes(area: Rect) -> [Rect; 4] {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
        let [selectors, options] =
            Layout::vertical([Constraint::Length(11), Constraint::Fill(1)]).areas(left);
        let [summary, schedule] =
            Layout::vertical([Constraint::Length(12), Constraint::Fill(1)]).areas(right);
        [selectors, options, summary, schedule]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_bar_hidden_in_full_screen() {
        let mut layout = LayoutAreas::new(Size { width: 100, height: 40 });
        assert_eq!(layout.tab_bar[0].height, TAB_BAR_HEIGHT);
        assert_eq!(layout.main.height, 40 - TAB_BAR_HEIGHT);

        layout.update(Rect::new(0, 0, 100, 40), true, false);
        assert_eq!(layout.tab_bar[0], Rect::ZERO);
        assert_eq!(layout.main.height, 40);
    }

    #[test]
    fn log_pane_takes_the_bottom() {
        let mut layout = LayoutAreas::new(Size { width: 100, height: 40 });
        layout.update(Rect::new(0, 0, 100, 40), false, true);
        assert_eq!(layout.logs.height, LOG_PANE_HEIGHT);
        assert_eq!(layout.logs.y, 40 - LOG_PANE_HEIGHT);
        assert_eq!(layout.main.height, 40 - LOG_PANE_HEIGHT - TAB_BAR_HEIGHT);
    }
}
