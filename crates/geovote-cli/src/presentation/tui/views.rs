//! Widgets for the treemap browser.

use geovote_engine::Viewport;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::view_models::{BodyViewModel, CardViewModel, CellViewModel, PopupViewModel, ScreenViewModel};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const LOG_HEIGHT: u16 = 5;

pub const LOADING_TEXT: &str = "불러오는 중...";

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Size of the treemap body for a terminal of `width` x `height`.
pub fn body_viewport(width: u16, height: u16) -> Viewport {
    Viewport::new(
        width,
        height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + LOG_HEIGHT),
    )
}

fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Length(LOG_HEIGHT),
    ])
    .areas(area)
}

pub fn draw(f: &mut Frame, screen: &ScreenViewModel) {
    let [header, body, status, logs] = screen_layout(f.area());

    f.render_widget(HeaderView::new(screen), header);
    match &screen.body {
        BodyViewModel::Loading => {
            f.render_widget(Paragraph::new(LOADING_TEXT), body);
        }
        BodyViewModel::Treemap(cells) => {
            f.render_widget(TreemapView::new(cells, screen.focus), body);
        }
        BodyViewModel::Cards(cards) => {
            f.render_widget(CardListView::new(cards, screen.focus), body);
        }
        BodyViewModel::Empty(message) => {
            f.render_widget(
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::DarkGray)),
                body,
            );
        }
    }
    f.render_widget(StatusBarView::new(screen), status);
    f.render_widget(LogView::new(&screen.logs), logs);

    if let Some(popup) = &screen.popup {
        f.render_widget(PopupView::new(popup), centered(f.area(), 80, 80));
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct HeaderView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if let Some(age) = self.model.age {
            spans.push(Span::styled(
                format!("제{}대 ", age),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::raw("전국"));
        for step in &self.model.breadcrumb {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(step.as_str()));
        }
        if self.model.back_enabled {
            spans.push(Span::styled("  [b] 뒤로", Style::default().fg(Color::Yellow)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

pub struct TreemapView<'a> {
    cells: &'a [CellViewModel],
    focus: Option<usize>,
}

impl<'a> TreemapView<'a> {
    pub fn new(cells: &'a [CellViewModel], focus: Option<usize>) -> Self {
        Self { cells, focus }
    }
}

impl Widget for TreemapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, cell) in self.cells.iter().enumerate() {
            let rect = Rect::new(
                area.x.saturating_add(cell.x),
                area.y.saturating_add(cell.y),
                cell.width,
                cell.height,
            )
            .intersection(area);
            if rect.is_empty() {
                continue;
            }

            buf.set_style(rect, Style::default().bg(rgb(cell.fill)));

            let mut label = Style::default()
                .fg(rgb(cell.label_color))
                .bg(rgb(cell.fill));
            if self.focus == Some(index) {
                label = label.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            if cell.highlighted {
                label = label.add_modifier(Modifier::UNDERLINED);
            }
            for (line_no, text) in cell.label_lines.iter().enumerate() {
                let y = rect.y + line_no as u16;
                if y >= rect.bottom() {
                    break;
                }
                buf.set_stringn(rect.x, y, text, rect.width as usize, label);
            }
        }
    }
}

pub struct CardListView<'a> {
    cards: &'a [CardViewModel],
    focus: Option<usize>,
}

impl<'a> CardListView<'a> {
    pub fn new(cards: &'a [CardViewModel], focus: Option<usize>) -> Self {
        Self { cards, focus }
    }
}

impl Widget for CardListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let mut name_style = Style::default().add_modifier(Modifier::BOLD);
                if self.focus == Some(index) {
                    name_style = name_style.add_modifier(Modifier::REVERSED);
                }
                let member = card.member_name.as_deref().unwrap_or("의원 없음");
                let mut spans = vec![
                    Span::styled("■ ", Style::default().fg(rgb(card.color))),
                    Span::styled(card.district_name.as_str(), name_style),
                    Span::raw("  "),
                    Span::raw(member),
                ];
                if let Some(party) = &card.party {
                    spans.push(Span::styled(
                        format!("  {}", party),
                        Style::default().fg(rgb(card.color)),
                    ));
                }
                if card.selected {
                    spans.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
                }
                Line::from(spans)
            })
            .collect();

        // Keep the focused card on screen.
        let scroll = match self.focus {
            Some(focus) if focus as u16 >= area.height => focus as u16 + 1 - area.height,
            _ => 0,
        };
        Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    }
}

pub struct StatusBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

        let status = if let Some(notice) = &self.model.notice {
            Span::styled(notice.as_str(), Style::default().fg(Color::Yellow))
        } else if self.model.loading {
            Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        };
        Paragraph::new(Line::from(status)).render(left, buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw("열기 "),
            Span::styled("[b]", key),
            Span::raw("뒤로 "),
            Span::styled("[ [ ] ]", key),
            Span::raw("대수 "),
            Span::styled("[q]", key),
            Span::raw("종료"),
        ]);
        Paragraph::new(help).render(right, buf);
    }
}

pub struct LogView<'a> {
    lines: &'a [String],
}

impl<'a> LogView<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title("log")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        let start = self.lines.len().saturating_sub(visible);
        let lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|l| Line::styled(l.as_str(), Style::default().fg(Color::DarkGray)))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

pub struct PopupView<'a> {
    model: &'a PopupViewModel,
}

impl<'a> PopupView<'a> {
    pub fn new(model: &'a PopupViewModel) -> Self {
        Self { model }
    }
}

impl Widget for PopupView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.model.title.as_str())
            .title_bottom(Line::from(" [Esc] 닫기 ").right_aligned());
        let lines: Vec<Line> = self.model.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    /// Buffer contents with padding removed; wide glyphs leave a blank
    /// cell behind them.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text.replace(' ', "")
    }

    fn render(screen: &ScreenViewModel) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, screen)).unwrap();
        terminal
    }

    fn cell(name: &str, x: u16, width: u16) -> CellViewModel {
        CellViewModel {
            name: name.to_string(),
            label_lines: vec![name.to_string()],
            x,
            y: 0,
            width,
            height: 5,
            fill: (0xbe, 0xf2, 0x64),
            label_color: (0x22, 0x22, 0x22),
            highlighted: false,
        }
    }

    #[test]
    fn test_body_viewport_leaves_room_for_chrome() {
        assert_eq!(body_viewport(80, 24), Viewport::new(80, 17));
        assert_eq!(body_viewport(80, 3), Viewport::new(80, 0));
    }

    #[test]
    fn test_treemap_screen() {
        let screen = ScreenViewModel {
            breadcrumb: vec!["서울특별시".to_string()],
            back_enabled: true,
            age: Some(22),
            body: BodyViewModel::Treemap(vec![cell("강남구", 0, 30), cell("종로구", 30, 30)]),
            focus: Some(1),
            logs: vec!["WARN region tree truncated".to_string()],
            ..Default::default()
        };
        let terminal = render(&screen);
        let text = screen_text(&terminal);

        assert!(text.contains("제22대전국›서울특별시"), "{}", text);
        assert!(text.contains("강남구"));
        assert!(text.contains("종로구"));
        assert!(text.contains("WARNregiontreetruncated"));

        let buffer = terminal.backend().buffer();
        let focused = buffer.cell((30, 1)).unwrap();
        assert!(focused.modifier.contains(Modifier::REVERSED));
        assert_eq!(buffer.cell((5, 3)).unwrap().bg, Color::Rgb(0xbe, 0xf2, 0x64));
    }

    #[test]
    fn test_card_screen_marks_selection() {
        let screen = ScreenViewModel {
            body: BodyViewModel::Cards(vec![
                CardViewModel {
                    district_name: "강남구갑".to_string(),
                    member_name: Some("홍길동".to_string()),
                    party: Some("당A".to_string()),
                    color: (0x1f, 0x77, 0xb4),
                    selected: true,
                },
                CardViewModel {
                    district_name: "강남구병".to_string(),
                    member_name: None,
                    party: None,
                    color: (0x88, 0x88, 0x88),
                    selected: false,
                },
            ]),
            ..Default::default()
        };
        let text = screen_text(&render(&screen));
        assert!(text.contains("■강남구갑홍길동당A★"), "{}", text);
        assert!(text.contains("■강남구병의원없음"), "{}", text);
    }

    #[test]
    fn test_notice_in_status_bar() {
        let screen = ScreenViewModel {
            body: BodyViewModel::Empty("표시할 지역 데이터가 없습니다.".to_string()),
            notice: Some("표결 정보를 가져오지 못했습니다.".to_string()),
            ..Default::default()
        };
        let text = screen_text(&render(&screen));
        assert!(text.contains("표시할지역데이터가없습니다."), "{}", text);
        assert!(text.contains("표결정보를가져오지못했습니다."), "{}", text);
    }

    #[test]
    fn test_popup_overlays_body() {
        let screen = ScreenViewModel {
            body: BodyViewModel::Treemap(vec![cell("강남구", 0, 60)]),
            popup: Some(PopupViewModel {
                title: "홍길동 의원".to_string(),
                lines: vec!["법안 수: 5".to_string()],
            }),
            ..Default::default()
        };
        let terminal = render(&screen);
        let text = screen_text(&terminal);
        assert!(text.contains("홍길동의원"), "{}", text);
        assert!(text.contains("법안수:5"), "{}", text);
        assert!(text.contains("[Esc]닫기"), "{}", text);

        // Cleared popup area drops the cell fill.
        let inside = terminal.backend().buffer().cell((30, 4)).unwrap();
        assert_eq!(inside.bg, Color::Reset);
    }
}
