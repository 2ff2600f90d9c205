use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::game::traits::PlayerId;
use crate::games::paperio::{GridPos, Snapshot, get_player_palette};

const TITLE: &str = " Paper.io Game ";
const HELP: &str = "arrows: Blue  WASD: Red  q: quit";

/// Draws the board: territory, then trails, then heads, then the winner banner.
pub struct BoardWidget<'a> {
    snapshot: Snapshot<'a>,
}

impl<'a> BoardWidget<'a> {
    pub fn new(snapshot: Snapshot<'a>) -> Self {
        Self { snapshot }
    }

    /// Outer size of the board including its border.
    pub fn size(snapshot: &Snapshot<'_>) -> (u16, u16) {
        let width = clamp_u16(snapshot.width)
            .saturating_mul(snapshot.cell_width)
            .saturating_add(2);
        let height = clamp_u16(snapshot.height).saturating_add(2);
        (width, height)
    }

    pub fn grid_to_screen(&self, pos: &GridPos, inner: Rect) -> Option<Rect> {
        if pos.x < 0
            || pos.y < 0
            || pos.x as u32 >= self.snapshot.width
            || pos.y as u32 >= self.snapshot.height
        {
            return None;
        }

        let cell_width = self.snapshot.cell_width;
        let rect = Rect::new(
            inner
                .x
                .saturating_add(clamp_u16(pos.x as u32).saturating_mul(cell_width)),
            inner.y.saturating_add(clamp_u16(pos.y as u32)),
            cell_width,
            1,
        );
        Some(rect.intersection(inner)).filter(|r| !r.is_empty())
    }

    fn paint(&self, pos: &GridPos, color: Color, inner: Rect, buf: &mut Buffer) {
        let Some(rect) = self.grid_to_screen(pos, inner) else {
            return;
        };
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, rect.y)) {
                cell.set_symbol(" ").set_bg(color);
            }
        }
    }

    fn render_banner(&self, inner: Rect, buf: &mut Buffer) {
        let message = self.snapshot.message();
        let width = (message.len() as u16 + 4).min(inner.width);
        let height = 3u16.min(inner.height);
        let banner = Rect::new(
            inner.x + (inner.width - width) / 2,
            inner.y + (inner.height - height) / 2,
            width,
            height,
        );

        Clear.render(banner, buf);
        Paragraph::new(message)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(banner, buf);
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        // Red first so Blue shows on top where both claim a cell.
        for player_id in [PlayerId::Two, PlayerId::One] {
            let color = rgba_to_color(get_player_palette(player_id).territory);
            for pos in self.snapshot.territories[player_id.index()].get_owned_cells() {
                self.paint(&pos, color, inner, buf);
            }
        }

        for player_id in PlayerId::ALL {
            let color = rgba_to_color(get_player_palette(player_id).trail);
            for pos in self.snapshot.trails[player_id.index()].iter() {
                self.paint(pos, color, inner, buf);
            }
        }

        for player_id in PlayerId::ALL {
            let color = rgba_to_color(get_player_palette(player_id).head);
            self.paint(&self.snapshot.positions[player_id.index()], color, inner, buf);
        }

        if self.snapshot.is_finished() {
            self.render_banner(inner, buf);
        }
    }
}

pub fn status_line(snapshot: &Snapshot<'_>) -> String {
    format!(
        "Tick {} | Blue {:.1}% | Red {:.1}% | {}",
        snapshot.tick,
        snapshot.territory_share(PlayerId::One),
        snapshot.territory_share(PlayerId::Two),
        HELP
    )
}

/// Lays out one frame: the board in the top-left corner with the status line below it.
pub fn draw(frame: &mut Frame, snapshot: Snapshot<'_>) {
    let area = frame.area();
    let (width, height) = BoardWidget::size(&snapshot);
    let board = Rect::new(area.x, area.y, width, height).intersection(area);
    let status = Rect::new(area.x, board.bottom(), area.width, 1).intersection(area);

    frame.render_widget(BoardWidget::new(snapshot), board);
    frame.render_widget(Paragraph::new(status_line(&snapshot)), status);
}

/// Terminal coordinates stop at `u16::MAX`.
fn clamp_u16(n: u32) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Unpacks RGBA into a terminal color; alpha is dropped.
pub fn rgba_to_color(rgba: u32) -> Color {
    Color::Rgb((rgba >> 24) as u8, (rgba >> 16) as u8, (rgba >> 8) as u8)
}
