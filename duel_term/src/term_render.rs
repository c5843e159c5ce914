use tetris_duel::{BoardId, BoardState, CellType, Field, GameState};

#[derive(Clone, PartialEq, Debug)]
pub enum TermCell {
    FieldCell(CellType),
    BorderVertical,
    BorderHorizontal,
    BorderTopLeft,
    BorderTopRight,
    BorderBottomLeft,
    BorderBottomRight,
    Space,
    Message(String),
}

pub trait TermStyle {
    fn display<'a>(&self, cell: &'a TermCell) -> &'a str;
    fn width(&self, cell: &TermCell) -> usize;
}

pub trait TermRender {
    fn output(&self, style: &impl TermStyle) -> Vec<Vec<TermCell>>;
    fn render(&self, style: &impl TermStyle) -> Vec<String> {
        self.output(style)
            .iter()
            .map(|row| row.iter().map(|cell| style.display(cell)).collect())
            .collect()
    }
}

fn line_width(line: &[TermCell], style: &impl TermStyle) -> usize {
    line.iter().map(|cell| style.width(cell)).sum()
}

// Make all lines in block the same width by padding with TermCell::Space
pub fn pad_block_right(block: &mut [Vec<TermCell>], style: &impl TermStyle) {
    // Requires that the width of TermCell::Space display is 1
    assert_eq!(style.width(&TermCell::Space), 1);
    let width = block
        .iter()
        .map(|row| line_width(row, style))
        .max()
        .unwrap_or(0);
    for row in block.iter_mut() {
        let padding = width - line_width(row, style);
        row.extend(std::iter::repeat_n(TermCell::Space, padding));
    }
}

// Place blocks side by side separated by `gap` spaces, padding short blocks with spaces
pub fn join_blocks(
    mut blocks: Vec<Vec<Vec<TermCell>>>,
    gap: usize,
    style: &impl TermStyle,
) -> Vec<Vec<TermCell>> {
    let height = blocks.iter().map(|block| block.len()).max().unwrap_or(0);
    for block in blocks.iter_mut() {
        pad_block_right(block, style);
    }
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.first().map_or(0, |row| line_width(row, style)))
        .collect();

    (0..height)
        .map(|i| {
            let mut line = Vec::new();
            for (index, (block, width)) in blocks.iter().zip(widths.iter()).enumerate() {
                if index > 0 {
                    line.extend(std::iter::repeat_n(TermCell::Space, gap));
                }
                match block.get(i) {
                    Some(row) => line.extend(row.iter().cloned()),
                    None => line.extend(std::iter::repeat_n(TermCell::Space, *width)),
                }
            }
            line
        })
        .collect()
}

pub struct PlainTermStyle;

impl TermStyle for PlainTermStyle {
    fn display<'a>(&self, cell: &'a TermCell) -> &'a str {
        match cell {
            TermCell::FieldCell(CellType::Empty) => "  ",
            TermCell::FieldCell(CellType::Ghost) => "::",
            TermCell::FieldCell(_) => "[]",
            TermCell::BorderVertical => "|",
            TermCell::BorderTopLeft => "+",
            TermCell::BorderTopRight => "+",
            TermCell::BorderBottomLeft => "+",
            TermCell::BorderHorizontal => "--",
            TermCell::BorderBottomRight => "+",
            TermCell::Space => " ",
            TermCell::Message(s) => s.as_str(),
        }
    }
    fn width(&self, cell: &TermCell) -> usize {
        match cell {
            TermCell::FieldCell(_) => 2,
            TermCell::BorderVertical => 1,
            TermCell::BorderHorizontal => 2,
            TermCell::BorderTopLeft
            | TermCell::BorderTopRight
            | TermCell::BorderBottomLeft
            | TermCell::BorderBottomRight => 1,
            TermCell::Space => 1,
            TermCell::Message(s) => s.len(),
        }
    }
}

pub struct AnsiTermStyle;

impl TermStyle for AnsiTermStyle {
    fn display<'a>(&self, cell: &'a TermCell) -> &'a str {
        match cell {
            TermCell::FieldCell(CellType::Empty) => "\x1b[0m  ",
            TermCell::FieldCell(CellType::Ghost) => "\x1b[0;90m::",
            TermCell::FieldCell(CellType::Red) => "\x1b[0;31m[]",
            TermCell::FieldCell(CellType::Green) => "\x1b[0;32m[]",
            TermCell::FieldCell(CellType::Blue) => "\x1b[0;34m[]",
            TermCell::FieldCell(CellType::Yellow) => "\x1b[0;33m[]",
            TermCell::FieldCell(CellType::Magenta) => "\x1b[0;35m[]",
            TermCell::BorderVertical => "\x1b[0m│",
            TermCell::BorderTopLeft => "\x1b[0m┌",
            TermCell::BorderTopRight => "\x1b[0m┐",
            TermCell::BorderBottomLeft => "\x1b[0m└",
            TermCell::BorderHorizontal => "\x1b[0m──",
            TermCell::BorderBottomRight => "\x1b[0m┘",
            TermCell::Space => " ",
            TermCell::Message(s) => s.as_str(),
        }
    }
    fn width(&self, cell: &TermCell) -> usize {
        PlainTermStyle.width(cell)
    }
}

impl TermRender for Field {
    fn output(&self, _style: &impl TermStyle) -> Vec<Vec<TermCell>> {
        self.iter_rows()
            .map(|row| row.iter().map(|cell| TermCell::FieldCell(*cell)).collect())
            .collect()
    }
}

fn bottom_border(cols: usize) -> Vec<TermCell> {
    let mut line = vec![TermCell::BorderBottomLeft];
    line.extend(std::iter::repeat_n(TermCell::BorderHorizontal, cols));
    line.push(TermCell::BorderBottomRight);
    line
}

pub struct WellField<'a> {
    field: &'a Field,
    game_over: bool,
}

impl<'a> WellField<'a> {
    pub fn new(field: &'a Field, game_over: bool) -> Self {
        Self { field, game_over }
    }
}

impl TermRender for WellField<'_> {
    fn output(&self, style: &impl TermStyle) -> Vec<Vec<TermCell>> {
        let mut lines = self.field.output(style);
        if self.game_over && !lines.is_empty() {
            // Replace middle line with message
            let middle = lines.len() / 2;
            lines[middle] = vec![TermCell::Message("     Game Over".to_string())];
            pad_block_right(&mut lines, style);
        }

        for line in &mut lines {
            line.insert(0, TermCell::BorderVertical);
            line.push(TermCell::BorderVertical);
        }
        lines.push(bottom_border(self.field.cols()));
        lines
    }
}

pub struct PreviewField<'a>(pub &'a Field);

impl TermRender for PreviewField<'_> {
    fn output(&self, style: &impl TermStyle) -> Vec<Vec<TermCell>> {
        let mut lines = self.0.output(style);
        for line in &mut lines {
            line.insert(0, TermCell::BorderVertical);
            line.push(TermCell::BorderVertical);
        }

        let mut top = vec![TermCell::BorderTopLeft];
        top.extend(std::iter::repeat_n(TermCell::BorderHorizontal, self.0.cols()));
        top.push(TermCell::BorderTopRight);
        lines.insert(0, top);
        lines.push(bottom_border(self.0.cols()));
        lines
    }
}

/// Preview box and numbers shown beside a well
pub struct BoardPanel<'a> {
    state: &'a BoardState,
    title: String,
    winner: bool,
}

impl<'a> BoardPanel<'a> {
    pub fn new(state: &'a BoardState, title: String, winner: bool) -> Self {
        Self { state, title, winner }
    }
}

impl TermRender for BoardPanel<'_> {
    fn output(&self, style: &impl TermStyle) -> Vec<Vec<TermCell>> {
        let mut lines = vec![vec![TermCell::Message(self.title.clone())]];
        lines.extend(PreviewField(&self.state.preview).output(style));
        lines.push(Vec::new());
        let status = &self.state.status;
        for text in [
            format!("Score {}", status.score),
            format!("Level {}", status.level),
            format!("Lines {}", status.lines),
        ] {
            lines.push(vec![TermCell::Message(text)]);
        }
        if self.winner {
            lines.push(Vec::new());
            lines.push(vec![TermCell::Message("WINNER".to_string())]);
        }
        lines
    }
}

/// Whole screen: wells on the outside, panels in the middle
pub struct GameView<'a> {
    state: &'a GameState,
    message: Vec<String>,
}

impl<'a> GameView<'a> {
    pub fn new(state: &'a GameState, message: Vec<String>) -> Self {
        Self { state, message }
    }

    fn title(board: BoardId, boards: usize) -> String {
        match (boards, board) {
            (1, _) => "NEXT".to_string(),
            (_, BoardId::Left) => "LEFT".to_string(),
            (_, BoardId::Right) => "RIGHT".to_string(),
        }
    }
}

impl TermRender for GameView<'_> {
    fn output(&self, style: &impl TermStyle) -> Vec<Vec<TermCell>> {
        let boards = self.state.boards.len();
        let wells: Vec<Vec<Vec<TermCell>>> = self
            .state
            .boards
            .iter()
            .map(|board| WellField::new(&board.well, board.game_over).output(style))
            .collect();
        let mut panels: Vec<Vec<Vec<TermCell>>> = self
            .state
            .boards
            .iter()
            .map(|board| {
                BoardPanel::new(
                    board,
                    Self::title(board.board, boards),
                    self.state.winner == Some(board.board),
                )
                .output(style)
            })
            .collect();

        // Messages go under the first panel
        if let Some(panel) = panels.first_mut() {
            panel.push(Vec::new());
            for message in &self.message {
                panel.push(vec![TermCell::Message(message.clone())]);
            }
        }

        let mut columns = Vec::new();
        let mut wells = wells.into_iter();
        let mut panels = panels.into_iter();
        if let (Some(well), Some(panel)) = (wells.next(), panels.next()) {
            columns.push(well);
            columns.push(panel);
        }
        // Second board mirrors the first: panel then well
        if let (Some(well), Some(panel)) = (wells.next(), panels.next()) {
            columns.push(panel);
            columns.push(well);
        }
        join_blocks(columns, 1, style)
    }
}
