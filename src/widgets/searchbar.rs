use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line search input.
///
/// The input is always focused; the widget renders the current term with a
/// block cursor after it, or a placeholder while the term is empty. When
/// the term outgrows the width, the tail stays visible since that is where
/// editing happens.
pub struct SearchBar<'a> {
    /// The current raw search term
    term: &'a str,
    /// Block for styling the input
    block: Option<Block<'a>>,
    /// Style for the term text
    style: Style,
    /// Text shown while the term is empty
    placeholder: &'a str,
    /// Style for the placeholder
    placeholder_style: Style,
}

impl<'a> Default for SearchBar<'a> {
    fn default() -> Self {
        Self {
            term: "",
            block: None,
            style: Style::default(),
            placeholder: "Search users...",
            placeholder_style: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar for the given term
    pub fn new(term: &'a str) -> Self {
        Self { term, ..Self::default() }
    }

    /// Set the block for the input
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the style for the term text
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the style for the placeholder
    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

}

/// Tail of `term` fitting into `avail` display cells
fn visible_tail(term: &str, avail: usize) -> &str {
    let mut start = 0;

    while term[start..].width() > avail {
        match term[start..].grapheme_indices(true).next() {
            Some((_, g)) => start += g.len(),
            None => break,
        }
    }

    &term[start..]
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.block {
            Some(b) => {
                let inner_area = b.inner(area);
                b.render(area, buf);
                inner_area
            },
            None => area,
        };

        if area.height < 1 || area.width < 1 {
            return;
        }

        if self.term.is_empty() {
            let line = Line::from(vec![
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
                Span::styled(self.placeholder, self.placeholder_style),
            ]);
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        // Reserve one cell for the cursor.
        let avail = (area.width as usize).saturating_sub(1);
        let visible = visible_tail(self.term, avail);

        let line = Line::from(vec![
            Span::styled(visible, self.style),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Creates a SearchBar widget with preset styles
pub fn search_bar(term: &str) -> SearchBar<'_> {
    SearchBar::new(term)
        .block(Block::default().borders(Borders::ALL).title("Search"))
        .style(Style::default().fg(Color::White))
        .placeholder("Search users...")
        .placeholder_style(Style::default().fg(Color::DarkGray))
}
