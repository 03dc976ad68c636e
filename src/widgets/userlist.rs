use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use rolodex_api::User;

use crate::keys::ListMotion;

/// Glyph standing in for the avatar thumbnail in each row
const AVATAR_MARKER: &str = "◉ ";

const LOADING_TEXT: &str = "Loading users...";
const EMPTY_TEXT: &str = "No users found";

/// Cursor and scroll state for the user list widget
#[derive(Debug, Clone, Default)]
pub struct UserListState {
    /// Cursor position within the visible records
    cursor: usize,
    /// Index of the first rendered row
    offset: usize,
    /// Viewport height in rows, updated during rendering
    viewport: usize,
    /// Inner area at the last render, for click hit-testing
    area: Option<Rect>,
}

impl UserListState {
    /// Create a new list state
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor on a specific row.
    ///
    /// Callers check bounds against the list they rendered; out-of-range
    /// values are corrected by the next [`clamp`](Self::clamp) or render.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }

    /// Keep the cursor inside a list of `len` records.
    ///
    /// Called after every change to the visible set, since filtering can
    /// shrink the list underneath the cursor.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.offset = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    /// Move the cursor within a list of `len` records
    pub fn move_to(&mut self, motion: ListMotion, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.offset = 0;
            return;
        }

        let last = len - 1;
        let page = self.viewport.max(1);

        self.cursor = match motion {
            ListMotion::Up => self.cursor.saturating_sub(1),
            ListMotion::Down => (self.cursor + 1).min(last),
            ListMotion::PageUp => self.cursor.saturating_sub(page),
            ListMotion::PageDown => (self.cursor + page).min(last),
            ListMotion::Home => 0,
            ListMotion::End => last,
        };
    }

    /// Map a terminal cell to the row index rendered there.
    ///
    /// Returns the index without bounds-checking it against the record
    /// count; clicking past the last row yields an index the caller's
    /// `get` rejects.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;

        if column < area.x || column >= area.x.saturating_add(area.width) {
            return None;
        }
        if row < area.y || row >= area.y.saturating_add(area.height) {
            return None;
        }

        Some(self.offset + (row - area.y) as usize)
    }

    fn scroll_to_cursor(&mut self, len: usize, height: usize) {
        if height == 0 || len == 0 {
            self.offset = 0;
            return;
        }

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }

        self.offset = self.offset.min(len.saturating_sub(height));
    }
}

/// Scrollable list of directory entries, one `(avatar marker, username)`
/// row per record
pub struct UserList<'a> {
    /// Records to display, already filtered
    users: &'a [User],
    /// Whether the initial load is still outstanding
    loading: bool,
    /// Block for styling the list
    block: Option<Block<'a>>,
    /// Style for ordinary rows
    style: Style,
    /// Style for the cursor row
    cursor_style: Style,
    /// Style for the loading and empty lines
    notice_style: Style,
}

impl<'a> Default for UserList<'a> {
    fn default() -> Self {
        Self {
            users: &[],
            loading: false,
            block: None,
            style: Style::default(),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            notice_style: Style::default(),
        }
    }
}

impl<'a> UserList<'a> {
    /// Create a new user list widget
    pub fn new(users: &'a [User]) -> Self {
        Self { users, ..Self::default() }
    }

    /// Set whether the loading indicator replaces the list
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the block for the list
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the style for ordinary rows
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style for the cursor row
    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    /// Set the style for the loading and empty lines
    pub fn notice_style(mut self, style: Style) -> Self {
        self.notice_style = style;
        self
    }
}

impl<'a> StatefulWidget for UserList<'a> {
    type State = UserListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = match self.block {
            Some(b) => {
                let inner_area = b.inner(area);
                b.render(area, buf);
                inner_area
            },
            None => area,
        };

        state.viewport = area.height as usize;
        state.area = Some(area);

        if area.height < 1 || area.width < 1 {
            return;
        }

        if self.loading {
            buf.set_stringn(area.x, area.y, LOADING_TEXT, area.width as usize, self.notice_style);
            return;
        }

        // An empty result set is announced, never shown as a blank pane.
        if self.users.is_empty() {
            buf.set_stringn(area.x, area.y, EMPTY_TEXT, area.width as usize, self.notice_style);
            return;
        }

        state.clamp(self.users.len());
        state.scroll_to_cursor(self.users.len(), area.height as usize);

        let rows = self
            .users
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(area.height as usize);

        for (i, user) in rows {
            let y = area.y + (i - state.offset) as u16;
            let style = if i == state.cursor { self.cursor_style } else { self.style };
            let text = format!("{}{}", AVATAR_MARKER, user.username());

            buf.set_stringn(area.x, y, text, area.width as usize, style);

            if i == state.cursor {
                // Carry the highlight across the whole row.
                buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            }
        }
    }
}

/// Creates a UserList widget with preset styles
pub fn user_list(users: &[User]) -> UserList<'_> {
    UserList::new(users)
        .block(Block::default().borders(Borders::ALL).title("Users"))
        .style(Style::default().fg(Color::Gray))
        .cursor_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .notice_style(Style::default().fg(Color::DarkGray))
}
