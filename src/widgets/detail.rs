use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use rolodex_api::User;

const LOADING_TEXT: &str = "Loading user details...";
const PROMPT_TEXT: &str = "Select a user to view details";

/// Detail card for the selected directory entry.
///
/// Shows a loading indicator until the initial load settles, a selection
/// prompt while nothing is selected, and otherwise the selected record's
/// username, email, bio, job title, and avatar URL.
pub struct DetailPane<'a> {
    /// The selected record, if any
    user: Option<&'a User>,
    /// Whether the initial load is still outstanding
    loading: bool,
    /// Block for styling the card
    block: Option<Block<'a>>,
    /// Style for field values
    style: Style,
    /// Style for field labels
    label_style: Style,
    /// Style for the username heading
    title_style: Style,
    /// Style for the loading and prompt lines
    notice_style: Style,
}

impl<'a> Default for DetailPane<'a> {
    fn default() -> Self {
        Self {
            user: None,
            loading: false,
            block: None,
            style: Style::default(),
            label_style: Style::default().add_modifier(Modifier::BOLD),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            notice_style: Style::default(),
        }
    }
}

impl<'a> DetailPane<'a> {
    /// Create a new detail pane for an optional selection
    pub fn new(user: Option<&'a User>) -> Self {
        Self { user, ..Self::default() }
    }

    /// Set whether the loading indicator replaces the card
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the block for the card
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the style for field values
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style for field labels
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Set the style for the username heading
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Set the style for the loading and prompt lines
    pub fn notice_style(mut self, style: Style) -> Self {
        self.notice_style = style;
        self
    }

    fn field(&self, label: &'static str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(label, self.label_style),
            Span::styled(value.to_string(), self.style),
        ])
    }

    fn card(&self, user: &User) -> Text<'static> {
        let mut lines = Vec::with_capacity(6);

        lines.push(Line::from(Span::styled(
            user.username().to_string(),
            self.title_style,
        )));
        lines.push(Line::default());
        lines.push(self.field("Email: ", &user.profile.email));
        lines.push(self.field("Bio: ", &user.bio));
        lines.push(self.field("Job Title: ", &user.job_title));
        lines.push(self.field("Avatar: ", &user.avatar_url));

        Text::from(lines)
    }
}

impl<'a> Widget for DetailPane<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.loading {
            Text::from(Span::styled(LOADING_TEXT, self.notice_style))
        } else {
            match self.user {
                Some(user) => self.card(user),
                None => Text::from(Span::styled(PROMPT_TEXT, self.notice_style)),
            }
        };

        let mut paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }

        paragraph.render(area, buf);
    }
}

/// Creates a DetailPane widget with preset styles
pub fn detail_pane(user: Option<&User>) -> DetailPane<'_> {
    DetailPane::new(user)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .style(Style::default().fg(Color::White))
        .label_style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .notice_style(Style::default().fg(Color::DarkGray))
}
