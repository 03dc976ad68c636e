#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::super::searchbar::{search_bar, SearchBar};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_empty_term_shows_placeholder() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buffer = Buffer::empty(area);
        SearchBar::new("").render(area, &mut buffer);

        assert!(buffer_text(&buffer).contains("Search users..."));
    }

    #[test]
    fn test_term_is_rendered() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buffer = Buffer::empty(area);
        SearchBar::new("ali").render(area, &mut buffer);

        let content = buffer_text(&buffer);
        assert!(content.contains("ali"));
        assert!(!content.contains("Search users"));
    }

    #[test]
    fn test_long_term_keeps_tail_visible() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buffer = Buffer::empty(area);
        SearchBar::new("abcdefghijklmnop").render(area, &mut buffer);

        let content = buffer_text(&buffer);
        // Editing happens at the end, so the end must be on screen.
        assert!(content.contains("nop"));
        assert!(!content.contains("abc"));
    }

    #[test]
    fn test_preset_renders_within_block() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buffer = Buffer::empty(area);
        search_bar("bob").render(area, &mut buffer);

        let content = buffer_text(&buffer);
        assert!(content.contains("Search"));
        assert!(content.contains("bob"));
    }
}
