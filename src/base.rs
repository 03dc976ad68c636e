//! Directory view state.
//!
//! The view's state lives in an explicit container with pure transition
//! methods, so filtering and selection stay testable without a terminal.
//! Rendering reads this state; only the event loop writes it.

use unicode_segmentation::UnicodeSegmentation;

use rolodex_api::{sort_users, User};

/// Load status for the directory view.
///
/// The view starts in [`LoadPhase::Loading`] and settles exactly once. A
/// failed load is recorded distinctly for diagnostics, but renders the same
/// as an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The initial fetch has not settled yet
    Loading,
    /// The fetch settled successfully
    Loaded,
    /// The fetch settled with an error; presented like an empty directory
    Failed,
}

impl LoadPhase {
    /// Whether the initial fetch is still outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

/// Keep records whose username contains the term, case-insensitively.
///
/// Order is preserved from `all`. An empty term keeps everything; a term
/// that matches nothing yields an empty vector, which the list widget
/// renders as an explicit "No users found" line.
pub fn filter_users(all: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return all.to_vec();
    }

    let needle = term.to_lowercase();
    all.iter()
        .filter(|user| user.username().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// State container for the directory view
#[derive(Debug)]
pub struct DirectoryStore {
    /// Every loaded record, sorted ascending by username
    all_users: Vec<User>,
    /// Records passing the current search term, in `all_users` order
    visible_users: Vec<User>,
    /// The selected record, if any; never cleared implicitly
    selected: Option<User>,
    /// Where the initial load stands
    phase: LoadPhase,
    /// Raw search input, case preserved for display
    search_term: String,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        DirectoryStore {
            all_users: Vec::new(),
            visible_users: Vec::new(),
            selected: None,
            phase: LoadPhase::Loading,
            search_term: String::new(),
        }
    }
}

impl DirectoryStore {
    /// Create a store in the initial loading state
    pub fn new() -> Self {
        Self::default()
    }

    /// The full record set
    pub fn all_users(&self) -> &[User] {
        &self.all_users
    }

    /// The records passing the current search term
    pub fn visible_users(&self) -> &[User] {
        &self.visible_users
    }

    /// The currently selected record, if any
    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Current load phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Current raw search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Apply a settled, successful load.
    ///
    /// Records are sorted here so the ordering invariant holds no matter
    /// what order the endpoint answered in. The current search term is
    /// reapplied, though in practice the term is empty while loading.
    pub fn users_loaded(&mut self, mut users: Vec<User>) {
        sort_users(&mut users);
        self.all_users = users;
        self.visible_users = filter_users(&self.all_users, &self.search_term);
        self.phase = LoadPhase::Loaded;
    }

    /// Apply a settled, failed load: an empty directory, phase recorded.
    ///
    /// Terminal for the session; there is no retry transition.
    pub fn load_failed(&mut self) {
        self.all_users = Vec::new();
        self.visible_users = Vec::new();
        self.phase = LoadPhase::Failed;
    }

    /// Replace the search term and recompute the visible set.
    ///
    /// Selection is deliberately untouched: a selected record stays
    /// selected even when the term filters it out of view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.visible_users = filter_users(&self.all_users, &self.search_term);
    }

    /// Append one character to the search term
    pub fn search_push(&mut self, c: char) {
        let mut term = self.search_term.clone();
        term.push(c);
        self.set_search_term(term);
    }

    /// Remove the last grapheme from the search term
    pub fn search_pop(&mut self) {
        let truncated = match self.search_term.grapheme_indices(true).last() {
            Some((idx, _)) => self.search_term[..idx].to_string(),
            None => return,
        };
        self.set_search_term(truncated);
    }

    /// Clear the search term
    pub fn search_clear(&mut self) {
        if !self.search_term.is_empty() {
            self.set_search_term(String::new());
        }
    }

    /// Select a record. Idempotent; there is no deselect operation.
    pub fn select(&mut self, user: User) {
        self.selected = Some(user);
    }
}
