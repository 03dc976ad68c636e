#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::base::{filter_users, DirectoryStore, LoadPhase};
    use rolodex_api::{Profile, User};

    fn user(username: &str) -> User {
        User {
            id: format!("id-{username}"),
            created_at: "2021-02-18T16:42:29.338Z".into(),
            avatar_url: format!("https://cdn.example.com/{username}.jpg"),
            bio: format!("{username} bio"),
            job_title: "Technician".into(),
            profile: Profile {
                username: username.into(),
                first_name: "First".into(),
                last_name: "Last".into(),
                email: format!("{username}@example.com"),
            },
        }
    }

    fn usernames(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username()).collect()
    }

    #[test]
    fn test_load_sorts_case_insensitively() {
        let mut store = DirectoryStore::new();
        assert!(store.phase().is_loading());

        // Load order is wire order; the store owns the sort.
        store.users_loaded(vec![user("bob"), user("Alice")]);

        assert_eq!(store.phase(), LoadPhase::Loaded);
        assert_eq!(usernames(store.all_users()), vec!["Alice", "bob"]);
        // Both sets start out identical.
        assert_eq!(usernames(store.visible_users()), vec!["Alice", "bob"]);
    }

    #[test]
    fn test_filter_soundness_and_completeness() {
        let all = vec![user("Alice"), user("Alina"), user("bob"), user("malina")];
        let visible = filter_users(&all, "Li");

        // Soundness: everything visible matches the lowered term.
        for u in &visible {
            assert!(u.username().to_lowercase().contains("li"), "{}", u.username());
        }

        // Completeness: everything matching appears, in original order.
        assert_eq!(usernames(&visible), vec!["Alice", "Alina", "malina"]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let all = vec![user("bob"), user("Alice"), user("Alina")];
        let visible = filter_users(&all, "");

        assert_eq!(usernames(&visible), usernames(&all));
    }

    #[test]
    fn test_search_scenario_ali() {
        let mut store = DirectoryStore::new();
        store.users_loaded(vec![user("Alice"), user("bob"), user("Alina")]);

        store.set_search_term("ali");
        assert_eq!(usernames(store.visible_users()), vec!["Alice", "Alina"]);

        // The raw term keeps its case for display.
        store.set_search_term("ALI");
        assert_eq!(store.search_term(), "ALI");
        assert_eq!(usernames(store.visible_users()), vec!["Alice", "Alina"]);
    }

    #[test]
    fn test_no_match_yields_empty_visible_set() {
        let mut store = DirectoryStore::new();
        store.users_loaded(vec![user("Alice"), user("bob")]);

        store.set_search_term("zzz");
        assert!(store.visible_users().is_empty());
        // The full set is untouched.
        assert_eq!(store.all_users().len(), 2);
    }

    #[test]
    fn test_load_failure_presents_as_empty() {
        let mut store = DirectoryStore::new();
        store.load_failed();

        // Same shape the UI would see for a genuinely empty directory.
        assert!(!store.phase().is_loading());
        assert_eq!(store.phase(), LoadPhase::Failed);
        assert!(store.all_users().is_empty());
        assert!(store.visible_users().is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut store = DirectoryStore::new();
        store.users_loaded(vec![user("Alice"), user("bob")]);
        assert!(store.selected().is_none());

        let alice = store.visible_users()[0].clone();
        store.select(alice.clone());
        assert_eq!(store.selected().map(|u| u.username()), Some("Alice"));

        store.select(alice);
        assert_eq!(store.selected().map(|u| u.username()), Some("Alice"));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut store = DirectoryStore::new();
        store.users_loaded(vec![user("Alice"), user("bob")]);

        let alice = store.visible_users()[0].clone();
        store.select(alice);

        // Filter Alice out of view; the selection must persist.
        store.set_search_term("bob");
        assert_eq!(usernames(store.visible_users()), vec!["bob"]);
        assert_eq!(store.selected().map(|u| u.username()), Some("Alice"));

        store.search_clear();
        assert_eq!(store.selected().map(|u| u.username()), Some("Alice"));
    }

    #[test]
    fn test_search_editing_helpers() {
        let mut store = DirectoryStore::new();
        store.users_loaded(vec![user("Alice"), user("bob")]);

        store.search_push('a');
        store.search_push('l');
        assert_eq!(store.search_term(), "al");
        assert_eq!(usernames(store.visible_users()), vec!["Alice"]);

        store.search_pop();
        assert_eq!(store.search_term(), "a");

        // Popping a multi-byte grapheme removes the whole grapheme.
        store.search_push('é');
        store.search_pop();
        assert_eq!(store.search_term(), "a");

        store.search_clear();
        assert_eq!(store.search_term(), "");
        assert_eq!(store.visible_users().len(), 2);

        // Popping an empty term is a no-op.
        store.search_pop();
        assert_eq!(store.search_term(), "");
    }
}
