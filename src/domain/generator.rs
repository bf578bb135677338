//! Default workspace generation.
//!
//! New workspaces are seeded with a name/icon pair taken from a fixed cycle of
//! five configurations, plus a random handful of listed and pinned items so a
//! fresh workspace never looks empty. Only the name/icon cycle is
//! deterministic; item counts and kinds come from the supplied RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::WorkspaceItem;
use super::workspace::Workspace;

/// Name/icon pairs cycled through by [`next_default_workspace`].
pub const DEFAULT_CONFIGS: [(&str, &str); 5] = [
    ("Files", "folder"),
    ("Projects", "macwindow"),
    ("Notifications", "bell"),
    ("Downloads", "arrow.down.circle"),
    ("Documents", "doc"),
];

const LIST_ITEM_COUNT: std::ops::RangeInclusive<usize> = 5..=10;
const PINNED_ITEM_COUNT: std::ops::RangeInclusive<usize> = 0..=6;

/// Title template (`{n}` is the 1-based position) and icon per list item kind.
const LIST_KINDS: [(&str, &str); 5] = [
    ("Project {n}", "folder"),
    ("Document {n}.pdf", "doc.text"),
    ("Notes {n}.txt", "note.text"),
    ("Image {n}.png", "photo"),
    ("Script {n}.swift", "terminal"),
];

const PINNED_KINDS: [(&str, &str); 10] = [
    ("Quick Access {n}", "star.fill"),
    ("Favorites {n}", "heart.fill"),
    ("Shortcut {n}", "link"),
    ("Bookmark {n}", "bookmark.fill"),
    ("Recent {n}", "clock.fill"),
    ("Important {n}", "exclamationmark.circle.fill"),
    ("Shared {n}", "person.2.fill"),
    ("Archive {n}", "archivebox.fill"),
    ("Tagged {n}", "tag.fill"),
    ("Cloud {n}", "icloud.fill"),
];

/// Builds the default workspace that follows `count` existing ones.
///
/// The name and icon come from [`DEFAULT_CONFIGS`] at `count % 5`. The list
/// gets 5 to 10 items and the pinned grid 0 to 6.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sidebar_explorer::domain::generator::next_default_workspace;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let workspace = next_default_workspace(6, &mut rng);
/// assert_eq!(workspace.name, "Projects");
/// assert!((5..=10).contains(&workspace.list_items().len()));
/// ```
pub fn next_default_workspace<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Workspace {
    let (name, icon) = DEFAULT_CONFIGS[count % DEFAULT_CONFIGS.len()];
    let created = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let list_count = rng.gen_range(LIST_ITEM_COUNT);
    let list_items = (1..=list_count)
        .map(|n| random_item(&LIST_KINDS, n, format!("Created on {created}"), rng))
        .collect();

    let pinned_count = rng.gen_range(PINNED_ITEM_COUNT);
    let pinned_items = (1..=pinned_count)
        .map(|n| random_item(&PINNED_KINDS, n, "Pinned item".to_string(), rng))
        .collect();

    tracing::debug!(count, name, list_count, pinned_count, "generated default workspace");

    Workspace::new(name, icon, list_items, pinned_items)
}

fn random_item<R: Rng + ?Sized>(
    kinds: &[(&str, &str)],
    n: usize,
    description: String,
    rng: &mut R,
) -> WorkspaceItem {
    let (template, icon) = kinds.choose(rng).copied().unwrap_or(kinds[0]);
    WorkspaceItem::new(template.replace("{n}", &n.to_string()), description, icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_cycle_through_default_configs() {
        let mut rng = StdRng::seed_from_u64(1);
        let names: Vec<String> = (0..7)
            .map(|count| next_default_workspace(count, &mut rng).name)
            .collect();

        assert_eq!(
            names,
            ["Files", "Projects", "Notifications", "Downloads", "Documents", "Files", "Projects"]
        );
    }

    #[test]
    fn item_counts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in 0..50 {
            let ws = next_default_workspace(count, &mut rng);
            assert!(LIST_ITEM_COUNT.contains(&ws.list_items().len()));
            assert!(PINNED_ITEM_COUNT.contains(&ws.pinned_items().len()));
            assert!(ws.selected_item_id().is_none());
        }
    }

    #[test]
    fn items_are_numbered_from_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let ws = next_default_workspace(0, &mut rng);

        assert!(ws.list_items()[0].title.contains('1'));
        assert!(ws.list_items().iter().all(|item| item.description.starts_with("Created on ")));
        assert!(ws.pinned_items().iter().all(|item| item.description == "Pinned item"));
    }

    #[test]
    fn same_seed_same_shape() {
        let a = next_default_workspace(2, &mut StdRng::seed_from_u64(9));
        let b = next_default_workspace(2, &mut StdRng::seed_from_u64(9));

        let titles = |ws: &Workspace| ws.list_items().iter().map(|i| i.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&a), titles(&b));
        assert_eq!(a.pinned_items().len(), b.pinned_items().len());
    }
}
