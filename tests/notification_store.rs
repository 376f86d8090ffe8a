mod common;

use common::{notification, seeded_notifications};
use huddle::{Category, Filter, NotificationEvent, NotificationStore};

#[test]
fn unread_count_matches_unread_entries_regardless_of_filter() {
    let store = seeded_notifications();

    assert_eq!(store.unread_count(), 2);
    // Filtering the view must not affect the badge counter.
    assert_eq!(store.list(Filter::Category(Category::Like)).len(), 1);
    assert_eq!(store.unread_count(), 2);
}

#[test]
fn list_all_returns_seed_order() {
    let store = seeded_notifications();
    let all = store.list(Filter::All);

    let ids: Vec<u64> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn list_order_is_stable_across_read_state_changes() {
    let store = seeded_notifications();
    store.mark_read(2);
    store.mark_read(1);

    let ids: Vec<u64> = store.list(Filter::All).iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn filter_like_returns_exactly_the_like_notification() {
    let store = seeded_notifications();

    let likes = store.list(Filter::Category(Category::Like));
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].category, Category::Like);
    assert_eq!(likes[0].id, 3);
}

#[test]
fn list_returns_empty_when_nothing_matches() {
    let store = NotificationStore::with_seed(vec![notification(
        1,
        Category::Message,
        "Only message",
        false,
    )]);

    assert!(store.list(Filter::Category(Category::Group)).is_empty());
}

#[test]
fn mark_read_clears_single_unread() {
    let store = seeded_notifications();
    store.mark_read(1);

    assert_eq!(store.unread_count(), 1);
    let first = &store.list(Filter::All)[0];
    assert!(first.read);
}

#[test]
fn mark_read_unknown_id_is_silent_noop() {
    let store = seeded_notifications();
    store.mark_read(999);

    assert_eq!(store.unread_count(), 2);
    assert_eq!(store.len(), 4);
}

#[test]
fn mark_all_read_applies_beyond_the_active_filter() {
    let store = seeded_notifications();

    // The operation targets the whole set, not the filtered view.
    store.mark_all_read();

    assert_eq!(store.unread_count(), 0);
    assert!(store.list(Filter::All).iter().all(|n| n.read));
}

#[test]
fn remove_is_permanent_and_idempotent() {
    let store = seeded_notifications();
    store.remove(2);
    let after_once: Vec<u64> = store.list(Filter::All).iter().map(|n| n.id).collect();

    // Rapid double-click on delete: same resulting set.
    store.remove(2);
    let after_twice: Vec<u64> = store.list(Filter::All).iter().map(|n| n.id).collect();

    assert_eq!(after_once, vec![1, 3, 4]);
    assert_eq!(after_once, after_twice);
}

#[test]
fn push_assigns_fresh_ids_above_seed() {
    let store = seeded_notifications();
    let rx = store.subscribe();
    let id = store.push(Category::Like, "Post Liked", "Someone liked your post", "now");

    assert_eq!(id, 5);
    assert_eq!(rx.try_recv().unwrap(), NotificationEvent::Added { id });
    assert_eq!(store.len(), 5);
    assert_eq!(store.unread_count(), 3);
    // New arrivals append to the tail of the stable order.
    assert_eq!(store.list(Filter::All).last().unwrap().id, id);
}

#[test]
fn seeding_the_maximum_id_does_not_overflow() {
    let store = NotificationStore::with_seed(vec![notification(
        u64::MAX,
        Category::Message,
        "Edge",
        false,
    )]);

    assert_eq!(store.len(), 1);
    store.mark_read(u64::MAX);
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn mutating_a_snapshot_does_not_affect_the_store() {
    let store = seeded_notifications();
    let mut snapshot = store.list(Filter::All);
    snapshot.clear();

    assert_eq!(store.len(), 4);
}

#[test]
fn events_are_broadcast_after_mutations() {
    let store = seeded_notifications();
    let rx = store.subscribe();

    store.mark_read(1);
    store.remove(4);
    store.mark_all_read();

    assert_eq!(rx.try_recv().unwrap(), NotificationEvent::MarkedRead { id: 1 });
    assert_eq!(rx.try_recv().unwrap(), NotificationEvent::Removed { id: 4 });
    assert_eq!(rx.try_recv().unwrap(), NotificationEvent::AllMarkedRead);
    assert!(rx.try_recv().is_err());
}

#[test]
fn already_read_mark_emits_no_event() {
    let store = seeded_notifications();
    let rx = store.subscribe();

    store.mark_read(3);
    store.mark_read(999);

    assert!(rx.try_recv().is_err());
}
