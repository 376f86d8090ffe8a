mod common;

use common::temp_seed;
use huddle::{Category, ConfigError, Filter, NotificationStore, SeedConfig, ConversationStore};

const VALID_SEED: &str = r#"theme_default = "dark"

[[notifications]]
id = 1
category = "message"
title = "New Message"
description = "John sent you a message"
created_at = "5 min ago"

[[notifications]]
id = 2
category = "like"
title = "Post Liked"
read = true

[[contacts]]
id = 1
display_name = "John Doe"
avatar_ref = "https://example.com/john.png"

[[contacts.messages]]
sender = "them"
text = "Hey, how are you?"

[[contacts]]
id = 2
display_name = "Jane Smith"
"#;

#[test]
fn valid_seed_populates_both_stores() {
    let (_dir, path) = temp_seed(VALID_SEED);
    let seed = SeedConfig::load_from(&path).unwrap();

    let notifications = NotificationStore::with_seed(seed.notification_seed());
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications.unread_count(), 1);
    assert_eq!(
        notifications.list(Filter::Category(Category::Like))[0].title,
        "Post Liked"
    );

    let (contacts, logs) = seed.conversation_seed();
    let conversations = ConversationStore::with_seed(contacts, logs);
    assert_eq!(conversations.contacts().len(), 2);
    assert_eq!(conversations.log(1).unwrap().len(), 1);
    assert!(conversations.log(2).unwrap().is_empty());
    // Seeded history drives the derived preview.
    assert_eq!(
        conversations.contact(1).unwrap().last_message_preview.as_deref(),
        Some("Hey, how are you?")
    );
}

#[test]
fn duplicate_notification_id_fails_validation() {
    let seed = r#"[[notifications]]
id = 1
category = "message"
title = "a"

[[notifications]]
id = 1
category = "group"
title = "b"
"#;
    let (_dir, path) = temp_seed(seed);

    let err = SeedConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn duplicate_contact_id_fails_validation() {
    let seed = r#"[[contacts]]
id = 7
display_name = "a"

[[contacts]]
id = 7
display_name = "b"
"#;
    let (_dir, path) = temp_seed(seed);

    let err = SeedConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn malformed_toml_fails_with_parse_error() {
    let (_dir, path) = temp_seed("invalid { toml }");

    let err = SeedConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_category_fails_with_parse_error() {
    let seed = r#"[[notifications]]
id = 1
category = "poke"
title = "a"
"#;
    let (_dir, path) = temp_seed(seed);

    let err = SeedConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn demo_dataset_matches_the_stock_client() {
    let seed = SeedConfig::default();
    assert!(seed.validate().is_ok());

    let notifications = NotificationStore::with_seed(seed.notification_seed());
    assert_eq!(notifications.len(), 4);
    assert_eq!(notifications.unread_count(), 2);

    let (contacts, logs) = seed.conversation_seed();
    let conversations = ConversationStore::with_seed(contacts, logs);
    let contacts = conversations.contacts();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].display_name, "John Doe");
    assert_eq!(contacts[0].unread_count, 2);
}
