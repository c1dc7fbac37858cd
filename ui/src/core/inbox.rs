//! Fixed inbox snapshot shown on the landing page.
//!
//! Illustrative content only; it is never derived from the notification feed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub handle: String,
    pub avatar_url: String,
    /// Shown when the avatar image fails to load.
    pub initials: String,
}

impl Actor {
    pub fn new(handle: &str, avatar_url: &str, initials: &str) -> Self {
        Self {
            handle: handle.to_string(),
            avatar_url: avatar_url.to_string(),
            initials: initials.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxItem {
    /// `None` for system notices, which render an alert glyph instead of an avatar.
    pub actor: Option<Actor>,
    pub text: Vec<Segment>,
    pub age: String,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxSnapshot {
    pub title: String,
    pub mark_all_label: String,
    pub items: Vec<InboxItem>,
}

impl InboxSnapshot {
    pub fn showcase() -> Self {
        let jithen = Actor::new("@jithenms", "https://github.com/jithenms.png", "JS");
        let arman = Actor::new("@armank", "https://github.com/armans-code.png", "AK");
        let person = Actor::new("@person", "https://github.com/person.png", "PE");

        Self {
            title: "Notifications".into(),
            mark_all_label: "Mark all as read".into(),
            items: vec![
                InboxItem {
                    text: vec![
                        Segment::Strong(jithen.handle.clone()),
                        Segment::Plain(" sent you a message".into()),
                    ],
                    actor: Some(jithen),
                    age: "28 mins ago".into(),
                    unread: true,
                },
                InboxItem {
                    text: vec![
                        Segment::Strong(arman.handle.clone()),
                        Segment::Plain(" added you to ".into()),
                        Segment::Strong("Designers Groupchat".into()),
                    ],
                    actor: Some(arman),
                    age: "2 hours ago".into(),
                    unread: true,
                },
                InboxItem {
                    actor: None,
                    text: vec![Segment::Plain("Your password has been changed".into())],
                    age: "7 hours ago".into(),
                    unread: false,
                },
                InboxItem {
                    text: vec![
                        Segment::Strong(person.handle.clone()),
                        Segment::Plain(" mentioned you in a post".into()),
                    ],
                    actor: Some(person),
                    age: "Yesterday".into(),
                    unread: false,
                },
            ],
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| item.unread).count()
    }
}

impl Default for InboxSnapshot {
    fn default() -> Self {
        Self::showcase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_has_two_unread_items_on_top() {
        let inbox = InboxSnapshot::showcase();
        assert_eq!(inbox.items.len(), 4);
        assert_eq!(inbox.unread_count(), 2);
        assert!(inbox.items[0].unread && inbox.items[1].unread);
    }

    #[test]
    fn system_notice_has_no_actor() {
        let inbox = InboxSnapshot::showcase();
        let system: Vec<_> = inbox.items.iter().filter(|i| i.actor.is_none()).collect();
        assert_eq!(system.len(), 1);
        assert_eq!(system[0].age, "7 hours ago");
    }
}
