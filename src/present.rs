// src/present.rs
/// Column headers of the contact list, in display order.
pub const HEADERS: [&str; 3] = ["Name", "Title", "Email"];

/// Display surface for extracted contacts.
/// Frontends (GUI/CLI) implement this; the fetch action only ever clears it
/// and then appends a full batch.
pub trait ContactView {
    /// Drop every row currently shown.
    fn clear(&mut self);

    /// Add one row at the end: name, title, email.
    fn append_row(&mut self, record: &crate::contact::Record);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Info,
    Error,
}

/// Modal message surface with a short title and a message.
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}

/// One notice, as held by a frontend until the user dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: &str, message: &str) -> Self {
        Self { kind, title: s!(title), message: s!(message) }
    }
}
