// src/gui/table_model.rs
//
// In-memory rows behind the list view and the pending notices.
// These are the GUI's halves of the presentation traits.

use std::collections::VecDeque;

use crate::{
    contact::Record,
    present::{ContactView, Notice, NoticeKind, Notifier},
};

#[derive(Default)]
pub struct ContactTable {
    rows: Vec<Record>,
}

impl ContactTable {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ContactView for ContactTable {
    fn clear(&mut self) {
        self.rows.clear();
    }
    fn append_row(&mut self, record: &Record) {
        self.rows.push(record.clone());
    }
}

/// Notices wait here until dismissed, oldest first.
#[derive(Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    pub fn is_open(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        logd!("UI: notice {:?} \"{}\"", kind, title);
        self.pending.push_back(Notice::new(kind, title, message));
    }
}
