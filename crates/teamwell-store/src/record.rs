// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! How each record kind is keyed and timestamped in the store.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use teamwell_core::{ChatMessage, HostIssue, SourceKind, TrackerIssue};

/// Identity of a chat message. Slack message ids are only unique per channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatKey {
    pub channel_id: String,
    pub message_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Identity of a hosted issue: repository slug and issue number.
pub type HostKey = (String, u64);

pub(crate) mod sealed {
    use super::*;

    /// Backing tables; one map per kind, keyed by [`StoredRecord::store_key`].
    #[derive(Debug, Default)]
    pub struct Tables {
        pub chat: HashMap<ChatKey, ChatMessage>,
        pub tracker: HashMap<String, TrackerIssue>,
        pub host: HashMap<HostKey, HostIssue>,
    }

    pub trait Sealed: Sized {
        type Key: Debug + Clone + Eq + Hash + Ord + Send + Sync + 'static;

        fn table(tables: &Tables) -> &HashMap<Self::Key, Self>;
        fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Key, Self>;
    }
}

/// A record the store can hold. Implemented for the three normalized kinds only.
pub trait StoredRecord: sealed::Sealed + Clone + Send + Sync + 'static {
    const KIND: SourceKind;

    /// Identity within the kind's table.
    fn store_key(&self) -> Self::Key;

    /// The timestamp time-range queries filter on.
    fn range_timestamp(&self) -> Option<DateTime<Utc>>;
}

impl sealed::Sealed for ChatMessage {
    type Key = ChatKey;

    fn table(tables: &sealed::Tables) -> &HashMap<ChatKey, Self> {
        &tables.chat
    }
    fn table_mut(tables: &mut sealed::Tables) -> &mut HashMap<ChatKey, Self> {
        &mut tables.chat
    }
}

impl StoredRecord for ChatMessage {
    const KIND: SourceKind = SourceKind::Chat;

    fn store_key(&self) -> ChatKey {
        ChatKey {
            channel_id: self.channel_id.clone(),
            message_id: self.message_id.clone(),
            timestamp: self.timestamp,
        }
    }

    fn range_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }
}

impl sealed::Sealed for TrackerIssue {
    type Key = String;

    fn table(tables: &sealed::Tables) -> &HashMap<String, Self> {
        &tables.tracker
    }
    fn table_mut(tables: &mut sealed::Tables) -> &mut HashMap<String, Self> {
        &mut tables.tracker
    }
}

impl StoredRecord for TrackerIssue {
    const KIND: SourceKind = SourceKind::Tracker;

    fn store_key(&self) -> String {
        self.key.clone()
    }

    fn range_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created
    }
}

impl sealed::Sealed for HostIssue {
    type Key = HostKey;

    fn table(tables: &sealed::Tables) -> &HashMap<HostKey, Self> {
        &tables.host
    }
    fn table_mut(tables: &mut sealed::Tables) -> &mut HashMap<HostKey, Self> {
        &mut tables.host
    }
}

impl StoredRecord for HostIssue {
    const KIND: SourceKind = SourceKind::Host;

    fn store_key(&self) -> HostKey {
        (self.repository.clone(), self.number)
    }

    fn range_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
