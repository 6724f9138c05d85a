//! Persistence contract for finished sessions

use std::collections::VecDeque;

use uuid::Uuid;

use super::session_record::SessionRecord;
use crate::error::StoreError;

/// Where finished sessions go
///
/// Implementations keep every record durably, hold back transmission
/// while offline, and let the caller mark records as sent by id.
pub trait RecordStore {
    fn store(&mut self, record: SessionRecord) -> Result<Uuid, StoreError>;

    /// Records not yet marked as transmitted, oldest first
    fn pending(&self) -> Vec<&SessionRecord>;

    fn mark_transmitted(&mut self, id: Uuid) -> Result<(), StoreError>;

    fn set_online(&mut self, online: bool);
}

/// In-memory store with an offline transmission queue
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Vec<SessionRecord>,
    queue: VecDeque<Uuid>,
    online: bool,
}

impl MemoryRecordStore {
    pub fn new(online: bool) -> Self {
        Self {
            online,
            ..Self::default()
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn get(&self, id: Uuid) -> Option<&SessionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Queued records to transmit now; empty while offline
    ///
    /// Drained records stay pending until `mark_transmitted` confirms them.
    pub fn drain_queue(&mut self) -> Vec<SessionRecord> {
        if !self.online {
            return Vec::new();
        }
        let ids: Vec<Uuid> = self.queue.drain(..).collect();
        ids.into_iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }
}

impl RecordStore for MemoryRecordStore {
    fn store(&mut self, record: SessionRecord) -> Result<Uuid, StoreError> {
        if self.get(record.id).is_some() {
            return Err(StoreError::Duplicate(record.id));
        }
        let id = record.id;
        if !record.transmitted {
            self.queue.push_back(id);
        }
        if !self.online {
            log::info!("offline: record {} queued for transmission", id);
        }
        self.records.push(record);
        Ok(id)
    }

    fn pending(&self) -> Vec<&SessionRecord> {
        self.records.iter().filter(|r| !r.transmitted).collect()
    }

    fn mark_transmitted(&mut self, id: Uuid) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.transmitted = true;
        self.queue.retain(|queued| *queued != id);
        Ok(())
    }

    fn set_online(&mut self, online: bool) {
        if online != self.online {
            log::info!(
                "record store {} ({} queued)",
                if online { "online" } else { "offline" },
                self.queue.len()
            );
        }
        self.online = online;
    }
}
