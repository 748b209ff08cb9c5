use crate::backend::session::BackendSession;
use cached::{Cached, TimedSizedCache};
use std::fmt::Debug;

const CACHE_SIZE: usize = 100;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 12;

/// A container for the backend sessions opened by the users.
/// Only 100 sessions can be stored at a time, and they expire after 12 hours.
#[derive(Debug)]
pub struct SessionStorage<S: Send + Sync = BackendSession> {
    sessions: TimedSizedCache<String, S>,
}

impl<S: Send + Sync> SessionStorage<S> {
    pub fn store(&mut self, id: String, session: S) {
        self.sessions.cache_set(id, session);
    }

    pub fn get(&mut self, id: &str) -> Option<&S> {
        self.sessions.cache_get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<S> {
        self.sessions.cache_remove(id)
    }
}

impl<S: Send + Sync> Default for SessionStorage<S> {
    fn default() -> Self {
        let sessions = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
