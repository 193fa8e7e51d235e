//! Process-wide, append-only memo storage.
//!
//! Memos live only as long as the process. Every append takes the lock, so
//! concurrent requests from different workers are stored in lock order.

use memo_types::Memo;
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoStore {
    memos: Mutex<Vec<Memo>>,
}

impl MemoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, memo: Memo) {
        self.memos.lock().push(memo);
    }

    pub fn len(&self) -> usize {
        self.memos.lock().len()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<Memo> {
        self.memos.lock().clone()
    }
}
