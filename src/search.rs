use crate::cache::PasswdCache;
use crate::entry::PasswdEntry;

/// Case-insensitive substring match over the descriptive fields of an entry.
///
/// The password field is never searched.
pub fn matches(entry: &PasswdEntry, query: &str) -> bool {
    let q = query.to_lowercase();
    q.is_empty()
        || entry.username().to_lowercase().contains(&q)
        || entry.info().to_lowercase().contains(&q)
        || entry.homedir().to_lowercase().contains(&q)
        || entry.shell().to_lowercase().contains(&q)
        || entry.uid().to_string().contains(&q)
        || entry.gid().to_string().contains(&q)
}

impl PasswdCache {
    /// Entries matching `query`, in file order. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&PasswdEntry> {
        self.iter().filter(|e| matches(e, query)).collect()
    }
}
