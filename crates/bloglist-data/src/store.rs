//! JSONL-backed blog document store.
//!
//! One JSON document per line, insertion order preserved. The whole file is
//! read into memory on open; every mutation rewrites the file atomically
//! (temp file + rename). Suited to the small, non-adversarial data sets this
//! service is built for.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use bloglist_core::error::{BlogError, Result};
use bloglist_core::models::{Blog, NewBlog};
use tracing::{debug, warn};

// ── BlogStore ─────────────────────────────────────────────────────────────────

/// In-memory view of the blog collection, backed by a JSONL file.
pub struct BlogStore {
    path: PathBuf,
    blogs: Vec<Blog>,
}

impl BlogStore {
    /// Open the store at `path`, loading any existing documents.
    ///
    /// A missing file yields an empty store. Blank or unparseable lines are
    /// skipped; duplicate ids keep their first occurrence. Line order in the
    /// file is the canonical record order.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let blogs = load_blogs(&path)?;
        debug!("Loaded {} blogs from {}", blogs.len(), path.display());
        Ok(Self { path, blogs })
    }

    /// Ordered read-only snapshot of all documents.
    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    /// Look up a single document by id.
    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    /// `true` when the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    /// Append a new document, assigning its id and creation timestamp, and
    /// persist the collection.
    pub fn insert(&mut self, new: NewBlog) -> Result<Blog> {
        let blog = Blog::from_new(new);
        self.blogs.push(blog.clone());
        self.persist()?;
        Ok(blog)
    }

    /// Replace title, author, url and likes of the document with `id`.
    ///
    /// Returns `Ok(None)` when no such document exists. The id, creation
    /// timestamp and position within the collection are preserved.
    pub fn update(&mut self, id: &str, new: NewBlog) -> Result<Option<Blog>> {
        let Some(blog) = self.blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        blog.title = new.title;
        blog.author = new.author;
        blog.url = new.url;
        blog.likes = new.likes.unwrap_or(0);
        let updated = blog.clone();

        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete the document with `id`. Returns `Ok(false)` when absent.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.blogs.len();
        self.blogs.retain(|b| b.id != id);
        if self.blogs.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Serialize all documents to a temp file, then rename over the target.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        for blog in &self.blogs {
            out.push_str(&serde_json::to_string(blog)?);
            out.push('\n');
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        std::fs::write(&tmp, &out)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!("Persisted {} blogs to {}", self.blogs.len(), self.path.display());
        Ok(())
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Read all documents from the JSONL file at `path`.
///
/// Returns an empty vector when the file does not exist. I/O errors other
/// than "not found" are propagated.
fn load_blogs(path: &Path) -> Result<Vec<Blog>> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(BlogError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let reader = std::io::BufReader::new(file);
    let mut blogs: Vec<Blog> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(_) => continue,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let blog: Blog = match serde_json::from_str(trimmed) {
            Ok(b) => b,
            Err(e) => {
                debug!("Skipping malformed line in {}: {}", path.display(), e);
                continue;
            }
        };

        if !seen_ids.insert(blog.id.clone()) {
            warn!("Duplicate blog id {} in {}, keeping first", blog.id, path.display());
            continue;
        }

        blogs.push(blog);
    }

    Ok(blogs)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn data_path(dir: &TempDir) -> PathBuf {
        dir.path().join("blogs.jsonl")
    }

    fn new_blog(title: &str, author: &str, likes: u64) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: author.to_string(),
            url: format!("http://example.com/{title}"),
            likes: Some(likes),
        }
    }

    fn write_lines(path: &Path, lines: &[&str]) {
        let mut file = std::fs::File::create(path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
    }

    // ── open ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_open_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = BlogStore::open(data_path(&dir)).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_open_skips_malformed_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let good = serde_json::json!({
            "id": "b1", "title": "T", "author": "A",
            "url": "http://x", "likes": 3,
            "createdAt": "2024-01-15T10:00:00Z",
        })
        .to_string();
        write_lines(&path, &["{not json{{", "", &good]);

        let store = BlogStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.blogs()[0].id, "b1");
    }

    #[test]
    fn test_open_deduplicates_ids_first_wins() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let first = serde_json::json!({
            "id": "dup", "title": "First", "url": "http://x",
            "createdAt": "2024-01-15T10:00:00Z",
        })
        .to_string();
        let second = serde_json::json!({
            "id": "dup", "title": "Second", "url": "http://y",
            "createdAt": "2024-01-16T10:00:00Z",
        })
        .to_string();
        write_lines(&path, &[&first, &second]);

        let store = BlogStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.blogs()[0].title, "First");
    }

    #[test]
    fn test_open_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let mut store = BlogStore::open(&path).unwrap();
        store.insert(new_blog("One", "A", 1)).unwrap();
        store.insert(new_blog("Two", "B", 2)).unwrap();
        store.insert(new_blog("Three", "C", 3)).unwrap();

        let reloaded = BlogStore::open(&path).unwrap();
        let titles: Vec<&str> = reloaded.blogs().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    // ── insert ────────────────────────────────────────────────────────────────

    #[test]
    fn test_insert_assigns_id_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let mut store = BlogStore::open(&path).unwrap();

        let blog = store.insert(new_blog("Maailmanmestari", "Mika Häkkinen", 0)).unwrap();
        assert!(!blog.id.is_empty());
        assert!(path.exists(), "data file must exist after insert");

        let reloaded = BlogStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.blogs()[0], blog);
    }

    #[test]
    fn test_insert_defaults_likes_to_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        let blog = store
            .insert(NewBlog {
                title: "No likes".to_string(),
                author: "Foo Bar".to_string(),
                url: "http://example.com".to_string(),
                likes: None,
            })
            .unwrap();
        assert_eq!(blog.likes, 0);
    }

    // ── get ───────────────────────────────────────────────────────────────────

    #[test]
    fn test_get_by_id() {
        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        let blog = store.insert(new_blog("One", "A", 1)).unwrap();

        assert_eq!(store.get(&blog.id), Some(&blog));
        assert!(store.get("nope").is_none());
    }

    // ── update ────────────────────────────────────────────────────────────────

    #[test]
    fn test_update_replaces_fields_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let mut store = BlogStore::open(&path).unwrap();
        let blog = store.insert(new_blog("One", "A", 1)).unwrap();

        let updated = store
            .update(&blog.id, new_blog("One", "A", 8))
            .unwrap()
            .expect("blog should exist");
        assert_eq!(updated.likes, 8);
        assert_eq!(updated.id, blog.id);
        assert_eq!(updated.created_at, blog.created_at);

        let reloaded = BlogStore::open(&path).unwrap();
        assert_eq!(reloaded.blogs()[0].likes, 8);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        let result = store.update("missing", new_blog("X", "Y", 0)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_keeps_position_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        store.insert(new_blog("One", "A", 1)).unwrap();
        let second = store.insert(new_blog("Two", "B", 2)).unwrap();
        store.insert(new_blog("Three", "C", 3)).unwrap();

        store.update(&second.id, new_blog("Two", "B", 99)).unwrap();

        let titles: Vec<&str> = store.blogs().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
        assert_eq!(store.blogs()[1].likes, 99);
    }

    // ── remove ────────────────────────────────────────────────────────────────

    #[test]
    fn test_remove_deletes_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let mut store = BlogStore::open(&path).unwrap();
        let blog = store.insert(new_blog("One", "A", 1)).unwrap();
        store.insert(new_blog("Two", "B", 2)).unwrap();

        assert!(store.remove(&blog.id).unwrap());
        assert_eq!(store.len(), 1);

        let reloaded = BlogStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.blogs()[0].title, "Two");
    }

    #[test]
    fn test_remove_unknown_id_returns_false() {
        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        store.insert(new_blog("One", "A", 1)).unwrap();
        assert!(!store.remove("missing").unwrap());
        assert_eq!(store.len(), 1);
    }

    // ── aggregation over the store snapshot ───────────────────────────────────

    #[test]
    fn test_snapshot_feeds_list_helper() {
        use bloglist_core::list_helper;

        let dir = TempDir::new().unwrap();
        let mut store = BlogStore::open(data_path(&dir)).unwrap();
        store.insert(new_blog("One", "A", 3)).unwrap();
        store.insert(new_blog("Two", "A", 5)).unwrap();
        store.insert(new_blog("Three", "B", 1)).unwrap();

        let stats = list_helper::summarize(store.blogs());
        assert_eq!(stats.total_likes, 9);
        assert_eq!(stats.most_blogs.unwrap().author, "A");
        assert_eq!(stats.most_likes.unwrap().likes, 8);
    }
}
