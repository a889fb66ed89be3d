//! Summary statistics over an ordered list of blog records.
//!
//! Every function here is a pure, read-only reduction: the input slice is
//! never mutated and an empty slice yields an explicit absent value rather
//! than an error. All tie-breaks are deterministic by input order.

use std::collections::HashMap;

use crate::models::{AuthorBlogCount, AuthorLikes, Blog, BlogStats};

// ── Public API ────────────────────────────────────────────────────────────────

/// Sum of `likes` across all records. Zero for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// The record with the strictly maximum `likes` value.
///
/// The current best is only replaced on strict `>`, so among ties the first
/// record in input order wins. `None` for an empty slice.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(top) if blog.likes <= top.likes => Some(top),
        _ => Some(blog),
    })
}

/// The author appearing in the most records, with that count.
///
/// Ties go to the author whose first record appears earliest in the input.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let tallies = tally_by_author(blogs, |_| 1);
    max_tally(tallies).map(|(author, blogs)| AuthorBlogCount { author, blogs })
}

/// The author with the highest summed `likes`, with that sum.
///
/// Same tie-break discipline as [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let tallies = tally_by_author(blogs, |b| b.likes);
    max_tally(tallies).map(|(author, likes)| AuthorLikes { author, likes })
}

/// Compute all four summaries (plus the record count) over one snapshot.
pub fn summarize(blogs: &[Blog]) -> BlogStats {
    BlogStats {
        blogs: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs).cloned(),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Accumulate a per-author total, returning `(author, total)` pairs in
/// first-occurrence order of the author.
///
/// `weight` maps each record to its contribution (1 for counting, `likes`
/// for like sums). The side list of keys keeps the result independent of
/// hash-map iteration order.
fn tally_by_author(blogs: &[Blog], weight: impl Fn(&Blog) -> u64) -> Vec<(String, u64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, u64> = HashMap::new();

    for blog in blogs {
        if !totals.contains_key(&blog.author) {
            order.push(blog.author.clone());
        }
        *totals.entry(blog.author.clone()).or_insert(0) += weight(blog);
    }

    order
        .into_iter()
        .map(|author| {
            let total = totals[&author];
            (author, total)
        })
        .collect()
}

/// Select the pair with the maximum total, replacing only on strict `>` so
/// that the earliest entry wins ties.
fn max_tally(tallies: Vec<(String, u64)>) -> Option<(String, u64)> {
    let mut best: Option<(String, u64)> = None;
    for (author, total) in tallies {
        let replace = match &best {
            Some((_, top)) => total > *top,
            None => true,
        };
        if replace {
            best = Some((author, total));
        }
    }
    best
}

// ── Tests ─────────────────────────────────────────────────────────────────────
