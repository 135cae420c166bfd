// crates/tzfind-core/src/fuzzy.rs

//! # Fuzzy Ranking
//!
//! Levenshtein distance and the "closest N" ranking used when a query lands
//! on a prefix rather than a complete name.

/// How many suggestions a prefix search returns at most.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`. Characters are compared as
/// Unicode scalar values, exactly as given: no case folding or
/// normalization happens here, callers decide whether to pre-normalize.
///
/// Uses a single rolling row sized to the shorter input.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    // row[j] holds the distance between the first i chars of `long` and the
    // first j chars of `short`.
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(lc != sc);
            let deletion = above + 1;
            let insertion = row[j] + 1;
            row[j + 1] = substitution.min(deletion).min(insertion);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// A candidate paired with its distance from the query. Only lives for the
/// duration of one [`rank_closest`] call.
#[derive(Debug)]
struct WordDistance<'a> {
    word: &'a str,
    distance: usize,
}

/// Rank `candidates` by edit distance to `target` and keep the best `limit`.
///
/// The sort is stable: candidates at the same distance keep the order in
/// which they were given. Distances are not returned.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::fuzzy::rank_closest;
///
/// let words = ["test", "testing", "tested", "tent", "kritib"];
/// let best = rank_closest("test", &words, 3);
/// assert_eq!(best.len(), 3);
/// assert_eq!(best[0], "test");
/// ```
pub fn rank_closest<S: AsRef<str>>(target: &str, candidates: &[S], limit: usize) -> Vec<String> {
    let mut distances: Vec<WordDistance<'_>> = candidates
        .iter()
        .map(|c| {
            let word = c.as_ref();
            WordDistance {
                word,
                distance: edit_distance(target, word),
            }
        })
        .collect();

    distances.sort_by_key(|wd| wd.distance);

    distances
        .into_iter()
        .take(limit)
        .map(|wd| wd.word.to_owned())
        .collect()
}
