//! Typo-tolerant matching for command and section names.
//!
//! Classic Levenshtein distance over whole strings. A candidate within
//! distance 2 of the typed token qualifies as a "did you mean"
//! suggestion; ties are broken toward the lexicographically smallest
//! candidate so suggestions never depend on registry iteration order.

/// Maximum edit distance for a candidate to qualify as a suggestion.
pub(crate) const SUGGEST_THRESHOLD: usize = 2;

/// Levenshtein edit distance between two strings, char-wise.
///
/// Two-row dynamic program; O(len(a) * len(b)) time, O(len(b)) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// The candidate closest to `query`, if any lies within
/// [`SUGGEST_THRESHOLD`].
///
/// Among equally close candidates the lexicographically smallest wins.
pub fn closest<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for cand in candidates {
        let dist = levenshtein(query, cand);
        let better = match best {
            None => true,
            Some((best_str, best_dist)) => {
                dist < best_dist || (dist == best_dist && cand < best_str)
            },
        };
        if better {
            best = Some((cand, dist));
        }
    }
    match best {
        Some((cand, dist)) if dist <= SUGGEST_THRESHOLD => Some(cand),
        _ => None,
    }
}
