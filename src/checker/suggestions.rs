use crate::checker::distance::edit_distance;
use crate::checker::wordlist::WordList;
use crate::Result;

/// Generate ranked spelling suggestions for `word` from `dict`.
///
/// Scans the dictionary in sort order, keeps candidates whose distance `d`
/// satisfies `0 < d <= max_distance`, sorts ascending by distance with ties
/// keeping scan order, and truncates to `max_suggestions`. Fewer (possibly
/// zero) suggestions are returned when fewer qualify.
///
/// Distances are computed on the raw bytes without case folding, so the
/// caller's casing affects the ranking: `"HELO"` is two edits from
/// `"hello"`, not one.
pub fn generate(
    word: &str,
    dict: &WordList,
    max_distance: usize,
    max_suggestions: usize,
) -> Result<Vec<String>> {
    let mut ranked: Vec<(usize, &str)> = Vec::new();

    for candidate in dict.iter() {
        let dist = edit_distance(word, candidate)?;
        if dist > 0 && dist <= max_distance {
            ranked.push((dist, candidate));
        }
    }

    ranked.sort_by_key(|&(dist, _)| dist);
    ranked.truncate(max_suggestions);

    Ok(ranked.into_iter().map(|(_, w)| w.to_string()).collect())
}
