//! # Error Suggestions
//!
//! Helper functions for generating "did you mean" hints when a lookup names
//! an ISBN with no catalog entry. Following CLI recommendations, errors
//! should tell users what went wrong AND, where possible, how to fix it.
//!
//! The hint machinery is a plain Levenshtein edit distance over the
//! catalog's keys; it never guesses wildly, only offering a candidate
//! within distance 2 of the input.

/// Find the closest known ISBN to `input`, if any is close enough.
///
/// Returns `Some(isbn)` when a candidate is within edit distance 2 and the
/// distance is smaller than the input's own length (so short garbage does
/// not match everything).
pub fn similar_isbn<'a>(input: &str, known: &[&'a str]) -> Option<&'a str> {
    known
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.chars().count() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
