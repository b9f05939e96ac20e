//! Fuzzy ranking of file names for quick access.

const MATCH: i32 = 10;
const CONSECUTIVE: i32 = 15;
const WORD_START: i32 = 10;
const CAMEL_HUMP: i32 = 5;
const NAME_PREFIX: i32 = 20;
/// One point lost per this many characters of candidate length
const LENGTH_DIVISOR: i32 = 5;

/// Indices of `candidates` matching `query`, best first.
///
/// Matching is a case-insensitive subsequence test. Equal scores keep the
/// candidates' original order. An empty query matches everything.
pub fn fuzzy_filter(query: &str, candidates: &[String]) -> Vec<usize> {
    if query.is_empty() {
        return (0..candidates.len()).collect();
    }

    let needle: Vec<char> = query.to_lowercase().chars().collect();

    let mut ranked: Vec<(usize, i32)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, candidate)| score(&needle, candidate).map(|s| (i, s)))
        .collect();

    ranked.sort_by(|(ia, sa), (ib, sb)| sb.cmp(sa).then(ia.cmp(ib)));
    ranked.into_iter().map(|(i, _)| i).collect()
}

/// Score `candidate` against a lowercased `needle`, `None` if it does not match.
///
/// The candidate is lowercased char by char the same way `str::to_lowercase`
/// does it, so chars that lowercase to several chars still line up with the
/// needle. Each lowered char keeps its source char for the bonus rules.
fn score(needle: &[char], candidate: &str) -> Option<i32> {
    let hay: Vec<(char, char)> = candidate
        .chars()
        .flat_map(|orig| orig.to_lowercase().map(move |lower| (orig, lower)))
        .collect();
    if hay.is_empty() {
        return None;
    }

    let mut total = 0;
    let mut matched = 0;
    let mut last: Option<usize> = None;

    for (pos, &(orig, lower)) in hay.iter().enumerate() {
        let Some(&want) = needle.get(matched) else {
            break;
        };
        if lower != want {
            continue;
        }

        total += MATCH;
        if last.is_some_and(|prev| prev + 1 == pos) {
            total += CONSECUTIVE;
        }
        let prev = pos.checked_sub(1).map(|p| hay[p].0);
        match prev {
            None => total += WORD_START,
            Some(p) if !p.is_alphanumeric() => total += WORD_START,
            Some(p) if orig.is_uppercase() && p.is_lowercase() => total += CAMEL_HUMP,
            Some(_) => {}
        }
        if matched == 0 && pos == 0 {
            total += NAME_PREFIX;
        }

        last = Some(pos);
        matched += 1;
    }

    if matched < needle.len() {
        return None;
    }

    Some(total - hay.len() as i32 / LENGTH_DIVISOR)
}
