//! Number extraction with repair of the common `O`-for-`0` misread.

/// Collect the numeric values of all digit runs in `text`.
///
/// A run is a maximal sequence of ASCII digits and `O`/`o` characters;
/// `O` reads as `0` inside a run. Runs containing no true digit are
/// discarded, so a plain word like "TO" never yields a number.
fn digit_runs(text: &str) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut has_digit = false;

    for c in text.chars() {
        match c {
            '0'..='9' => {
                current.push(c);
                has_digit = true;
            }
            'O' | 'o' => current.push('0'),
            _ => flush_run(&mut current, &mut has_digit, &mut runs),
        }
    }
    flush_run(&mut current, &mut has_digit, &mut runs);

    runs
}

fn flush_run(current: &mut String, has_digit: &mut bool, runs: &mut Vec<u32>) {
    if *has_digit {
        if let Ok(value) = current.parse::<u32>() {
            runs.push(value);
        }
    }
    current.clear();
    *has_digit = false;
}

/// First number appearing in `text`, with `O`→`0` repair.
pub fn first_number(text: &str) -> Option<u32> {
    digit_runs(text).into_iter().next()
}

/// Last number appearing in `text`, with `O`→`0` repair.
pub fn last_number(text: &str) -> Option<u32> {
    digit_runs(text).into_iter().last()
}

/// Check whether a whitespace-split token reads as a single number.
///
/// Accepts the `O`-for-`0` misread but requires at least one true digit.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == 'O' || c == 'o')
        && token.chars().any(|c| c.is_ascii_digit())
}
