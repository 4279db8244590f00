//! Natural ("human") string ordering.
//!
//! Runs of ASCII digits are compared by numeric value, everything else
//! character by character, so `"Unit 2"` sorts before `"Unit 10"`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                match compare_digit_runs(&l_digits, &r_digits) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                match l.cmp(&r) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// Leading zeros are ignored for the value, then used as a tie-break so that
// "007" and "7" still have a stable order.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');

    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("Unit 2", "Unit 10"), Ordering::Less);
        assert_eq!(natural_cmp("Unit 10", "Unit 2"), Ordering::Greater);
        assert_eq!(natural_cmp("Unit 10", "Unit 10"), Ordering::Equal);
    }

    #[test]
    fn text_compares_lexicographically() {
        assert_eq!(natural_cmp("Group1", "Group2"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Group", "Group1"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_only_break_ties() {
        assert_eq!(natural_cmp("HW7", "HW007"), Ordering::Less);
        assert_eq!(natural_cmp("HW008", "HW7"), Ordering::Greater);
    }

    #[test]
    fn sorting_uses_natural_order() {
        let mut names = vec!["Lab 10", "Lab 1", "Lab 2", "Homework"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Homework", "Lab 1", "Lab 2", "Lab 10"]);
    }
}
