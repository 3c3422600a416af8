//! Word construction test
//!
//! Decides whether a word can be spelled from a multiset of letters.

/// Check whether `word` can be built from `letters`, using each letter at most once
///
/// `letters` is treated as a multiset: a repeated letter in the word needs a repeated
/// letter in `letters`. Order is irrelevant. Both sides are compared as-is, so callers
/// pass canonical uppercase text.
///
/// # Examples
/// ```
/// use zen_word::core::can_form;
///
/// assert!(can_form("CAT", b"CATXYZW"));
/// assert!(can_form("TAC", b"CATXYZW"));
/// assert!(!can_form("CATT", b"CATXYZW")); // needs two T's
/// assert!(!can_form("cat", b"CATXYZW")); // not canonical
/// ```
#[must_use]
pub fn can_form(word: &str, letters: &[u8]) -> bool {
    // Slots already consumed by earlier characters of the word
    let mut used = vec![false; letters.len()];

    word.chars().all(|ch| {
        let slot = letters
            .iter()
            .zip(&used)
            .position(|(&b, &taken)| !taken && char::from(b) == ch);

        match slot {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_word_from_distinct_letters() {
        assert!(can_form("CAT", b"CATXYZW"));
        assert!(can_form("WAXY", b"CATXYZW"));
        assert!(can_form("CATXYZW", b"CATXYZW"));
    }

    #[test]
    fn rejects_reused_letter() {
        assert!(!can_form("CATT", b"CATXYZW"));
        assert!(!can_form("LULL", b"LUABCDE"));
    }

    #[test]
    fn rejects_missing_letter() {
        assert!(!can_form("DOG", b"CATXYZW"));
        assert!(!can_form("ABCDEFG", b"ABCDOGT"));
    }

    #[test]
    fn order_does_not_matter() {
        assert!(can_form("GOD", b"ABCDOGT"));
        assert!(can_form("DOG", b"ABCDOGT"));
    }

    #[test]
    fn repeated_letters_match_repeated_slots() {
        assert!(can_form("TOOT", b"TTOO"));
        assert!(!can_form("TOOTS", b"TTOO"));
    }

    #[test]
    fn large_multisets_track_every_slot() {
        let letters = [b'A'; 65];
        assert!(can_form(&"A".repeat(65), &letters));
        assert!(!can_form(&"A".repeat(66), &letters));

        let mut mixed = vec![b'A'; 70];
        mixed.push(b'Z');
        assert!(can_form(&format!("{}Z", "A".repeat(70)), &mixed));
    }

    #[test]
    fn empty_word_is_trivially_formed() {
        assert!(can_form("", b"ABCDOGT"));
    }

    #[test]
    fn non_ascii_never_matches() {
        assert!(!can_form("CAFÉ", b"CAFEXYZ"));
    }
}
