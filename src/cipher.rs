//! The fixed English <-> Al Bhed letter bijection.
//!
//! Both directions are materialized as 26-entry lookup tables when the map is
//! built, so `forward` and `reverse` are a single index each.

use std::fmt;

use crate::error::{CipherError, QuizError};

/// Number of letters on each side of the mapping.
pub const ALPHABET_LEN: usize = 26;

/// Canonical Al Bhed table, English letter first.
#[rustfmt::skip]
pub const AL_BHED_PAIRS: [(char, char); ALPHABET_LEN] = [
  ('A', 'Y'), ('B', 'P'), ('C', 'L'), ('D', 'T'), ('E', 'A'), ('F', 'V'), ('G', 'K'),
  ('H', 'R'), ('I', 'E'), ('J', 'Z'), ('K', 'G'), ('L', 'M'), ('M', 'S'), ('N', 'H'),
  ('O', 'U'), ('P', 'B'), ('Q', 'X'), ('R', 'N'), ('S', 'C'), ('T', 'D'), ('U', 'I'),
  ('V', 'J'), ('W', 'F'), ('X', 'Q'), ('Y', 'O'), ('Z', 'W'),
];

/// Which side of the mapping a symbol belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
  English,
  Cipher,
}

impl fmt::Display for Alphabet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Alphabet::English => f.write_str("English"),
      Alphabet::Cipher => f.write_str("Al Bhed"),
    }
  }
}

/// Immutable bidirectional letter mapping. Indices are `letter - b'A'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherMap {
  forward: [u8; ALPHABET_LEN],
  inverse: [u8; ALPHABET_LEN],
}

impl CipherMap {
  /// Build a map from (english, cipher) pairs, checking it is a full permutation.
  pub fn new(pairs: &[(char, char)]) -> Result<Self, CipherError> {
    if pairs.len() != ALPHABET_LEN {
      return Err(CipherError::WrongSize(pairs.len()));
    }

    let mut forward = [None::<u8>; ALPHABET_LEN];
    let mut inverse = [None::<u8>; ALPHABET_LEN];

    for &(en, ci) in pairs {
      let e = letter_index(en).ok_or(CipherError::NotALetter(en))?;
      let c = letter_index(ci).ok_or(CipherError::NotALetter(ci))?;
      if forward[e].is_some() {
        return Err(CipherError::DuplicateEnglish(index_letter(e as u8)));
      }
      if inverse[c].is_some() {
        return Err(CipherError::DuplicateCipher(index_letter(c as u8)));
      }
      forward[e] = Some(c as u8);
      inverse[c] = Some(e as u8);
    }

    // 26 distinct keys and 26 distinct values fill both tables completely.
    Ok(Self {
      forward: forward.map(|slot| slot.unwrap_or_default()),
      inverse: inverse.map(|slot| slot.unwrap_or_default()),
    })
  }

  /// The Al Bhed cipher.
  pub fn al_bhed() -> Result<Self, CipherError> {
    Self::new(&AL_BHED_PAIRS)
  }

  /// English letter -> cipher letter.
  pub fn forward(&self, letter: &str) -> Result<char, QuizError> {
    let idx = parse_symbol(letter, Alphabet::English)?;
    Ok(index_letter(self.forward[idx]))
  }

  /// Cipher letter -> the English letter that maps onto it.
  pub fn reverse(&self, cipher_letter: &str) -> Result<char, QuizError> {
    let idx = parse_symbol(cipher_letter, Alphabet::Cipher)?;
    Ok(index_letter(self.inverse[idx]))
  }

  /// All 26 symbols of one side, in English-letter order.
  pub fn alphabet(&self, which: Alphabet) -> [char; ALPHABET_LEN] {
    let mut out = ['A'; ALPHABET_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
      *slot = match which {
        Alphabet::English => index_letter(i as u8),
        Alphabet::Cipher => index_letter(self.forward[i]),
      };
    }
    out
  }

  pub fn pairs(&self) -> Vec<(char, char)> {
    self
      .forward
      .iter()
      .enumerate()
      .map(|(i, &c)| (index_letter(i as u8), index_letter(c)))
      .collect()
  }
}

/// Trim + uppercase. Applied to every symbol before lookup or comparison.
pub fn normalize_symbol(raw: &str) -> String {
  raw.trim().to_uppercase()
}

fn parse_symbol(raw: &str, alphabet: Alphabet) -> Result<usize, QuizError> {
  let normalized = normalize_symbol(raw);
  let mut chars = normalized.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => letter_index(ch).ok_or(QuizError::InvalidSymbol { symbol: normalized, alphabet }),
    _ => Err(QuizError::InvalidSymbol { symbol: normalized, alphabet }),
  }
}

fn letter_index(ch: char) -> Option<usize> {
  if ch.is_ascii_alphabetic() {
    Some((ch.to_ascii_uppercase() as u8 - b'A') as usize)
  } else {
    None
  }
}

fn index_letter(idx: u8) -> char {
  (b'A' + idx) as char
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::collections::HashSet;

  fn map() -> CipherMap {
    CipherMap::al_bhed().unwrap()
  }

  #[test]
  fn test_forward_known_letters() {
    let m = map();
    assert_eq!(m.forward("A").unwrap(), 'Y');
    assert_eq!(m.forward("z").unwrap(), 'W');
    assert_eq!(m.forward("  e \n").unwrap(), 'A');
  }

  #[test]
  fn test_reverse_known_letters() {
    let m = map();
    assert_eq!(m.reverse("Y").unwrap(), 'A');
    assert_eq!(m.reverse("w").unwrap(), 'Z');
    assert_eq!(m.reverse(" a ").unwrap(), 'E');
  }

  #[test]
  fn test_bijection_both_ways() {
    let m = map();
    for e in m.alphabet(Alphabet::English) {
      let c = m.forward(&e.to_string()).unwrap();
      assert_eq!(m.reverse(&c.to_string()).unwrap(), e);
    }
    for c in m.alphabet(Alphabet::Cipher) {
      let e = m.reverse(&c.to_string()).unwrap();
      assert_eq!(m.forward(&e.to_string()).unwrap(), c);
    }
  }

  #[test]
  fn test_alphabets_cover_26_distinct_symbols() {
    let m = map();
    for which in [Alphabet::English, Alphabet::Cipher] {
      let set: HashSet<char> = m.alphabet(which).into_iter().collect();
      assert_eq!(set.len(), ALPHABET_LEN);
    }
    assert_eq!(m.alphabet(Alphabet::English)[0], 'A');
    assert_eq!(m.alphabet(Alphabet::Cipher)[0], 'Y');
  }

  #[test]
  fn test_invalid_symbols_rejected() {
    let m = map();
    for bad in ["1", "", "   ", "AB", "é", "?"] {
      assert!(matches!(m.forward(bad), Err(QuizError::InvalidSymbol { alphabet: Alphabet::English, .. })), "{bad:?}");
      assert!(matches!(m.reverse(bad), Err(QuizError::InvalidSymbol { alphabet: Alphabet::Cipher, .. })), "{bad:?}");
    }
  }

  #[test]
  fn test_invalid_symbol_carries_normalized_input() {
    let err = map().forward(" ab ").unwrap_err();
    assert_eq!(err, QuizError::InvalidSymbol { symbol: "AB".into(), alphabet: Alphabet::English });
  }

  #[test]
  fn test_pairs_match_table() {
    assert_eq!(map().pairs(), AL_BHED_PAIRS.to_vec());
  }

  #[test]
  fn test_construction_rejects_bad_tables() {
    assert_eq!(CipherMap::new(&AL_BHED_PAIRS[..25]), Err(CipherError::WrongSize(25)));

    let mut dup_value = AL_BHED_PAIRS;
    dup_value[1] = ('B', 'Y');
    assert_eq!(CipherMap::new(&dup_value), Err(CipherError::DuplicateCipher('Y')));

    let mut dup_key = AL_BHED_PAIRS;
    dup_key[1] = ('a', 'P');
    assert_eq!(CipherMap::new(&dup_key), Err(CipherError::DuplicateEnglish('A')));

    let mut digit = AL_BHED_PAIRS;
    digit[2] = ('C', '7');
    assert_eq!(CipherMap::new(&digit), Err(CipherError::NotALetter('7')));
  }

  #[test]
  fn test_identity_table_is_accepted() {
    let identity: Vec<(char, char)> = (b'A'..=b'Z').map(|b| (b as char, b as char)).collect();
    let m = CipherMap::new(&identity).unwrap();
    assert_eq!(m.forward("q").unwrap(), 'Q');
    assert_eq!(m.reverse("Q").unwrap(), 'Q');
  }
}
