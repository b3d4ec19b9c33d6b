use crate::code::SecretCode;
use crate::error::GuessError;
use std::ops::RangeInclusive;

/// Per-position feedback for a guessed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right digit, right position (`+`).
    Exact,
    /// Digit is in the code, but somewhere else (`-`).
    Present,
    /// Digit is not in the code, or out of range (blank).
    Wrong,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Exact => '+',
            Mark::Present => '-',
            Mark::Wrong => ' ',
        }
    }
}

/// How repeated digits are matched against the code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Every guess digit is looked up in the code's position index on its own.
    /// A repeated guess digit can score `-` several times for one code digit.
    #[default]
    PositionIndex,
    /// Classic Mastermind: each code digit is matched at most once.
    Classic,
}

impl ScoringPolicy {
    pub fn score(self, code: &SecretCode, guess: &[u8], range: &RangeInclusive<u8>) -> Vec<Mark> {
        match self {
            ScoringPolicy::PositionIndex => score_guess(code, guess, range),
            ScoringPolicy::Classic => score_guess_classic(code, guess, range),
        }
    }
}

/// Turn guess text into digits.
///
/// The guess must be exactly `code_length` characters and every character
/// must be a decimal digit.
pub fn parse_guess(text: &str, code_length: usize) -> Result<Vec<u8>, GuessError> {
    let actual = text.chars().count();
    if actual == 0 || actual != code_length {
        return Err(GuessError::InvalidGuessFormat {
            expected: code_length,
            actual,
        });
    }
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(GuessError::InvalidGuessCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

/// Score a guess using the code's digit -> positions index.
///
/// Digits outside `range` (inclusive on both ends) are always `Wrong`.
pub fn score_guess(code: &SecretCode, guess: &[u8], range: &RangeInclusive<u8>) -> Vec<Mark> {
    guess
        .iter()
        .enumerate()
        .map(|(i, digit)| {
            if !range.contains(digit) {
                return Mark::Wrong;
            }
            match code.positions_of(*digit) {
                Some(positions) if positions.contains(&i) => Mark::Exact,
                Some(_) => Mark::Present,
                None => Mark::Wrong,
            }
        })
        .collect()
}

/// Score a guess so that each code digit is credited at most once.
pub fn score_guess_classic(
    code: &SecretCode,
    guess: &[u8],
    range: &RangeInclusive<u8>,
) -> Vec<Mark> {
    let secret = code.digits();
    let mut marks = vec![Mark::Wrong; guess.len()];
    let mut unmatched = [0usize; 256];

    // First pass: exact matches, counting the code digits they leave over
    for (i, &digit) in guess.iter().enumerate() {
        match secret.get(i) {
            Some(&s) if s == digit && range.contains(&digit) => marks[i] = Mark::Exact,
            Some(&s) => unmatched[s as usize] += 1,
            None => {}
        }
    }
    // Second pass: wrong-position matches, left to right
    for (i, &digit) in guess.iter().enumerate() {
        if marks[i] == Mark::Exact || !range.contains(&digit) {
            continue;
        }
        if unmatched[digit as usize] > 0 {
            unmatched[digit as usize] -= 1;
            marks[i] = Mark::Present;
        }
    }
    marks
}

pub fn marks_to_string(marks: &[Mark]) -> String {
    marks.iter().map(|m| m.to_char()).collect()
}

/// A non-empty score wins when every mark is exact.
pub fn is_win(marks: &[Mark]) -> bool {
    !marks.is_empty() && marks.iter().all(|m| *m == Mark::Exact)
}
