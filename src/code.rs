use crate::error::ConfigError;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// The secret sequence of digits for one round.
///
/// Alongside the ordered digits it keeps an index from each digit value to the
/// positions where it occurs, so scoring can answer "is this digit here?" and
/// "is it anywhere?" without scanning the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode {
    digits: Vec<u8>,
    positions: HashMap<u8, Vec<usize>>,
}

impl SecretCode {
    /// Draw `length` independent digits uniformly from `min..max`.
    ///
    /// The upper bound is exclusive. Digits may repeat.
    pub fn generate<R: Rng>(length: usize, min: u8, max: u8, rng: &mut R) -> Self {
        let digits = (0..length).map(|_| rng.gen_range(min..max)).collect();
        Self::from_digits(digits)
    }

    pub fn from_digits(digits: Vec<u8>) -> Self {
        let mut positions: HashMap<u8, Vec<usize>> = HashMap::new();
        for (i, &digit) in digits.iter().enumerate() {
            positions.entry(digit).or_default().push(i);
        }
        Self { digits, positions }
    }

    /// Parse a code written as a digit string such as `"1234"`.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConfigError::InvalidCode("code is empty".to_string()));
        }
        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ConfigError::InvalidCode(format!("'{c}' is not a digit")))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Self::from_digits(digits))
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Positions holding `digit`, in ascending order.
    pub fn positions_of(&self, digit: u8) -> Option<&[usize]> {
        self.positions.get(&digit).map(Vec::as_slice)
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_digits_builds_position_index() {
        let code = SecretCode::from_digits(vec![3, 1, 3, 5]);
        assert_eq!(code.len(), 4);
        assert_eq!(code.positions_of(3), Some(&[0, 2][..]));
        assert_eq!(code.positions_of(1), Some(&[1][..]));
        assert_eq!(code.positions_of(4), None);
        assert_eq!(code.positions_of(5), Some(&[3][..]));
    }

    #[test]
    fn test_generate_stays_in_half_open_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let code = SecretCode::generate(4, 1, 6, &mut rng);
            assert_eq!(code.len(), 4);
            assert!(code.digits().iter().all(|&d| (1..6).contains(&d)));
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                SecretCode::generate(6, 0, 10, &mut a),
                SecretCode::generate(6, 0, 10, &mut b)
            );
        }
    }

    #[test]
    fn test_generate_zero_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let code = SecretCode::generate(0, 1, 6, &mut rng);
        assert!(code.is_empty());
        assert_eq!(code.to_string(), "");
    }

    #[test]
    fn test_parse() {
        let code = SecretCode::parse(" 1234\n").unwrap();
        assert_eq!(code.digits(), &[1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(matches!(
            SecretCode::parse("12a4"),
            Err(ConfigError::InvalidCode(_))
        ));
        assert!(matches!(
            SecretCode::parse(""),
            Err(ConfigError::InvalidCode(_))
        ));
    }
}
