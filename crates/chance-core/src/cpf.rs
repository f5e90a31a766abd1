//! Brazilian CPF numbers.
//!
//! A CPF is nine base digits followed by two modulo-11 check digits. The
//! first check digit weighs the base digits `10..=2`; the second weighs the
//! base digits plus the first check digit `11..=2`. A result of 10 or 11
//! folds to 0.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::engine::Chance;
use crate::error::{ChanceError, Result};

pub const BASE_DIGITS: usize = 9;
pub const CPF_DIGITS: usize = 11;

/// Rendering for [`Chance::cpf_as_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CpfFormat {
    /// `000.000.000-00`
    #[default]
    Masked,
    /// `00000000000`
    Unmasked,
}

/// Eleven CPF digits with valid check digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: [u8; CPF_DIGITS],
}

impl Cpf {
    /// Complete nine base digits with both check digits.
    pub fn from_base(base: &[u8]) -> Result<Self> {
        ensure_base(base)?;
        let mut digits = [0_u8; BASE_DIGITS];
        digits.copy_from_slice(base);
        Ok(Self::assemble(digits))
    }

    fn assemble(base: [u8; BASE_DIGITS]) -> Self {
        let mut digits = [0_u8; CPF_DIGITS];
        digits[..BASE_DIGITS].copy_from_slice(&base);
        digits[9] = check_digit(&digits[..BASE_DIGITS]);
        digits[10] = check_digit(&digits[..BASE_DIGITS + 1]);
        Self { digits }
    }

    pub fn digits(&self) -> &[u8; CPF_DIGITS] {
        &self.digits
    }

    /// The CPF as a number; leading zeros are not preserved.
    pub fn numeral(&self) -> u64 {
        self.digits
            .iter()
            .fold(0_u64, |acc, digit| acc * 10 + u64::from(*digit))
    }

    /// Zero-padded 11-digit numeral.
    pub fn unmasked(&self) -> String {
        format!("{:011}", self.numeral())
    }

    pub fn masked(&self) -> String {
        insert_separators(&self.unmasked())
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl FromStr for Cpf {
    type Err = ChanceError;

    /// Parse masked or unmasked text, rejecting wrong check digits.
    fn from_str(value: &str) -> Result<Self> {
        let digits = parse_digits(value)?;
        let cpf = Self::from_base(&digits[..BASE_DIGITS])?;
        if cpf.digits != digits {
            return Err(ChanceError::Validation(format!(
                "cpf '{value}' has invalid check digits"
            )));
        }
        Ok(cpf)
    }
}

/// First check digit over the nine base digits.
pub fn check_digit_one(base: &[u8]) -> Result<u8> {
    ensure_base(base)?;
    Ok(check_digit(base))
}

/// Second check digit over the nine base digits followed by `d1`.
pub fn check_digit_two(base: &[u8], d1: u8) -> Result<u8> {
    ensure_base(base)?;
    ensure_decimal(d1)?;
    let mut digits = [0_u8; BASE_DIGITS + 1];
    digits[..BASE_DIGITS].copy_from_slice(base);
    digits[BASE_DIGITS] = d1;
    Ok(check_digit(&digits))
}

/// Insert separators into an 11-digit numeral: `DDD.DDD.DDD-DD`.
pub fn format(numeral: &str) -> Result<String> {
    if numeral.len() != CPF_DIGITS || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChanceError::Validation(format!(
            "cpf numeral must be {CPF_DIGITS} digits, got '{numeral}'"
        )));
    }
    Ok(insert_separators(numeral))
}

/// Whether `value`, masked or unmasked, carries correct check digits.
pub fn validate(value: &str) -> bool {
    value.parse::<Cpf>().is_ok()
}

impl Chance {
    /// Nine independent digits in `[0, 9]`.
    pub fn generate_base_digits(&mut self) -> [u8; BASE_DIGITS] {
        let mut base = [0_u8; BASE_DIGITS];
        for digit in base.iter_mut() {
            *digit = self.source.uniform_int(0, 9);
        }
        base
    }

    pub fn cpf(&mut self) -> Cpf {
        let cpf = Cpf::assemble(self.generate_base_digits());
        trace!(cpf = %cpf, "generated cpf");
        cpf
    }

    pub fn cpf_as_text(&mut self, format: CpfFormat) -> String {
        let cpf = self.cpf();
        match format {
            CpfFormat::Masked => cpf.masked(),
            CpfFormat::Unmasked => cpf.unmasked(),
        }
    }
}

fn ensure_base(base: &[u8]) -> Result<()> {
    if base.len() != BASE_DIGITS {
        return Err(ChanceError::Validation(format!(
            "cpf check digits need {BASE_DIGITS} base digits, got {}",
            base.len()
        )));
    }
    base.iter().try_for_each(|digit| ensure_decimal(*digit))
}

fn ensure_decimal(digit: u8) -> Result<()> {
    if digit > 9 {
        return Err(ChanceError::Validation(format!(
            "cpf digit out of range: {digit}"
        )));
    }
    Ok(())
}

/// Weights run from `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0_u32;
    let mut weight = digits.len() as u32 + 1;
    for digit in digits {
        sum += u32::from(*digit) * weight;
        weight -= 1;
    }
    let result = 11 - sum % 11;
    if result >= 10 { 0 } else { result as u8 }
}

/// `numeral` must be 11 ASCII digits.
fn insert_separators(numeral: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &numeral[0..3],
        &numeral[3..6],
        &numeral[6..9],
        &numeral[9..11]
    )
}

/// Accepts exactly `DDD.DDD.DDD-DD` or exactly 11 digits.
fn parse_digits(value: &str) -> Result<[u8; CPF_DIGITS]> {
    let bytes = value.as_bytes();
    let numeral: Vec<u8> = match bytes.len() {
        14 if bytes[3] == b'.' && bytes[7] == b'.' && bytes[11] == b'-' => bytes
            .iter()
            .enumerate()
            .filter(|(idx, _)| !matches!(idx, 3 | 7 | 11))
            .map(|(_, byte)| *byte)
            .collect(),
        CPF_DIGITS => bytes.to_vec(),
        _ => {
            return Err(ChanceError::Validation(format!(
                "cpf '{value}' must be 11 digits or DDD.DDD.DDD-DD"
            )));
        }
    };
    let mut digits = [0_u8; CPF_DIGITS];
    for (slot, byte) in digits.iter_mut().zip(&numeral) {
        if !byte.is_ascii_digit() {
            return Err(ChanceError::Validation(format!(
                "unexpected character '{}' in cpf '{value}'",
                char::from(*byte)
            )));
        }
        *slot = byte - b'0';
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::{check_digit, parse_digits};

    #[test]
    fn check_digit_folds_ten_and_eleven_to_zero() {
        // 11 - 0 = 11
        assert_eq!(check_digit(&[0; 9]), 0);
        // 11 - 10 = 1
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), 1);
        // 19 % 11 = 8
        assert_eq!(check_digit(&[1, 1, 0, 0, 0, 0, 0, 0, 0]), 3);
    }

    #[test]
    fn parse_digits_ignores_mask_separators() {
        let digits = parse_digits("111.444.777-35").expect("parse masked");
        assert_eq!(digits, [1, 1, 1, 4, 4, 4, 7, 7, 7, 3, 5]);
    }

    #[test]
    fn parse_digits_rejects_extra_digits() {
        assert!(parse_digits("111444777350").is_err());
    }
}
