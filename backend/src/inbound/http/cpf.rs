//! CPF (Brazilian taxpayer number) format and check-digit validation.
//!
//! Accepts eleven bare digits or the punctuated `000.000.000-00` form. The
//! last two digits are mod-11 check digits over the preceding nine and ten
//! digits respectively.

use thiserror::Error;

const DIGITS: usize = 11;
const FORMATTED_LEN: usize = 14;

/// Reasons a CPF is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum CpfError {
    /// Neither eleven digits nor `000.000.000-00`.
    #[error("cpf must be 11 digits, optionally formatted as 000.000.000-00")]
    Format,
    /// Every digit is the same, which passes the checksum but is never issued.
    #[error("cpf must not repeat a single digit")]
    RepeatedDigits,
    /// Check digits do not match.
    #[error("cpf check digits are invalid")]
    CheckDigits,
}

impl CpfError {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Self::Format => "invalid_cpf_format",
            Self::RepeatedDigits | Self::CheckDigits => "invalid_cpf",
        }
    }
}

fn digits(raw: &str) -> Result<[u32; DIGITS], CpfError> {
    let bytes = raw.as_bytes();
    let digit_bytes: Vec<u8> = match bytes.len() {
        DIGITS => bytes.to_vec(),
        FORMATTED_LEN if bytes[3] == b'.' && bytes[7] == b'.' && bytes[11] == b'-' => bytes
            .iter()
            .enumerate()
            .filter(|(index, _)| ![3, 7, 11].contains(index))
            .map(|(_, byte)| *byte)
            .collect(),
        _ => return Err(CpfError::Format),
    };

    let mut out = [0; DIGITS];
    for (slot, byte) in out.iter_mut().zip(digit_bytes) {
        *slot = char::from(byte).to_digit(10).ok_or(CpfError::Format)?;
    }
    Ok(out)
}

fn check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=weight_start).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

/// Validate a CPF in bare or punctuated form.
pub(crate) fn validate(raw: &str) -> Result<(), CpfError> {
    let digits = digits(raw)?;
    if digits.iter().all(|digit| *digit == digits[0]) {
        return Err(CpfError::RepeatedDigits);
    }
    if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
        return Err(CpfError::CheckDigits);
    }
    Ok(())
}
