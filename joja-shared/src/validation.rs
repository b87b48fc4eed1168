//! Client-side validation for sign-up and password forms.
//!
//! The rules mirror what the backend enforces, so forms can reject bad input
//! before a request is sent.

use thiserror::Error;

/// Validation failures the forms surface inline.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty.
    #[error("Campo obrigatório.")]
    Required,
    /// CPF does not have 11 digits.
    #[error("CPF incompleto. Digite os 11 números.")]
    CpfIncomplete,
    /// CPF digits fail the checksum (or are all repeated).
    #[error("CPF inválido.")]
    CpfInvalid,
    /// Password shorter than 8 characters.
    #[error("A senha deve ter no mínimo 8 caracteres.")]
    SenhaTooShort,
    /// Password contains a space.
    #[error("A senha não pode conter espaços.")]
    SenhaHasSpace,
    /// Password lacks a digit or an uppercase letter.
    #[error("A senha precisa de ao menos um número e uma letra maiúscula.")]
    SenhaTooWeak,
    /// Passwords do not match.
    #[error("As senhas não coincidem.")]
    SenhasDoNotMatch,
    /// E-mail is missing the `@` separator.
    #[error("E-mail inválido.")]
    InvalidEmail,
}

/// Keep only ASCII digits, dropping mask punctuation.
#[must_use]
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Progressive `000.000.000-00` display mask for CPF inputs.
///
/// Accepts partial input while the user types and never grows past 14
/// characters.
#[must_use]
pub fn format_cpf(value: &str) -> String {
    let digits = strip_digits(value);
    let digits = &digits[..digits.len().min(11)];

    let mut masked = String::with_capacity(14);
    for (index, ch) in digits.chars().enumerate() {
        match index {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(ch);
    }
    masked
}

/// Validates a CPF, masked or not.
///
/// # Validation rules
/// - exactly 11 digits after stripping the mask
/// - not all digits identical
/// - both verifier digits match the mod-11 checksum
pub fn valida_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    let digits = strip_digits(cpf);
    if digits.len() != 11 {
        return Err(ValidationError::CpfIncomplete);
    }

    let first = digits.chars().next().unwrap_or('0');
    if digits.chars().all(|ch| ch == first) {
        return Err(ValidationError::CpfInvalid);
    }

    let numbers: Vec<u32> = digits.chars().filter_map(|ch| ch.to_digit(10)).collect();
    let verifier = |len: usize, weight: u32| -> u32 {
        let sum: u32 = numbers[..len]
            .iter()
            .enumerate()
            .map(|(index, digit)| digit * (weight - u32::try_from(index).unwrap_or(0)))
            .sum();
        let rest = sum % 11;
        if rest < 2 { 0 } else { 11 - rest }
    };

    if numbers[9] == verifier(9, 10) && numbers[10] == verifier(10, 11) {
        Ok(())
    } else {
        Err(ValidationError::CpfInvalid)
    }
}

/// Validates a password against the account policy.
///
/// # Validation rules
/// - at least 8 characters
/// - no spaces
/// - at least one digit and one uppercase letter
pub fn valida_senha(senha: &str) -> Result<(), ValidationError> {
    if senha.is_empty() {
        return Err(ValidationError::Required);
    }

    if senha.chars().count() < 8 {
        return Err(ValidationError::SenhaTooShort);
    }

    if senha.contains(' ') {
        return Err(ValidationError::SenhaHasSpace);
    }

    let tem_numero = senha.chars().any(|ch| ch.is_ascii_digit());
    let tem_maiuscula = senha.chars().any(char::is_uppercase);
    if tem_numero && tem_maiuscula {
        Ok(())
    } else {
        Err(ValidationError::SenhaTooWeak)
    }
}

/// Validates that the confirmation matches the chosen password.
pub fn valida_confirmacao(confirmacao: &str, senha: &str) -> Result<(), ValidationError> {
    if confirmacao.is_empty() {
        return Err(ValidationError::Required);
    }

    if confirmacao == senha {
        Ok(())
    } else {
        Err(ValidationError::SenhasDoNotMatch)
    }
}

/// Validates an e-mail address.
///
/// Intentionally shallow (the backend does the authoritative check): non-empty
/// and an `@` with something on both sides.
pub fn valida_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cpf_masks_progressively() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
        // Extra digits and stray punctuation are dropped.
        assert_eq!(format_cpf("123456789091111"), "123.456.789-09");
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_cpf("abc123def456"), "123.456");
    }

    #[test]
    fn valida_cpf_accepts_known_good_numbers() {
        assert!(valida_cpf("529.982.247-25").is_ok());
        assert!(valida_cpf("52998224725").is_ok());
        assert!(valida_cpf("123.456.789-09").is_ok());
    }

    #[test]
    fn valida_cpf_rejects_bad_checksums() {
        assert_eq!(valida_cpf("123.456.789-00"), Err(ValidationError::CpfInvalid));
        assert_eq!(valida_cpf("529.982.247-26"), Err(ValidationError::CpfInvalid));
    }

    #[test]
    fn valida_cpf_rejects_repeated_digits() {
        for digit in ["00000000000", "11111111111", "99999999999"] {
            assert_eq!(valida_cpf(digit), Err(ValidationError::CpfInvalid));
        }
    }

    #[test]
    fn valida_cpf_rejects_wrong_length_and_empty() {
        assert_eq!(valida_cpf(""), Err(ValidationError::Required));
        assert_eq!(valida_cpf("   "), Err(ValidationError::Required));
        assert_eq!(valida_cpf("123.456.789"), Err(ValidationError::CpfIncomplete));
        assert_eq!(
            valida_cpf("123.456.789-091"),
            Err(ValidationError::CpfIncomplete)
        );
    }

    #[test]
    fn valida_senha_accepts_policy_compliant_passwords() {
        assert!(valida_senha("Senha123").is_ok());
        assert!(valida_senha("OutraSenha9").is_ok());
    }

    #[test]
    fn valida_senha_rejects_policy_violations() {
        assert_eq!(valida_senha(""), Err(ValidationError::Required));
        assert_eq!(valida_senha("Sen12"), Err(ValidationError::SenhaTooShort));
        assert_eq!(
            valida_senha("Senha 123"),
            Err(ValidationError::SenhaHasSpace)
        );
        assert_eq!(valida_senha("senha123"), Err(ValidationError::SenhaTooWeak));
        assert_eq!(valida_senha("SenhaForte"), Err(ValidationError::SenhaTooWeak));
    }

    #[test]
    fn valida_confirmacao_compares_exactly() {
        assert!(valida_confirmacao("Senha123", "Senha123").is_ok());
        assert_eq!(
            valida_confirmacao("Senha124", "Senha123"),
            Err(ValidationError::SenhasDoNotMatch)
        );
        assert_eq!(
            valida_confirmacao("", "Senha123"),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn valida_email_requires_at_and_domain() {
        assert!(valida_email("ana@example.com").is_ok());
        assert_eq!(valida_email(""), Err(ValidationError::Required));
        assert_eq!(
            valida_email("ana.example.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(valida_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(valida_email("ana@example"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::SenhasDoNotMatch.to_string(),
            "As senhas não coincidem."
        );
        assert_eq!(ValidationError::CpfInvalid.to_string(), "CPF inválido.");
    }
}
