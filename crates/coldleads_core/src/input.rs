use std::fmt;

use crate::LeadError;

const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];

/// A company URL carrying an explicit `http://` or `https://` scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim raw user input and make sure it carries a scheme.
///
/// Input without a case-insensitive `http://` or `https://` prefix gets
/// `https://` prepended; anything else passes through unchanged.
pub fn normalize_company_url(raw: &str) -> Result<NormalizedUrl, LeadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LeadError::EmptyInput);
    }
    if has_http_scheme(trimmed) {
        Ok(NormalizedUrl(trimmed.to_string()))
    } else {
        Ok(NormalizedUrl(format!("https://{trimmed}")))
    }
}

fn has_http_scheme(candidate: &str) -> bool {
    HTTP_SCHEMES.iter().any(|scheme| {
        candidate
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
