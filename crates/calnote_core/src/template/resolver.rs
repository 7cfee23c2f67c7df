use crate::template::{Template, TokenSource};
use log::{error, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{\{(.*?)\}\}").expect("valid placeholder regex"));

/// Why a placeholder stayed verbatim in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// Placeholder body is empty after trimming.
    EmptyToken,
    /// Token source rejected the token.
    FormatFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// Full placeholder text, e.g. `${{ }}`.
    pub placeholder: String,
    pub reason: UnresolvedReason,
}

/// Output of template resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub unresolved: Vec<Unresolved>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Replaces every `${{TOKEN}}` in `template` with `source.token(TOKEN)`.
///
/// Tokens are trimmed before lookup. Empty tokens and source failures keep
/// the placeholder text and are reported back to the caller.
pub fn resolve(template: &Template, source: &impl TokenSource) -> Resolution {
    let mut unresolved = Vec::new();
    let text = PLACEHOLDER_RE.replace_all(template.as_str(), |caps: &Captures<'_>| {
        let placeholder = &caps[0];
        let token = caps[1].trim();
        if token.is_empty() {
            warn!(
                "event=template_resolve module=template status=empty_token template={}",
                template.as_str()
            );
            unresolved.push(Unresolved {
                placeholder: placeholder.to_string(),
                reason: UnresolvedReason::EmptyToken,
            });
            return placeholder.to_string();
        }

        match source.token(token) {
            Ok(value) => value,
            Err(err) => {
                error!(
                    "event=template_resolve module=template status=error token={} error={}",
                    token, err
                );
                unresolved.push(Unresolved {
                    placeholder: placeholder.to_string(),
                    reason: UnresolvedReason::FormatFailed(err.to_string()),
                });
                placeholder.to_string()
            }
        }
    });

    Resolution {
        text: text.into_owned(),
        unresolved,
    }
}
