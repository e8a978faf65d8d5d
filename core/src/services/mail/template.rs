//! Named HTML mail templates with placeholder substitution.
//!
//! Plain string substitution over `$fullname`, `$link` and `$emailId`,
//! not a templating engine. Templates are read from a configured
//! directory on each render; they are small and the flows that use them
//! are not hot paths.

use std::path::PathBuf;

use crate::errors::{DomainError, DomainResult};

/// Template file for the registration welcome mail
const WELCOME_TEMPLATE: &str = "welcome.html";

/// Template file for the password reset mail
const RESET_TEMPLATE: &str = "reset.html";

/// Loader and renderer for the two account-mail templates
#[derive(Debug, Clone)]
pub struct MailTemplates {
    template_dir: PathBuf,
}

impl MailTemplates {
    /// Creates a template loader rooted at the given directory
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Renders the welcome mail with the verification link
    pub fn welcome(&self, fullname: &str, link: &str) -> DomainResult<String> {
        let template = self.load(WELCOME_TEMPLATE)?;
        Ok(render(&template, &[("$fullname", fullname), ("$link", link)]))
    }

    /// Renders the password reset mail
    pub fn reset(&self, fullname: &str, link: &str, support_email: &str) -> DomainResult<String> {
        let template = self.load(RESET_TEMPLATE)?;
        Ok(render(
            &template,
            &[
                ("$fullname", fullname),
                ("$link", link),
                ("$emailId", support_email),
            ],
        ))
    }

    fn load(&self, name: &str) -> DomainResult<String> {
        let path = self.template_dir.join(name);
        std::fs::read_to_string(&path).map_err(|e| DomainError::Internal {
            message: format!("Failed to read mail template {}: {}", path.display(), e),
        })
    }
}

/// Replaces the first occurrence of each placeholder
fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (placeholder, value) in substitutions {
        rendered = rendered.replacen(placeholder, value, 1);
    }
    rendered
}
