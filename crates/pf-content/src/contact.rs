//! Contact and social links opened from the page.

use pf_api_types::ContactProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Email,
    Phone,
    GitHub,
    LinkedIn,
    Twitter,
}

impl ContactAction {
    pub fn uri(self, profile: &ContactProfile) -> String {
        match self {
            Self::Email => format!("mailto:{}", profile.email),
            Self::Phone => format!("tel:{}", profile.phone),
            Self::GitHub => profile.github.clone(),
            Self::LinkedIn => profile.linkedin.clone(),
            Self::Twitter => profile.twitter.clone(),
        }
    }
}
