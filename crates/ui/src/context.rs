use std::fmt;
use std::str::FromStr;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use syntax_core::share::ShareLink;

/// Which page the window should open on, from `--page` / the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchPage {
    #[default]
    Home,
    Grammar,
    Trees,
    Ambiguity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLaunchPageError {
    raw: String,
}

impl fmt::Display for ParseLaunchPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown page {:?}, expected home, grammar, trees or ambiguity",
            self.raw
        )
    }
}

impl std::error::Error for ParseLaunchPageError {}

impl FromStr for LaunchPage {
    type Err = ParseLaunchPageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "grammar" => Ok(Self::Grammar),
            "trees" => Ok(Self::Trees),
            "ambiguity" => Ok(Self::Ambiguity),
            _ => Err(ParseLaunchPageError { raw: s.to_string() }),
        }
    }
}

/// Configuration handed to the UI by the composition root (`crates/app`).
#[derive(Clone)]
pub struct AppContext {
    share_link: ShareLink,
    launch_page: LaunchPage,
    launch_redirect_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(share_link: ShareLink, launch_page: LaunchPage) -> Self {
        Self {
            share_link,
            launch_redirect_once: Arc::new(AtomicBool::new(launch_page != LaunchPage::Home)),
            launch_page,
        }
    }

    #[must_use]
    pub fn share_link(&self) -> &ShareLink {
        &self.share_link
    }

    /// The configured value (not the one-shot value). Useful for diagnostics.
    #[must_use]
    pub fn launch_page_configured(&self) -> LaunchPage {
        self.launch_page
    }

    /// Consumes the one-shot launch redirect, if any. The router layout
    /// performs this navigation exactly once per process.
    #[must_use]
    pub fn take_launch_redirect(&self) -> Option<LaunchPage> {
        if self.launch_redirect_once.swap(false, Ordering::AcqRel) {
            Some(self.launch_page)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share_link() -> ShareLink {
        ShareLink::parse("https://example.com/syntax-lab").unwrap()
    }

    #[test]
    fn launch_page_parses_case_insensitively() {
        assert_eq!("Grammar".parse::<LaunchPage>().unwrap(), LaunchPage::Grammar);
        assert_eq!(" trees ".parse::<LaunchPage>().unwrap(), LaunchPage::Trees);
        assert!("else".parse::<LaunchPage>().is_err());
    }

    #[test]
    fn launch_redirect_fires_once() {
        let ctx = AppContext::new(share_link(), LaunchPage::Ambiguity);
        assert_eq!(ctx.take_launch_redirect(), Some(LaunchPage::Ambiguity));
        assert_eq!(ctx.take_launch_redirect(), None);
        assert_eq!(ctx.launch_page_configured(), LaunchPage::Ambiguity);
    }

    #[test]
    fn home_launch_needs_no_redirect() {
        let ctx = AppContext::new(share_link(), LaunchPage::Home);
        assert_eq!(ctx.take_launch_redirect(), None);
    }
}
