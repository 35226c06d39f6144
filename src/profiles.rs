//! Profile tool access: listing, active profile lookup and apply

use tracing::{debug, info, warn};

use crate::collaborator::{CollaboratorError, CommandRunner};
use crate::constants::profile_tool::{
    ACTIVE_FLAG, ACTIVE_MARKER, APPLY_FLAG, COMMENT_PREFIX, LIST_FLAG,
};

/// A profile as listed by the profile tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    /// Trimmed name with the active marker removed; passed verbatim to apply
    pub name: String,
    /// Line carried the trailing active marker (display only)
    pub active: bool,
}

#[cfg(test)]
impl ProfileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
        }
    }
}

/// Normalize a raw profile name: trim, drop a trailing active marker, trim again
pub fn normalize_name(raw: &str) -> (String, bool) {
    let trimmed = raw.trim();
    match trimmed.strip_suffix(ACTIVE_MARKER) {
        Some(rest) => (rest.trim().to_string(), true),
        None => (trimmed.to_string(), false),
    }
}

/// Parse the plain-text listing, one profile per line.
///
/// Blank lines and `#` comments are skipped; listing order is kept.
pub fn parse_listing(listing: &str) -> Vec<ProfileEntry> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(|line| {
            let (name, active) = normalize_name(line);
            ProfileEntry { name, active }
        })
        .collect()
}

/// Applies a named profile
pub trait ProfileApplier {
    fn apply(&self, profile: &str) -> Result<(), CollaboratorError>;
}

/// The external profile tool
pub struct ProfileTool<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
}

impl<'a> ProfileTool<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// List known profiles in display order
    pub fn list(&self) -> Result<Vec<ProfileEntry>, CollaboratorError> {
        let stdout = self.runner.output(self.program, &[LIST_FLAG])?;
        let profiles = parse_listing(&stdout);
        info!(count = profiles.len(), "Loaded profiles");
        Ok(profiles)
    }

    /// Best-effort active profile name; `None` on any failure or empty output
    pub fn active(&self) -> Option<String> {
        match self.runner.output(self.program, &[ACTIVE_FLAG]) {
            Ok(stdout) => {
                let name = stdout.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            Err(e) => {
                debug!(error = %e, "Active profile lookup failed, omitting banner");
                None
            }
        }
    }
}

impl ProfileApplier for ProfileTool<'_> {
    fn apply(&self, profile: &str) -> Result<(), CollaboratorError> {
        let (name, _) = normalize_name(profile);
        info!(profile = %name, "Applying profile");
        self.runner
            .status(self.program, &[APPLY_FLAG, name.as_str()])
            .map_err(|e| {
                warn!(profile = %name, error = %e, "Profile apply failed");
                CollaboratorError::Apply {
                    profile: name.clone(),
                    reason: e.to_string(),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::fake::{FakeRunner, Reply};

    fn names(profiles: &[ProfileEntry]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_parse_listing_skips_comments_and_blanks() {
        let profiles = parse_listing("a\n# comment\n\nb*\nc\n");
        assert_eq!(names(&profiles), ["a", "b", "c"]);
        assert!(profiles[1].active);
        assert!(!profiles[0].active && !profiles[2].active);
    }

    #[test]
    fn test_parse_listing_trims_marker_and_whitespace() {
        let profiles = parse_listing("  Docked Office *  \n\t# indented comment\nLaptop Only\r\n");
        assert_eq!(names(&profiles), ["Docked Office", "Laptop Only"]);
        assert!(profiles[0].active);
    }

    #[test]
    fn test_parse_listing_keeps_case_and_separators() {
        let profiles = parse_listing("Work_Dual\nwork-dual\n");
        assert_eq!(names(&profiles), ["Work_Dual", "work-dual"]);
    }

    #[test]
    fn test_parse_listing_empty() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("# only comments\n\n").is_empty());
    }

    #[test]
    fn test_list_invokes_list_flag() {
        let runner = FakeRunner::new().reply(
            "hyprmon --list-profiles",
            Reply::Stdout("work\nhome*\n".to_string()),
        );
        let profiles = ProfileTool::new(&runner, "hyprmon").list().unwrap();
        assert_eq!(names(&profiles), ["work", "home"]);
    }

    #[test]
    fn test_list_failure_propagates() {
        let runner = FakeRunner::new().reply("hyprmon --list-profiles", Reply::Exit(2));
        assert!(ProfileTool::new(&runner, "hyprmon").list().is_err());
    }

    #[test]
    fn test_active_is_best_effort() {
        let runner = FakeRunner::new().reply(
            "hyprmon --active-profile",
            Reply::Stdout("  work\n".to_string()),
        );
        assert_eq!(ProfileTool::new(&runner, "hyprmon").active().as_deref(), Some("work"));

        let runner = FakeRunner::new().reply("hyprmon --active-profile", Reply::Stdout("\n".to_string()));
        assert_eq!(ProfileTool::new(&runner, "hyprmon").active(), None);

        let runner = FakeRunner::new().reply("hyprmon --active-profile", Reply::Exit(1));
        assert_eq!(ProfileTool::new(&runner, "hyprmon").active(), None);

        let runner = FakeRunner::new().reply("hyprmon --active-profile", Reply::Missing);
        assert_eq!(ProfileTool::new(&runner, "hyprmon").active(), None);
    }

    #[test]
    fn test_apply_passes_normalized_name() {
        let runner = FakeRunner::new().reply("hyprmon -profile home", Reply::Stdout(String::new()));
        ProfileTool::new(&runner, "hyprmon").apply(" home* ").unwrap();
        assert_eq!(runner.calls.borrow().as_slice(), ["hyprmon -profile home"]);
    }

    #[test]
    fn test_apply_failure_carries_profile_name() {
        let runner = FakeRunner::new().reply("hyprmon -profile work", Reply::Exit(1));
        let err = ProfileTool::new(&runner, "hyprmon").apply("work").unwrap_err();
        match err {
            CollaboratorError::Apply { profile, reason } => {
                assert_eq!(profile, "work");
                assert!(reason.contains("exit status: 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let runner = FakeRunner::new();
        let err = ProfileTool::new(&runner, "hyprmon").apply("work").unwrap_err();
        assert!(matches!(err, CollaboratorError::Apply { .. }));
    }
}
