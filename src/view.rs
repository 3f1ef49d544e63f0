//! Derived view accessors and lazy-expansion behavior
//!
//! Everything here is a pure function of current model data except the
//! lazy loaders, which fill a row's reactive sub-collection on first
//! expansion and log-and-keep on failure.

use crate::client::ApiClient;
use crate::model::{Group, MasteryProgress};
use std::fmt;

/// Classification of earned points against one proficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// No points toward this band
    None,
    /// Some points, band threshold not yet reached
    Partial,
    /// Band threshold reached or exceeded
    Complete,
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProgressState::None => "none",
            ProgressState::Partial => "partial",
            ProgressState::Complete => "complete",
        })
    }
}

/// Row glyph shown when the mission list is expanded
pub const EXPANDED_GLYPH: char = '\u{25BC}';
/// Row glyph shown when the mission list is collapsed
pub const COLLAPSED_GLYPH: char = '\u{25B6}';

/// Points classified against a band whose Partial range opens at the
/// previous band's threshold, not the band's own lower bound. The
/// first band opens at zero.
fn classify(points: i64, threshold: i64, previous_threshold: i64) -> ProgressState {
    if points >= threshold {
        ProgressState::Complete
    } else if points > previous_threshold {
        ProgressState::Partial
    } else {
        ProgressState::None
    }
}

impl MasteryProgress {
    /// Display form, e.g. `White 1: Basic CLI Software Development Tools`
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.level_name, self.topic_name)
    }

    /// Row color keyed on the first word of the display name
    ///
    /// Unmapped level names yield `None` rather than a fallback color.
    pub fn progress_color(&self) -> Option<&'static str> {
        let name = self.display_name();
        match name.split(' ').next() {
            Some("White") => Some("white"),
            Some("Yellow") => Some("yellow"),
            Some("Orange") => Some("orange"),
            _ => None,
        }
    }

    pub fn emerging(&self) -> ProgressState {
        classify(self.points_earned, self.emerging_minimum_points, 0)
    }

    pub fn developing(&self) -> ProgressState {
        classify(
            self.points_earned,
            self.developing_minimum_points,
            self.emerging_minimum_points,
        )
    }

    pub fn proficient(&self) -> ProgressState {
        classify(
            self.points_earned,
            self.proficient_minimum_points,
            self.developing_minimum_points,
        )
    }

    pub fn exemplary(&self) -> ProgressState {
        classify(
            self.points_earned,
            self.exemplary_minimum_points,
            self.proficient_minimum_points,
        )
    }

    /// Expansion indicator for the row's toggle control
    pub fn expansion_glyph(&self) -> char {
        if self.expanded.get() {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        }
    }

    /// Flip the expansion flag; expanding triggers the mission load
    pub async fn toggle_expansion(&self, api: &ApiClient) {
        let now_expanded = !self.expanded.get();
        self.expanded.set(now_expanded);
        if now_expanded {
            self.load_missions_if_absent(api).await;
        }
    }

    /// Fetch this topic's missions unless they are already present
    ///
    /// Idempotent once loaded: a non-empty list issues no fetch. There
    /// is no in-flight guard, so two overlapping calls that both find
    /// the list empty race and the last completion wins.
    pub async fn load_missions_if_absent(&self, api: &ApiClient) {
        if self.missions.with(|missions| !missions.is_empty()) {
            return;
        }

        match api.load_missions(self.program_id, &self.id).await {
            Ok(missions) => self.missions.set(missions),
            Err(err) => tracing::error!("{}", err),
        }
    }
}

impl Group {
    /// Fetch this group's roster unless it is already present
    ///
    /// Same guard semantics as the mission load: empty means fetch,
    /// non-empty means no-op, failure leaves the roster untouched.
    pub async fn load_roster_if_absent(&self, api: &ApiClient) {
        if self.users.with(|users| !users.is_empty()) {
            return;
        }

        match api.load_users_in_group_under_authority(&self.pathname).await {
            Ok(users) => self.users.set(users),
            Err(err) => tracing::error!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::Observable;

    fn progress(points_earned: i64) -> MasteryProgress {
        MasteryProgress {
            id: "2".to_string(),
            user_id: 3,
            program_id: 1,
            program_name: "Coder White".to_string(),
            topic_sequence: 100,
            level_name: "White 1".to_string(),
            topic_name: "Basic CLI Software Development Tools".to_string(),
            points_earned,
            total_points: 150,
            emerging_minimum_points: 75,
            developing_minimum_points: 98,
            proficient_minimum_points: 120,
            exemplary_minimum_points: 135,
            missions: Observable::new(Vec::new()),
            expanded: Observable::new(false),
        }
    }

    #[test]
    fn test_zero_points_is_none_across_all_bands() {
        let row = progress(0);
        assert_eq!(row.emerging(), ProgressState::None);
        assert_eq!(row.developing(), ProgressState::None);
        assert_eq!(row.proficient(), ProgressState::None);
        assert_eq!(row.exemplary(), ProgressState::None);
    }

    #[test]
    fn test_eighty_points_straddles_emerging_and_developing() {
        let row = progress(80);
        assert_eq!(row.emerging(), ProgressState::Complete);
        // Above the previous band's threshold but short of its own.
        assert_eq!(row.developing(), ProgressState::Partial);
        assert_eq!(row.proficient(), ProgressState::None);
        assert_eq!(row.exemplary(), ProgressState::None);
    }

    #[test]
    fn test_max_points_completes_every_band() {
        let row = progress(150);
        assert_eq!(row.emerging(), ProgressState::Complete);
        assert_eq!(row.developing(), ProgressState::Complete);
        assert_eq!(row.proficient(), ProgressState::Complete);
        assert_eq!(row.exemplary(), ProgressState::Complete);
    }

    #[test]
    fn test_single_point_is_partial_only_in_first_band() {
        let row = progress(1);
        assert_eq!(row.emerging(), ProgressState::Partial);
        assert_eq!(row.developing(), ProgressState::None);
    }

    #[test]
    fn test_exact_threshold_completes_band_without_opening_next() {
        let row = progress(75);
        assert_eq!(row.emerging(), ProgressState::Complete);
        // 75 is not strictly above the previous threshold of 75.
        assert_eq!(row.developing(), ProgressState::None);
    }

    #[test]
    fn test_display_name_and_color() {
        let row = progress(0);
        assert_eq!(
            row.display_name(),
            "White 1: Basic CLI Software Development Tools"
        );
        assert_eq!(row.progress_color(), Some("white"));
    }

    #[test]
    fn test_unmapped_level_name_has_no_color() {
        let mut row = progress(0);
        row.level_name = "Crimson 4".to_string();
        assert_eq!(row.progress_color(), None);
    }

    #[test]
    fn test_expansion_glyph_tracks_flag() {
        let row = progress(0);
        assert_eq!(row.expansion_glyph(), COLLAPSED_GLYPH);
        row.expanded.set(true);
        assert_eq!(row.expansion_glyph(), EXPANDED_GLYPH);
    }

    #[test]
    fn test_progress_state_renders_lowercase() {
        assert_eq!(ProgressState::Partial.to_string(), "partial");
        assert_eq!(ProgressState::Complete.to_string(), "complete");
        assert_eq!(ProgressState::None.to_string(), "none");
    }
}
