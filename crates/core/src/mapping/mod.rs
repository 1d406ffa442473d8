// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{matching::ConfidenceScoreInvalidity, prelude::*, ConfidenceScore};

/// Properties of an accepted association between a photo and a play.
///
/// The referenced photo, play and memory are identified by the
/// storage layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    pub is_auto_suggested: bool,

    /// Only available for auto-suggested mappings.
    pub confidence_score: Option<ConfidenceScore>,
}

impl Mapping {
    #[must_use]
    pub const fn auto_suggested(confidence_score: ConfidenceScore) -> Self {
        Self {
            is_auto_suggested: true,
            confidence_score: Some(confidence_score),
        }
    }

    #[must_use]
    pub const fn manual() -> Self {
        Self {
            is_auto_suggested: false,
            confidence_score: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MappingInvalidity {
    ConfidenceScore(ConfidenceScoreInvalidity),
}

impl Validate for Mapping {
    type Invalidity = MappingInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.confidence_score, Self::Invalidity::ConfidenceScore)
            .into()
    }
}
