// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rustdoc::broken_intra_doc_links)]

pub mod mapping;
pub mod matching;
pub mod memory;
pub mod photo;
pub mod play;
pub mod user;
pub mod util;

pub use self::{
    mapping::Mapping,
    matching::{ConfidenceScore, Suggestion},
    memory::Memory,
    photo::Photo,
    play::{Play, PlayKey},
    user::User,
};

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};

    pub(crate) use semval::prelude::*;

    pub(crate) use crate::util::clock::*;
}
