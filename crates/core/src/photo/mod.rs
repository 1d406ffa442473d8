// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use mime::Mime;

use crate::prelude::*;

pub type SizeInPixels = u32;

/// Capture metadata of a photograph.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    /// Identifier in the photo library the photo was picked from
    pub google_photo_id: String,

    pub base_url: String,

    pub filename: String,

    pub mime_type: Mime,

    /// Capture time
    pub creation_time: UtcDateTimeMs,

    pub width: Option<SizeInPixels>,

    pub height: Option<SizeInPixels>,

    /// Location of a local copy, relative to the upload directory
    pub local_path: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhotoInvalidity {
    BaseUrlEmpty,
    NotAnImage,
    EmptySize,
    LocalPathEmpty,
}

impl Validate for Photo {
    type Invalidity = PhotoInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            base_url,
            mime_type,
            width,
            height,
            local_path,
            google_photo_id: _,
            filename: _,
            creation_time: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(base_url.trim().is_empty(), Self::Invalidity::BaseUrlEmpty)
            .invalidate_if(
                mime_type.type_() != mime::IMAGE,
                Self::Invalidity::NotAnImage,
            )
            .invalidate_if(
                *width == Some(0) || *height == Some(0),
                Self::Invalidity::EmptySize,
            )
            .invalidate_if(
                local_path.as_ref().is_some_and(|path| path.trim().is_empty()),
                Self::Invalidity::LocalPathEmpty,
            )
            .into()
    }
}
