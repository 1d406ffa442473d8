// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::anyhow;
use memorymix_core::util::clock::UtcDateTimeMs;

use crate::prelude::*;

mod _core {
    pub(super) use memorymix_core::photo::{Photo, SizeInPixels};
}

/// A photo picked from the photo library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub google_photo_id: String,

    pub base_url: String,

    #[serde(default)]
    pub filename: String,

    pub mime_type: String,

    pub creation_time: UtcDateTimeMs,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<_core::SizeInPixels>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<_core::SizeInPixels>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub local_path: Option<String>,
}

impl From<_core::Photo> for Photo {
    fn from(from: _core::Photo) -> Self {
        let _core::Photo {
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time,
            width,
            height,
            local_path,
        } = from;
        Self {
            google_photo_id,
            base_url,
            filename,
            mime_type: mime_type.to_string(),
            creation_time,
            width,
            height,
            local_path,
        }
    }
}

impl TryFrom<Photo> for _core::Photo {
    type Error = anyhow::Error;

    fn try_from(from: Photo) -> anyhow::Result<Self> {
        let Photo {
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time,
            width,
            height,
            local_path,
        } = from;
        let mime_type = mime_type
            .parse()
            .map_err(|err| anyhow!("invalid MIME type \"{mime_type}\": {err}"))?;
        Ok(Self {
            google_photo_id,
            base_url,
            filename,
            mime_type,
            creation_time,
            width,
            height,
            local_path,
        })
    }
}
