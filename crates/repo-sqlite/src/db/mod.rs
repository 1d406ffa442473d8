// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub(crate) mod mapping;
pub(crate) mod memory;
pub(crate) mod photo;
pub(crate) mod play;
pub(crate) mod user;

mod join {
    use crate::db::{
        mapping::schema::*, memory::schema::*, photo::schema::*, play::schema::*, user::schema::*,
    };

    diesel::allow_tables_to_appear_in_same_query!(user, play, memory, photo, mapping);
}
