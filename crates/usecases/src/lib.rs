// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

use memorymix_core::matching::MatchError;
use memorymix_repo::prelude::*;
use thiserror::Error;

pub mod mapping;
pub mod memory;
pub mod play;
pub mod suggest;
pub mod user;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct InputError(#[from] pub anyhow::Error);

pub type InputResult<T> = std::result::Result<T, InputError>;

impl From<MatchError> for InputError {
    fn from(err: MatchError) -> Self {
        Self(err.into())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<MatchError> for Error {
    fn from(err: MatchError) -> Self {
        Self::Input(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
