// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by scene mutations.

use thiserror::Error;

use crate::types::ObjectId;

/// A scene mutation named something that does not exist.
///
/// Queries never fail; only structural edits report errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// No layer at this index.
    #[error("unknown layer index {0}")]
    UnknownLayer(usize),

    /// The object was removed, so its id is stale.
    #[error("stale object id {0:?}")]
    StaleObject(ObjectId),

    /// Removing the only layer would leave the scene without one.
    #[error("cannot remove the last layer")]
    LastLayer,
}
