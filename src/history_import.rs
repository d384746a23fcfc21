// ABOUTME: Loader for e1RM history files consumed by the predict command
// ABOUTME: Parses a JSON array of session points and rejects out-of-order or non-finite entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::E1rmHistoryPoint;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Parse e1RM history from JSON text
///
/// The input is an array of `{"session_index": n, "e1rm": x}` objects in
/// ascending session order.
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON, and `InvalidInput` when
/// indexes decrease or an e1RM is negative or not finite
pub fn parse_history(json: &str) -> AppResult<Vec<E1rmHistoryPoint>> {
    let points: Vec<E1rmHistoryPoint> = serde_json::from_str(json)?;

    if let Some(point) = points
        .iter()
        .find(|point| !point.e1rm.is_finite() || point.e1rm < 0.0)
    {
        return Err(AppError::invalid_input(format!(
            "Session {} has an invalid e1RM: {}",
            point.session_index, point.e1rm
        )));
    }

    if let Some(pair) = points
        .windows(2)
        .find(|pair| pair[1].session_index < pair[0].session_index)
    {
        return Err(AppError::invalid_input(format!(
            "History must be in ascending session order: {} follows {}",
            pair[1].session_index, pair[0].session_index
        )));
    }

    Ok(points)
}

/// Read and parse an e1RM history file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or any error from [`parse_history`]
pub async fn load_history(path: &Path) -> AppResult<Vec<E1rmHistoryPoint>> {
    let json = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read history file {}", path.display()))
            .with_source(e)
    })?;
    let points = parse_history(&json)?;
    debug!(path = %path.display(), points = points.len(), "History file loaded");
    Ok(points)
}
