// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Record;

/// Create a record with a numeric id and a title.
pub fn make_record(id: u64, title: &str) -> Record {
    Record::new(id, title)
}

/// The three-movie corpus used throughout the docs: two Matrix titles and a
/// title that shares nothing with "matrix".
pub fn matrix_corpus() -> Vec<Record> {
    vec![
        make_record(1, "The Matrix"),
        make_record(2, "Matrix Reloaded"),
        make_record(3, "Inception"),
    ]
}

/// A corpus with one record per tier for the query "star wars":
/// exact, substring, and token overlap, plus one non-match.
pub fn tiered_corpus() -> Vec<Record> {
    vec![
        make_record(10, "Wars of the Roses"),
        make_record(11, "Star Wars: The Empire Strikes Back"),
        make_record(12, "Star Wars"),
        make_record(13, "Gattaca"),
    ]
}

/// A small movie catalog with overviews and genres.
pub fn movie_catalog() -> Vec<Record> {
    vec![
        Record::new(1u64, "The Matrix")
            .with_overview("A hacker learns that reality is a simulation.")
            .with_genres(["Action", "Science Fiction"]),
        Record::new(2u64, "Matrix Reloaded")
            .with_overview("Neo and the rebels fight the machines.")
            .with_genres(["Action", "Science Fiction"]),
        Record::new(3u64, "Inception")
            .with_overview("A thief steals secrets through dream-sharing.")
            .with_genres(["Action", "Thriller"]),
        Record::new(4u64, "Heat")
            .with_overview("A detective hunts a crew of professional thieves.")
            .with_genres(["Crime", "Thriller"]),
        Record::new(5u64, "Blade Runner 2049")
            .with_overview("A replicant hunter uncovers a secret.")
            .with_genres(["Science Fiction", "Drama"]),
        Record::new(6u64, "Amélie")
            .with_overview("A shy waitress decides to change the lives of others.")
            .with_genres(["Comedy", "Romance"]),
        Record::new(7u64, "Spider-Man: Into the Spider-Verse")
            .with_overview("Teen Miles Morales becomes the Spider-Man of his universe.")
            .with_genres(["Animation", "Action"]),
        Record::new(8u64, "Spider-Man")
            .with_overview("A student gains spider-like abilities.")
            .with_genres(["Action"]),
    ]
}
