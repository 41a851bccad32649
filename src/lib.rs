#![deny(missing_docs)]

//! # PICOL admin
//!
//! Library backing the `picol` administrative command-line tool, which
//! imports pesticide-registry reference data (crops, pests, ingredients,
//! registrants, resistances) from JSON documents into DynamoDB tables.
//!
//! Each import subcommand decodes one JSON document, issues one conditional
//! `UpdateItem` per record, and finally advances a per-entity "next id"
//! sequence counter through an optimistic conditional write. Processing is
//! fully sequential; concurrent runs of the tool are only safe where the
//! sequence updater's condition makes them safe (see [`sequence`]).
//!
//! ## Modules
//!
//! - [`attr`] - AttributeValue constructors
//! - [`expr`] - condition and update expression builders
//! - [`model`] - the v1 API data model mirrored by the input documents
//! - [`config`] - run configuration and table-name composition
//! - [`sequence`] - the conditional monotonic sequence updater
//! - [`import`] - the generic per-entity importer

/// AttributeValue constructors for scalar and set values.
pub mod attr;

/// Run configuration: table-name prefix composition and environment
/// resolution.
pub mod config;

/// Error type covering input, expression-building, and storage failures.
pub mod error;

/// Typed builders for DynamoDB condition and update expressions.
pub mod expr;

/// The generic importer and its per-entity descriptors.
pub mod import;

/// Data model for version 1 API documents.
pub mod model;

/// Optimistic "advance high-water-mark" sequence updates.
pub mod sequence;

pub use error::Error;
