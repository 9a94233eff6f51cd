//! Core token model, errors, and collaborator interfaces for Glossa.
//!
//! This crate provides:
//! - [`Token`] - One analyzed token of a tokenized sentence
//! - [`Error`] - Categorized configuration-time errors
//! - [`Synthesizer`] - Interface to the external morphological synthesizer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod synthesis;
mod token;

pub use error::{Error, ErrorKind, Result};
pub use synthesis::Synthesizer;
pub use token::{SENTENCE_START_TAG, Token, UNKNOWN_TAG};
