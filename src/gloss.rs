//! Main module for gloss library functionality

pub mod config;
pub mod dialect;
pub mod entry;
pub mod error;
pub mod formats;
pub mod glossary;
pub mod links;
pub mod text;
