//! Hosts-file domain logic for hosts-manager.
//!
//! This crate holds the only parsing and text-rewriting logic of the tool:
//!
//! - [`token`] splits a line into [`Token`]s (text, separator, comment).
//! - [`syntax`] decides whether a tokenized body is an acceptable hostgroup body.
//! - [`region`] locates the managed region of a hosts file and rewrites it
//!   from the bodies of the active groups.
//!
//! Everything here is a pure function over in-memory text. Reading and writing
//! files, persisting groups and invoking editors belong to the other crates.
//!
//! # Managed region
//!
//! ```text
//! <untouched prefix>
//! ##### managed by hosts-manager : start #####
//!
//! <group body>
//!
//! ##### managed by hosts-manager : end #####
//! <untouched suffix>
//! ```

pub mod error;
pub mod region;
pub mod syntax;
pub mod token;

pub use error::{Error, RegionFault, Result};
pub use region::{REGION_FOOTER, REGION_HEADER, RegionSpan, locate_region, merge_region};
pub use syntax::{check_body, is_valid_body, is_valid_line};
pub use token::{Line, ParseResult, Token, TokenKind, parse, tokenize};
