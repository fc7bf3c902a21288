// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pluggable molecular render engines with name-stack picking.
//!
//! A [`molecule::Molecule`] is turned into selectable, style-dependent draw
//! commands by one or more [`engine::Engine`] strategies (wireframe,
//! ball-and-stick, space-fill). Every primitive is drawn inside a
//! [`render::Frame`] scope that tags its geometry with a hierarchical name
//! stack, so a later pick query can recover exactly which atom or bond was
//! struck.
//!
//! # Key entry points
//!
//! - [`viewport::Viewport`] - drives the enabled engines over a molecule each
//!   frame and answers pick queries
//! - [`engine::Engine`] - the per-primitive render contract
//! - [`plugin::discover`] - builds engines and extensions from plugin
//!   manifests found on the search path
//! - [`options::Options`] - TOML-backed style, plugin and picking settings
//!
//! # Architecture
//!
//! Rendering is single threaded and strictly sequential. Engines never touch
//! global state: the name stack and the style state (material, point size,
//! line width) live in the [`render::Frame`] being built, and
//! [`render::Frame::scope`] restores both when a primitive's scope ends, on
//! every exit path. The recorded frame can be picked on the CPU
//! ([`viewport::Viewport::pick`]) or flattened into GPU vertex data with pick
//! ids ([`gpu::FrameGeometry`]).

pub mod camera;
pub mod color;
pub mod element;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod molecule;
pub mod options;
pub mod plugin;
pub mod render;
pub mod viewport;
