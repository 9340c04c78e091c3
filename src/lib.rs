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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Camera and scene navigation core for a 3D photo point-cloud viewer.
//!
//! The host renders a cloud of photo nodes inside one scene group and owns
//! the live camera. This crate decides how both move: it flies the camera
//! to a selected node, switches layouts with a camera reset followed by a
//! group transition, retraces earlier viewpoints, and spins the group while
//! the user is idle.
//!
//! # Key entry points
//!
//! - [`controller::SceneController`] - event router and per-frame driver
//! - [`host::SceneHost`] - what the host exposes (camera pose, scene group)
//! - [`camera::CameraNavigator`] - camera flights and navigation history
//! - [`scene::SceneNavigator`] - node placement, layouts, auto-rotation
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`session`] - headless replay of scripted event sequences
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. Moves are tweens held
//! by an [`animation::Animator`]; each frame the controller advances them,
//! commits the exact end state of every move whose tweens have all
//! resolved, and integrates auto-rotation. Starting a move cancels the
//! tweens of the move it replaces, so only the newest move ever commits.

pub mod animation;
pub mod camera;
pub mod controller;
pub mod error;
pub mod host;
pub mod options;
pub mod scene;
pub mod session;
#[cfg(feature = "web")]
pub mod web;
