//! Perfect-play Tic-Tac-Toe engine. The [`game`] module implements the rules,
//! [`search`] finds the optimal action with exhaustive minimax and [`Engine`]
//! exposes both over a line-based text protocol.
//!
//! ```
//! use noughts::game::board::Board;
//! use noughts::search::minimax;
//!
//! let mut board = Board::initial();
//! while let Some(action) = minimax(&board) {
//!     board = board.result(action).unwrap();
//! }
//! // Optimal play from both sides always ends in a tie.
//! assert!(board.is_terminal());
//! assert_eq!(board.winner(), None);
//! assert_eq!(board.utility(), 0);
//! ```

// TODO: Gradually move most of warnings to deny.
#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod game;
pub mod search;

mod engine;
pub use engine::{selfplay, Engine};
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}
