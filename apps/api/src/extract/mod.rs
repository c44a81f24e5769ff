//! PDF extraction adapters — two independent passes over the same bytes.
//!
//! Text extraction needs the whole document; preview rendering only the
//! first page. Keeping the passes separate keeps their failure modes
//! independent: a preview failure never blocks analysis.

pub mod preview;
pub mod text;
