//! Re-exports the `vecmath` surface. The `trivec` binary checks its identities.

pub use vecmath::prelude;
