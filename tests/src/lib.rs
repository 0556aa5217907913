//! # Hierarchical Fork Choice Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Import pipeline flows over the public API
//! └── exploits/         # Attack simulations against the reorg rule
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hc-tests
//! cargo test -p hc-tests exploits::
//! cargo bench -p hc-tests
//! ```

pub mod exploits;
