//! FFT Butterfly Kernels
//!
//! This module contains the butterfly engine that mixes a bit reversed buffer into its
//! DFT. The hot combine pass is compiled for several targets and selected at runtime based
//! on available CPU features.
//!
//! ## Organization
//!
//! - `common`: Limited range complex arithmetic and the radix-2 leaf
//! - `radix4`: The radix-4 combine pass and the recursion that drives it

pub mod common;
pub mod radix4;
