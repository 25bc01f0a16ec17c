//! Matrix decompositions and iterative methods.
//!
//! | Algorithm | Module | Result |
//! |-----------|--------|--------|
//! | LU (no pivoting) | [`lu`] | `A = LU` |
//! | QR (Gram-Schmidt) | [`qr`] | `A = QR` |
//! | Power iteration | [`power`] | dominant eigenpair |
//! | Rank | [`rank`](mod@rank) | pivot count |

pub mod lu;
pub mod power;
pub mod qr;
pub mod rank;

pub use lu::LuDecomposition;
pub use power::{EigenPair, PowerIterationOptions, power_iteration, power_iteration_with};
pub use qr::QrDecomposition;
pub use rank::rank;
