// handlers/mod.rs - Handler tiers
//
// Public (no auth): service banner and health probe, defined next to the
// router in lib.rs.
// Protected (session auth): everything under /api/*.

pub mod protected;

pub use protected::*;
