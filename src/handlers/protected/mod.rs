// handlers/protected/mod.rs - Protected handlers (session authentication required)
//
// Every handler in this tier runs behind the session middleware and can
// assume a decoded Session extension is present on the request.
//
// Route prefix: /api/*

pub mod subjects;

pub use subjects::*;
