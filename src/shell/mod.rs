// Composition root for the analytics bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete record slot and wire it into the tracking handler.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
