/*!
 * Monitoring Module
 * Logging setup shared by the library and the command-line front end
 */

mod tracer;

pub use tracer::init_tracing;
