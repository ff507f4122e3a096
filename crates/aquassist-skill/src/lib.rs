//! Request dispatch for the AquaAssist voice skill.
//!
//! Resolves site names, aggregates consumption readings, and routes each
//! inbound request through an ordered handler chain wrapped in an
//! exception boundary.

pub mod aggregate;
pub mod boundary;
pub mod error;
pub mod handler;
pub mod router;
pub mod sites;
pub mod skill;

pub use aggregate::{Aggregate, Aggregator};
pub use boundary::{CatchAllExceptionHandler, ExceptionHandler};
pub use error::{AggregateError, SkillError};
pub use handler::RequestHandler;
pub use router::RequestRouter;
pub use sites::SiteResolver;
pub use skill::{Skill, SkillBuilder};
