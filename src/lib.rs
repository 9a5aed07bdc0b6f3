//! Ingestion pipeline for the CMRIT competitive-programming leaderboard.
//!
//! Two structurally identical pipelines pull published data from GitHub on
//! each run: the leaderboard workbook (xlsx) and the participant details
//! CSV. Each pipeline is fetch → decode → normalize, ending in a typed row
//! collection that a grid widget can bind to.

pub mod decode;
pub mod fetch;
pub mod grid;
pub mod normalize;
