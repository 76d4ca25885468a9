//! Per-resource endpoint declarations. One param struct + `Endpoint` impl per
//! operation; body sub-structs live next to the operation that sends them.

pub mod dashboard;
pub mod oauth;
pub mod project;
pub mod user;
