// HTML layer: route table and askama page handlers

pub mod handlers;
pub mod routes;
