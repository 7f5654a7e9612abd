// Durable document store — plain CRUD over the posts table.
// The suggestion core does not depend on it.

pub mod handlers;
