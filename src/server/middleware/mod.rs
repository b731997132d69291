//! Request-scoped helpers: typed session access and role checks.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
