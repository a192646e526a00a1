//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and the load orchestration, and
//! delegates rendering details to `components`.

pub mod collections;
