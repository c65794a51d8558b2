//! Rule switches carried by a `GameState`.

/// Options that change how moves are generated and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Drop candidate moves that leave the mover's own king threatened.
    /// With this off, only the raw piece geometry is enforced.
    pub filter_self_check: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            filter_self_check: true,
        }
    }
}

impl RulesConfig {
    /// Geometry-only rules: no self-check filtering.
    pub const fn geometry_only() -> Self {
        Self {
            filter_self_check: false,
        }
    }
}
