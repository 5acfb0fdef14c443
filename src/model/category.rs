use serde::Serialize;

/// A safety-guideline category. Compiled in, never mutated.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
}

/// The emergency-evacuation category table, in display order.
pub const DISASTER_CATEGORIES: &[Category] = &[
    Category { id: "1", title: "민방공 경보" },
    Category { id: "2", title: "테러" },
];
