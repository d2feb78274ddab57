use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select, sea_query::LikeExpr};

const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters so `needle` only ever matches itself.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// `LIKE '%needle%' ESCAPE '\'` with the needle taken literally.
pub fn contains_pattern(needle: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(needle))).escape(LIKE_ESCAPE)
}

pub trait FilterContains {
    /// Keep rows whose `column` contains `needle` as a literal, case-sensitive substring.
    fn filter_contains<C: ColumnTrait>(self, column: C, needle: &str) -> Self;
}

impl<E> FilterContains for Select<E>
where
    E: EntityTrait,
{
    fn filter_contains<C: ColumnTrait>(self, column: C, needle: &str) -> Self {
        self.filter(column.like(contains_pattern(needle)))
    }
}
