use sqlx::{FromRow, Row, postgres::PgRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl Product {
    /// Unsaved product; the id is assigned by the database on insert.
    pub fn new(name: &str, price: f32, discount: f32, store: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            price,
            discount,
            store: store.to_string(),
        }
    }
}

// Decoded by position: id, name, price, discount, store.
impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            price: row.try_get(2)?,
            discount: row.try_get(3)?,
            store: row.try_get(4)?,
        })
    }
}
