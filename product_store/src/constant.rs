// Column order is fixed: id, name, price, discount, store.
pub const SELECT_ALL_PRODUCTS: &str = "SELECT id, name, price, discount, store FROM products";
pub const SELECT_PRODUCTS_BY_STORE: &str =
    "SELECT id, name, price, discount, store FROM products WHERE store = $1";
pub const SELECT_PRODUCT_BY_ID: &str =
    "SELECT id, name, price, discount, store FROM products WHERE id = $1";
pub const INSERT_PRODUCT: &str =
    "INSERT INTO products (name, price, discount, store) VALUES ($1, $2, $3, $4)";

pub const LOGGING_GET_ALL_FAILED: &str = "Error while getting all products";
pub const LOGGING_GET_BY_STORE_FAILED: &str = "Error while getting products by store";
pub const LOGGING_ADD_FAILED: &str = "Failed to add new product";
pub const LOGGING_PRODUCT_ADDED: &str = "Product added";
