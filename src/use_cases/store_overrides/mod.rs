mod create;
mod delete;
mod list;

pub use create::create_store_override;
pub use delete::delete_store_override;
pub use list::list_store_overrides;
