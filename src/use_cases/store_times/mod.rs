mod create;
mod delete;
mod list;

pub use create::create_store_time;
pub use delete::delete_store_time;
pub use list::list_store_times;
