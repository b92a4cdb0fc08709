mod recipes;
mod server;
mod shopping;
mod stores;

pub use recipes::list_recipes;
pub use server::serve;
pub use shopping::shopping_list;
pub use stores::list_stores;
