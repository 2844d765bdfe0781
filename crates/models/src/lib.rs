pub mod errors;
pub mod db;
pub mod slug;
pub mod form;
pub mod service_category;
pub mod service_subcategory;
pub mod service;
pub mod service_price;

#[cfg(test)]
mod tests;
