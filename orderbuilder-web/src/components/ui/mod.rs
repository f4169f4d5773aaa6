pub mod category_selector;
pub mod order_builder;
pub mod order_summary;
